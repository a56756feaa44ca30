use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowTrendUp, FaChartBar, FaGithub, FaInstagram, FaLinkedin, FaShieldHalved};
use crate::{use_navigation, Destination, Icon};

use super::backdrop::{Backdrop, WELCOME_CURVE};
use super::page_title;

const GITHUB_URL: &str = "https://github.com/Jeanikt/Fiscalis";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/jeanfoliveira";
const INSTAGRAM_URL: &str = "https://www.instagram.com/jewknd/";

/// Public landing page.
#[component]
pub fn Welcome() -> Element {
    let navigation = use_navigation();
    let hovered = use_signal(|| Option::<usize>::None);
    let title = page_title("Welcome");

    rsx! {
        document::Title { "{title}" }
        div { class: "welcome",
            Backdrop { curve: WELCOME_CURVE }
            div { class: "welcome-content",
                div { class: "welcome-hero",
                    h1 { "Welcome to Fiscalis" }
                    p {
                        "Your personal financial management application that helps you control your finances effectively."
                    }
                }
                div { class: "feature-grid",
                    FeatureCard {
                        index: 0,
                        hovered: hovered,
                        title: "Track Expenses",
                        description: "Easily monitor your spending habits",
                        Icon { icon: FaChartBar, width: 48, height: 48 }
                    }
                    FeatureCard {
                        index: 1,
                        hovered: hovered,
                        title: "Create Budgets",
                        description: "Set and manage financial goals",
                        Icon { icon: FaShieldHalved, width: 48, height: 48 }
                    }
                    FeatureCard {
                        index: 2,
                        hovered: hovered,
                        title: "Financial Analysis",
                        description: "Gain insights with interactive charts",
                        Icon { icon: FaArrowTrendUp, width: 48, height: 48 }
                    }
                }
                div { class: "welcome-actions",
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| navigation.go(Destination::Login),
                        "Log In"
                    }
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| navigation.go(Destination::Register),
                        "Get started"
                    }
                }
            }
            footer { class: "welcome-footer",
                a { href: GITHUB_URL, target: "_blank", rel: "noopener noreferrer", aria_label: "GitHub",
                    Icon { icon: FaGithub, width: 24, height: 24 }
                }
                a { href: LINKEDIN_URL, target: "_blank", rel: "noopener noreferrer", aria_label: "LinkedIn",
                    Icon { icon: FaLinkedin, width: 24, height: 24 }
                }
                a { href: INSTAGRAM_URL, target: "_blank", rel: "noopener noreferrer", aria_label: "Instagram",
                    Icon { icon: FaInstagram, width: 24, height: 24 }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(
    index: usize,
    mut hovered: Signal<Option<usize>>,
    title: String,
    description: String,
    children: Element,
) -> Element {
    let class = if hovered() == Some(index) {
        "feature-card feature-card--hover"
    } else {
        "feature-card"
    };

    rsx! {
        div {
            class: class,
            onmouseenter: move |_| hovered.set(Some(index)),
            onmouseleave: move |_| hovered.set(None),
            {children}
            h2 { "{title}" }
            p { "{description}" }
        }
    }
}
