use dioxus::prelude::*;

pub const WELCOME_CURVE: &str = "M0,0 L0,800 L1440,800 L1440,0 C1200,600 700,100 0,0 Z";
pub const AUTH_CURVE: &str = "M0,0 L0,800 L1440,800 L1440,0 C1200,100 200,600 0,0 Z";

/// Green gradient behind the public pages.
#[component]
pub fn Backdrop(curve: &'static str) -> Element {
    rsx! {
        div { class: "backdrop", aria_hidden: true,
            svg { view_box: "0 0 1440 800", preserve_aspect_ratio: "none",
                defs {
                    linearGradient { id: "backdrop-gradient", x1: "0%", y1: "0%", x2: "100%", y2: "100%",
                        stop { offset: "0%", stop_color: "#1F9B77" }
                        stop { offset: "100%", stop_color: "#004d60" }
                    }
                }
                path { fill: "url(#backdrop-gradient)", d: curve }
            }
            div { class: "backdrop-glow" }
        }
    }
}
