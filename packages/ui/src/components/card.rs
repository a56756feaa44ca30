use dioxus::prelude::*;

/// Bordered surface with an optional heading.
#[component]
pub fn Card(title: Option<String>, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        section { class: "card {class}",
            if let Some(title) = title {
                h3 { class: "card-title", "{title}" }
            }
            div { class: "card-body", {children} }
        }
    }
}
