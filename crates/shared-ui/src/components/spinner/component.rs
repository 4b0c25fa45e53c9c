use dioxus::prelude::*;

/// Indeterminate progress spinner for gate and analyzing states.
#[component]
pub fn Spinner(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "spinner", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "status",
            aria_label: "Loading",
            ..merged,
        }
    }
}
