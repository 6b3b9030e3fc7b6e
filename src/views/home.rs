use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Welcome"
            }
            p {
                class: "text-muted",
                "Switch between light and dark with the button in the corner. Your choice is remembered."
            }
        }
    }
}
