use dioxus::prelude::*;
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    // The controllers work on the rendered DOM, so wire them after mount.
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(e) = crate::controllers::boot(crate::configs::PageConfig::default()) {
                log::error!("Failed to wire page chrome: {}", e);
            }
        }
    });

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar shadow-lg transition-colors duration-200",
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    button {
                        id: "menuToggle",
                        class: "menu-toggle p-2 rounded-lg",
                        r#type: "button",
                        "aria-controls": "mobileMenu",
                        "aria-expanded": "false",
                        "☰"
                    }
                    div {
                        class: "nav-links flex items-center space-x-6",
                        Link { class: "nav-link", to: Route::Home, "Home" }
                    }
                    button {
                        id: "themeToggle",
                        class: "theme-toggle p-2 rounded-lg transition-colors",
                        r#type: "button",
                        span { id: "iconSun", "🌞" }
                        span { id: "iconMoon", class: "hidden", "🌙" }
                    }
                }
                div {
                    id: "mobileMenu",
                    class: "mobile-menu hidden",
                    Link { class: "nav-link block px-4 py-2", to: Route::Home, "Home" }
                }
            }
            Outlet::<Route> {}
        }
    }
}
