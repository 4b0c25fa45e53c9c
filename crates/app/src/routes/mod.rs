pub mod dashboard;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserCheck;
use dioxus_free_icons::Icon;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{Button, ButtonVariant, Navbar, Separator};

use crate::auth::use_auth;
use crate::session::SessionStore;

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(SessionGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Session gate — redirects to /login when no persisted session exists.
///
/// The storage read is async (it round-trips the browser), so until it
/// resolves this renders a neutral spinner and nothing else. An absent
/// marker key never renders the authenticated chrome; it clears in-memory
/// auth and leaves the view for the login screen.
#[component]
fn SessionGuard() -> Element {
    let mut auth = use_auth();

    let stored = use_resource(|| async move { SessionStore::load().await });

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = stored.read().as_ref().cloned();

    match result {
        Some(Some(session)) => {
            if !auth.is_authenticated() {
                auth.set_session(session);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(None) => {
            auth.clear();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "session-gate",
                    shared_ui::Spinner {}
                }
            }
        }
        None => {
            rsx! {
                div { class: "session-gate",
                    shared_ui::Spinner {}
                }
            }
        }
    }
}

/// Authenticated chrome: top navbar with brand, user chip, theme toggle,
/// and sign-out.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();

    let mut theme_state = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    });

    let email = auth.email();
    let next_mode = theme_state.mode.read().toggled();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            div { class: "navbar-bar",
                span { class: "navbar-brand", "MedInsight" }
                span { class: "navbar-brand-sub", "Document AI" }

                Separator { horizontal: false }

                // Spacer
                div { class: "navbar-spacer" }

                div { class: "navbar-user",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 16, height: 16 }
                    span { class: "navbar-user-email", "{email}" }
                }

                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| theme_state.toggle(),
                    "{next_mode.display_name()}"
                }

                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        SessionStore::clear();
                        auth.clear();
                        tracing::info!("signed out");
                        navigator().push(Route::Login {});
                    },
                    "Sign Out"
                }
            }
        }

        div { class: "page-content",
            Outlet::<Route> {}
        }
    }
}
