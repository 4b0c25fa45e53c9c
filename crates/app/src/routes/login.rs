use dioxus::prelude::*;
use shared_types::Session;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

use crate::auth::use_auth;
use crate::routes::Route;
use crate::session::SessionStore;

/// Demo sign-in screen — the stand-in for a real identity service.
///
/// Any credentials with a well-formed email are accepted; signing in writes
/// the session keys the dashboard gate reads. Already-authenticated
/// visitors are bounced straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        let address = email.read().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            error_msg.set(Some("Enter a valid email address.".to_string()));
            return;
        }

        let session = Session::new(address);
        SessionStore::save(&session);
        tracing::info!(email = %session.email, "signed in");
        auth.set_session(session);
        navigator().push(Route::Dashboard {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Access the MedInsight document dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "clinician@example.org",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            "data-style": "primary",
                            "Sign In"
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-note",
                        "Demo build — any credentials are accepted."
                    }
                }
            }
        }
    }
}
