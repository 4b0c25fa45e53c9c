use dioxus::prelude::*;

mod analysis;
mod auth;
mod format_helpers;
mod routes;
mod session;

use analysis::{AnalysisClient, StubAnalysisProvider};
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    // The analysis backend seam. Swap the provider here to point the
    // dashboard at a real service; the view itself never changes.
    use_context_provider(|| AnalysisClient::new(StubAnalysisProvider::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
