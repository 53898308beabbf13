use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{ApiClient, DefaultTransport},
    config::Config,
    router::Route,
    session::{storage::DefaultStorage, SessionContext},
};

/// Session context shared with every view through a signal
pub type AppContext = SessionContext<DefaultTransport, DefaultStorage>;

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(init_context()));

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            Router::<Route> {}
        }
    }
}

/// Build the context and restore any persisted session before the first render
fn init_context() -> AppContext {
    let config = Config::from_env().unwrap_or_else(|err| {
        tracing::error!("Configuration error, using default API URL: {}", err);

        Config::default()
    });

    tracing::info!(api_base_url = %config.api_base_url, "Using API");

    let api = ApiClient::new(config.api_base_url, DefaultTransport::default());
    let mut context = SessionContext::new(api, DefaultStorage::default());
    context.restore();

    context
}
