use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, ShipmentRequest},
    infra::api::FreightApiClient,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{QuotePage, SettingsPage},
        shell::Shell,
    },
    util::assets,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Quote {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Submit trigger shared with the quote page; Some(request) queues a
    // fetch, which clears it again when done.
    let quote_request = use_signal(|| None::<ShipmentRequest>);
    use_context_provider(|| quote_request.clone());

    let _quotes = use_resource({
        let state = state.clone();
        let toasts = toasts.clone();
        let quote_request = quote_request.clone();
        move || async move { fetch_quotes(state.clone(), toasts.clone(), quote_request.clone()).await }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

async fn fetch_quotes(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    mut quote_request: Signal<Option<ShipmentRequest>>,
) -> Option<String> {
    let Some(request) = quote_request() else {
        return None;
    };

    let client = match FreightApiClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            quote_request.set(None);
            let message = format!("Failed to get quotes: {err}");
            state.with_mut(|st| st.store_error(message.clone()));
            push_toast(toasts, ToastKind::Error, message);
            return None;
        }
    };

    println!("Requesting freight quotes from {}", client.base_url());

    match client.get_quotes(&request).await {
        Ok(response) => {
            quote_request.set(None);
            println!(
                "Received {} options for request {}",
                response.options.len(),
                response.request_id
            );
            let request_id = response.request_id.clone();
            state.with_mut(|st| st.store_results(response));
            Some(request_id)
        }
        Err(err) => {
            quote_request.set(None);
            println!("Quote request failed: {err}");
            let message = format!("Failed to get quotes: {err}");
            state.with_mut(|st| st.store_error(message.clone()));
            push_toast(toasts, ToastKind::Error, message);
            None
        }
    }
}

#[component]
pub fn Quote() -> Element {
    rsx! { Shell { QuotePage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
