use dioxus::prelude::*;

use crate::{
    domain::AppState,
    infra::api::{FreightApiClient, BASE_URL_ENV},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{version_label, APP_NAME},
};

#[component]
pub fn SettingsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let endpoint = match FreightApiClient::from_env() {
        Ok(client) => client.base_url().to_string(),
        Err(err) => format!("invalid ({err})"),
    };
    let has_results = state.with(|st| st.results.is_some());
    let version = version_label();

    let on_clear_results = {
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| st.clear_results());
            push_toast(toasts.clone(), ToastKind::Info, "Cleared current results.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Backend" }
                p { class: "mt-3 text-sm text-slate-300", "Quoting API endpoint: " span { class: "font-mono text-slate-100", "{endpoint}" } }
                p { class: "mt-2 text-xs text-slate-500",
                    "Override with the {BASE_URL_ENV} environment variable. The app sends one request per action with no retries."
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Session" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Form input and quote results live only in this window; nothing is saved to disk."
                }
                button {
                    class: "mt-4 rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10 disabled:cursor-not-allowed disabled:opacity-50",
                    disabled: !has_results,
                    onclick: on_clear_results,
                    "Clear Current Results"
                }
            }

            section {
                class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-center text-slate-400",
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "About" }
                p { class: "mt-3 text-sm", "{APP_NAME} {version}" }
                p { class: "mt-1 text-xs text-slate-500",
                    "Rates, rankings and recommendations are produced entirely by the backend service."
                }
            }
        }
    }
}
