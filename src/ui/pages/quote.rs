use dioxus::prelude::*;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::{
    domain::{
        AppState, Incoterm, QuoteResponse, RecommendationRequest, ShipmentRequest, SHIPMENT_TYPES,
    },
    infra::api::FreightApiClient,
    ui::components::{
        option_card::{OptionCard, OptionCardView},
        options_table::{OptionRow, OptionsTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

const INPUT_CLASS: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none";
const LABEL_CLASS: &str = "block text-xs font-semibold uppercase text-slate-500";

#[component]
pub fn QuotePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let results = state.with(|st| st.results.clone());

    match results {
        Some(response) => rsx! { ResultsView { response } },
        None => rsx! { ShipmentForm {} },
    }
}

#[component]
fn ShipmentForm() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let quote_request = use_context::<Signal<Option<ShipmentRequest>>>();

    let request = state.with(|st| st.request.clone());
    let loading = state.with(|st| st.loading);
    let error = state.with(|st| st.error.clone());
    let weight_unit = request.weight_unit.label();
    let incoterm_code = request.incoterms.code();

    let on_submit = {
        let mut state = state.clone();
        let mut quote_request = quote_request.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if state.with(|st| st.loading) {
                return;
            }
            let snapshot = state.with(|st| st.request.clone());
            state.with_mut(|st| {
                st.loading = true;
                st.error = None;
            });
            quote_request.set(Some(snapshot));
        }
    };

    let on_validate = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let snapshot = state.with(|st| st.request.clone());
            let toasts = toasts.clone();
            spawn(async move {
                let client = match FreightApiClient::from_env() {
                    Ok(client) => client,
                    Err(err) => {
                        push_toast(toasts, ToastKind::Error, format!("Validation failed: {err}"));
                        return;
                    }
                };
                match client.validate(&snapshot).await {
                    Ok(report) => {
                        for warning in &report.warnings {
                            push_toast(toasts.clone(), ToastKind::Warning, warning.clone());
                        }
                        for error in &report.errors {
                            push_toast(toasts.clone(), ToastKind::Error, error.clone());
                        }
                        if report.valid && report.errors.is_empty() {
                            push_toast(
                                toasts.clone(),
                                ToastKind::Success,
                                "Shipment details look good.",
                            );
                        }
                    }
                    Err(err) => {
                        push_toast(toasts, ToastKind::Error, format!("Validation failed: {err}"));
                    }
                }
            });
        }
    };

    rsx! {
        form {
            class: "space-y-8 rounded-xl border border-slate-800 bg-slate-900/40 p-6",
            onsubmit: on_submit,

            section {
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Shipment Types" }
                div { class: "mt-3 flex flex-wrap gap-4",
                    for tag in SHIPMENT_TYPES {
                        label { class: "flex cursor-pointer items-center gap-2 text-sm text-slate-200",
                            input {
                                r#type: "checkbox",
                                class: "h-4 w-4 rounded border-slate-600 accent-indigo-500",
                                checked: request.has_shipment_type(tag),
                                oninput: move |_| state.with_mut(|st| st.request.toggle_shipment_type(tag)),
                            }
                            span { "{tag}" }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Cargo" }
                div { class: "mt-3 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: LABEL_CLASS, "Weight" }
                        div { class: "flex gap-2",
                            input {
                                class: "{INPUT_CLASS} flex-1",
                                r#type: "number",
                                min: "0",
                                step: "0.1",
                                value: "{request.weight}",
                                oninput: move |evt| state.with_mut(|st| st.request.set_field("weight", &evt.value())),
                            }
                            select {
                                class: "{INPUT_CLASS} w-24",
                                value: "{weight_unit}",
                                oninput: move |evt| state.with_mut(|st| st.request.set_field("weightUnit", &evt.value())),
                                option { value: "kg", "kg" }
                                option { value: "tons", "tons" }
                            }
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Volume (CBM)" }
                        input {
                            class: INPUT_CLASS,
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            value: "{request.volume}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("volume", &evt.value())),
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Commodity" }
                        input {
                            class: INPUT_CLASS,
                            placeholder: "e.g. Electronics, Textiles",
                            value: "{request.commodity}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("commodity", &evt.value())),
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "HS Code" }
                        input {
                            class: INPUT_CLASS,
                            placeholder: "e.g. 850231",
                            value: "{request.hs_code}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("hsCode", &evt.value())),
                        }
                    }
                }
                div { class: "mt-4 flex flex-wrap gap-6",
                    label { class: "flex cursor-pointer items-center gap-2 text-sm text-slate-200",
                        input {
                            r#type: "checkbox",
                            class: "h-4 w-4 rounded border-slate-600 accent-indigo-500",
                            checked: request.hazardous,
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("hazardous", &evt.value())),
                        }
                        span { "Hazardous Material" }
                    }
                    label { class: "flex cursor-pointer items-center gap-2 text-sm text-slate-200",
                        input {
                            r#type: "checkbox",
                            class: "h-4 w-4 rounded border-slate-600 accent-indigo-500",
                            checked: request.temperature_controlled,
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("temperatureControlled", &evt.value())),
                        }
                        span { "Temperature Controlled" }
                    }
                }
            }

            section {
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Route" }
                div { class: "mt-3 grid gap-4 sm:grid-cols-2",
                    div {
                        label { class: LABEL_CLASS, "Origin (Address/Port/Airport)" }
                        input {
                            class: INPUT_CLASS,
                            placeholder: "e.g. Shanghai, China",
                            value: "{request.origin}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("origin", &evt.value())),
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Destination (Address/Port/Airport)" }
                        input {
                            class: INPUT_CLASS,
                            placeholder: "e.g. Rotterdam, Netherlands",
                            value: "{request.destination}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("destination", &evt.value())),
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Preferred Departure Window" }
                        input {
                            class: INPUT_CLASS,
                            r#type: "date",
                            value: "{request.departure_window}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("departureWindow", &evt.value())),
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Incoterms" }
                        select {
                            class: INPUT_CLASS,
                            value: "{incoterm_code}",
                            oninput: move |evt| state.with_mut(|st| st.request.set_field("incoterms", &evt.value())),
                            for term in Incoterm::ALL {
                                option { value: term.code(), {term.description()} }
                            }
                        }
                    }
                }
            }

            section {
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-slate-500", "Extra Services" }
                div { class: "mt-3 grid gap-3 sm:grid-cols-2",
                    ServiceCheckbox {
                        label: "Customs Clearance",
                        field: "customsClearance",
                        checked: request.customs_clearance,
                    }
                    ServiceCheckbox {
                        label: "Insurance",
                        field: "insurance",
                        checked: request.insurance,
                    }
                    ServiceCheckbox {
                        label: "Last-Mile Delivery",
                        field: "lastMileDelivery",
                        checked: request.last_mile_delivery,
                    }
                    ServiceCheckbox {
                        label: "Warehousing",
                        field: "warehousing",
                        checked: request.warehousing,
                    }
                }
            }

            if let Some(ref message) = error {
                div { class: "rounded-lg border border-rose-500/40 bg-rose-500/10 px-4 py-3",
                    p { class: "text-sm text-rose-200", "{message}" }
                }
            }

            div { class: "flex gap-3",
                button {
                    class: "flex-1 rounded-lg bg-indigo-500 px-4 py-3 font-semibold text-white transition hover:bg-indigo-400 disabled:cursor-not-allowed disabled:bg-slate-700",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Getting Quotes..." } else { "Get Freight Quotes" }
                }
                button {
                    class: "rounded-lg border border-slate-600 px-4 py-3 text-sm font-semibold text-slate-200 hover:bg-slate-800",
                    r#type: "button",
                    onclick: on_validate,
                    "Validate"
                }
            }
        }
    }
}

/// One of the four extra-service checkboxes; routes through the same
/// field reducer as every other input.
#[component]
fn ServiceCheckbox(label: &'static str, field: &'static str, checked: bool) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    rsx! {
        label { class: "flex cursor-pointer items-center gap-2 text-sm text-slate-200",
            input {
                r#type: "checkbox",
                class: "h-4 w-4 rounded border-slate-600 accent-indigo-500",
                checked: checked,
                oninput: move |evt| state.with_mut(|st| st.request.set_field(field, &evt.value())),
            }
            span { "{label}" }
        }
    }
}

#[component]
fn ResultsView(response: QuoteResponse) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let analysis = use_signal(|| None::<String>);
    let analyzing = use_signal(|| false);

    let quoted_label = state.with(|st| st.quoted_at.map(format_quoted_at));

    let cards = vec![
        OptionCardView::build(
            "Cheapest Option",
            "💰",
            "border-l-emerald-500",
            &response.cheapest,
        ),
        OptionCardView::build("Fastest Option", "⚡", "border-l-sky-500", &response.fastest),
        OptionCardView::build("Best Value", "⭐", "border-l-violet-500", &response.best_value),
    ];
    let rows: Vec<OptionRow> = response.options.iter().map(OptionRow::from).collect();

    let on_new_search = move |_| state.with_mut(|st| st.clear_results());

    let on_analyze = {
        let response = response.clone();
        let state = state.clone();
        let toasts = toasts.clone();
        let analysis = analysis.clone();
        let analyzing = analyzing.clone();
        move |_| {
            if analyzing() {
                return;
            }
            let request = RecommendationRequest {
                shipment_details: state.with(|st| st.request.clone()),
                options: response.options.clone(),
                priorities: None,
            };
            let toasts = toasts.clone();
            let mut analysis = analysis.clone();
            let mut analyzing = analyzing.clone();
            analyzing.set(true);
            spawn(async move {
                let client = match FreightApiClient::from_env() {
                    Ok(client) => client,
                    Err(err) => {
                        analyzing.set(false);
                        push_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Failed to get recommendations: {err}"),
                        );
                        return;
                    }
                };
                match client.get_recommendations(&request).await {
                    Ok(report) => {
                        analysis.set(Some(report.analysis));
                        analyzing.set(false);
                    }
                    Err(err) => {
                        analyzing.set(false);
                        push_toast(
                            toasts,
                            ToastKind::Error,
                            format!("Failed to get recommendations: {err}"),
                        );
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "space-y-8",
            div { class: "flex items-center justify-between",
                button {
                    class: "rounded-lg bg-slate-700 px-4 py-2 text-sm font-semibold text-white transition hover:bg-slate-600",
                    onclick: on_new_search,
                    "← New Search"
                }
                if let Some(ref label) = quoted_label {
                    p { class: "text-xs text-slate-500", "Request {response.request_id} · {label}" }
                }
            }

            section {
                class: "rounded-xl border border-indigo-500/30 bg-indigo-500/10 p-6",
                h2 { class: "text-lg font-semibold text-slate-100", "AI Recommendations" }
                p { class: "mt-2 text-sm leading-relaxed text-slate-300", "{response.ai_summary}" }
                div { class: "mt-4 flex items-center gap-3",
                    button {
                        class: "rounded-lg border border-indigo-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-indigo-200 hover:bg-indigo-500/10 disabled:cursor-not-allowed disabled:opacity-50",
                        disabled: analyzing(),
                        onclick: on_analyze,
                        if analyzing() { "Analyzing..." } else { "Analyze Further" }
                    }
                }
                if let Some(ref text) = analysis() {
                    p { class: "mt-4 border-t border-indigo-500/20 pt-4 text-sm leading-relaxed text-slate-300", "{text}" }
                }
            }

            section { class: "grid gap-6",
                for view in cards {
                    OptionCard { view }
                }
            }

            section {
                h2 { class: "mb-4 text-lg font-semibold text-slate-100", "All Options" }
                OptionsTable { rows }
            }
        }
    }
}

fn format_quoted_at(timestamp: OffsetDateTime) -> String {
    let format = format_description!("quoted at [hour]:[minute] UTC");
    timestamp
        .format(&format)
        .unwrap_or_else(|_| "quoted just now".to_string())
}
