use dioxus::prelude::*;

use crate::domain::{ShippingOption, TransportLeg};

/// Pre-rendered view of one recommendation card. Built from a
/// `ShippingOption` exactly as the backend classified it.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionCardView {
    pub title: String,
    pub icon: &'static str,
    pub accent: &'static str,
    pub price_label: String,
    pub transit_label: String,
    pub mode: String,
    pub legs: Vec<String>,
    pub carbon_label: Option<String>,
    pub reliability_label: Option<String>,
}

impl OptionCardView {
    pub fn build(
        title: impl Into<String>,
        icon: &'static str,
        accent: &'static str,
        option: &ShippingOption,
    ) -> Self {
        Self {
            title: title.into(),
            icon,
            accent,
            price_label: format!("${:.2}", option.price),
            transit_label: format!("{} days", option.transit_days),
            mode: option.mode.clone(),
            legs: option.route.iter().map(leg_label).collect(),
            carbon_label: option
                .carbon_footprint
                .map(|kg| format!("Carbon footprint: {kg:.0} kg CO2")),
            reliability_label: option
                .reliability
                .map(|score| format!("Reliability score: {score:.2}")),
        }
    }
}

fn leg_label(leg: &TransportLeg) -> String {
    let mut label = format!(
        "{} · {} → {} ({})",
        leg.mode, leg.origin, leg.destination, leg.duration
    );
    if let Some(carrier) = &leg.carrier {
        label.push_str(&format!(" via {carrier}"));
    }
    label
}

#[component]
pub fn OptionCard(view: OptionCardView) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-slate-800 bg-slate-900/40 p-6 border-l-4 {view.accent}",
            div { class: "mb-3 flex items-center justify-between",
                h3 { class: "text-lg font-semibold text-slate-100", "{view.icon} {view.title}" }
            }
            div { class: "mb-4 grid grid-cols-3 gap-4",
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "Price" }
                    p { class: "text-2xl font-bold text-slate-100", "{view.price_label}" }
                }
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "Transit Time" }
                    p { class: "text-2xl font-bold text-slate-100", "{view.transit_label}" }
                }
                div {
                    p { class: "text-xs uppercase tracking-wide text-slate-500", "Mode" }
                    p { class: "text-lg font-semibold text-slate-100", "{view.mode}" }
                }
            }
            div {
                p { class: "mb-2 text-xs uppercase tracking-wide text-slate-500", "Route" }
                div { class: "space-y-1",
                    for leg in view.legs.iter() {
                        p { class: "font-mono text-sm text-slate-300", "{leg}" }
                    }
                }
            }
            if let Some(ref carbon) = view.carbon_label {
                p { class: "mt-4 text-xs text-slate-400", "{carbon}" }
            }
            if let Some(ref reliability) = view.reliability_label {
                p { class: "mt-1 text-xs text-slate-400", "{reliability}" }
            }
        }
    }
}
