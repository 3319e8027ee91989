use dioxus::prelude::*;

use crate::domain::ShippingOption;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub mode: String,
    pub price_label: String,
    pub transit_days: u32,
}

impl From<&ShippingOption> for OptionRow {
    fn from(option: &ShippingOption) -> Self {
        Self {
            mode: option.mode.clone(),
            price_label: format!("${:.2}", option.price),
            transit_days: option.transit_days,
        }
    }
}

/// Table of every option the backend returned, in backend order.
#[component]
pub fn OptionsTable(rows: Vec<OptionRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "overflow-hidden rounded-xl border border-slate-800 bg-slate-900/40",
            table {
                class: "min-w-full divide-y divide-slate-800 text-sm",
                thead {
                    class: "bg-slate-900/60 text-left tracking-wide text-slate-400",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Mode" }
                        th { class: "px-4 py-3 font-medium text-right", "Price (USD)" }
                        th { class: "px-4 py-3 font-medium text-right", "Transit (Days)" }
                        th { class: "px-4 py-3 font-medium text-right", "Actions" }
                    }
                }
                tbody {
                    class: "divide-y divide-slate-800",
                    for row in rows {
                        tr {
                            class: "transition-colors hover:bg-slate-800/40",
                            td { class: "px-4 py-3 font-medium text-slate-200", "{row.mode}" }
                            td { class: "px-4 py-3 text-right text-slate-200", "{row.price_label}" }
                            td { class: "px-4 py-3 text-right text-slate-200", "{row.transit_days}" }
                            td {
                                class: "px-4 py-3 text-right",
                                // Booking is not wired up yet.
                                button {
                                    class: "text-xs font-semibold uppercase tracking-wide text-indigo-300 hover:text-indigo-100",
                                    "Book"
                                }
                            }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm text-slate-500",
                                colspan: "4",
                                "The backend returned no options for this shipment."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formats_price_to_two_decimals() {
        let option: ShippingOption = serde_json::from_value(serde_json::json!({
            "mode": "Ocean",
            "price": 999.9,
            "transitDays": 25,
            "route": []
        }))
        .unwrap();
        let row = OptionRow::from(&option);
        assert_eq!(row.price_label, "$999.90");
        assert_eq!(row.transit_days, 25);
    }
}
