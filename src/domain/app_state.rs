use time::OffsetDateTime;

use super::quote::QuoteResponse;
use super::shipment::ShipmentRequest;

/// Session-wide state shared across pages. Lives for the lifetime of the
/// window; nothing here is persisted.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// The shipment record the form is accumulating.
    pub request: ShipmentRequest,
    /// Last successful quoting result, if any.
    pub results: Option<QuoteResponse>,
    /// True while a quote request is in flight; the submit control is
    /// disabled but nothing is cancelled or queued.
    pub loading: bool,
    /// Display text of the last failed request.
    pub error: Option<String>,
    /// When `results` was received.
    pub quoted_at: Option<OffsetDateTime>,
}

impl AppState {
    pub fn store_results(&mut self, response: QuoteResponse) {
        self.results = Some(response);
        self.quoted_at = Some(OffsetDateTime::now_utc());
        self.error = None;
        self.loading = false;
    }

    pub fn store_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Discards results so the form shows again. The previous request is
    /// kept for editing.
    pub fn clear_results(&mut self) {
        self.results = None;
        self.quoted_at = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_keeps_previous_results_absent() {
        let mut state = AppState::default();
        state.loading = true;
        state.store_error("Failed to get quotes: connection refused".to_string());
        assert!(state.results.is_none());
        assert!(!state.loading);
        assert!(state.error.is_some());
    }

    #[test]
    fn clear_results_resets_outcome_but_not_request() {
        let mut state = AppState::default();
        state.request.set_field("origin", "Shanghai, China");
        state.store_error("boom".to_string());
        state.clear_results();
        assert!(state.error.is_none());
        assert!(state.quoted_at.is_none());
        assert_eq!(state.request.origin, "Shanghai, China");
    }
}
