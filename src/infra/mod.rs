pub mod api;

#[allow(unused_imports)]
pub use api::{FreightApiClient, FreightApiError, BASE_URL_ENV};
