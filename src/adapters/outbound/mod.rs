mod brasil_api_source;
mod endpoint;
mod reqwest_fetcher;
mod tracing_reporter;
mod via_cep_source;

pub use brasil_api_source::{BrasilApiSource, DEFAULT_BRASIL_API_URL};
pub use reqwest_fetcher::ReqwestHttpFetcher;
pub use tracing_reporter::TracingReporter;
pub use via_cep_source::{ViaCepSource, DEFAULT_VIA_CEP_URL};
