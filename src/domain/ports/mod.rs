mod address_source;
mod http_fetcher;
mod race_reporter;

pub use address_source::AddressSource;
pub use http_fetcher::HttpFetcher;
pub use race_reporter::RaceReporter;
