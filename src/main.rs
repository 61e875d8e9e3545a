//! cepRace - fastest-answer postal code lookup
//!
//! This is the composition root that wires together all the components.

use cep_race::adapters::inbound::CliRunner;
use cep_race::adapters::outbound::{
    BrasilApiSource, ReqwestHttpFetcher, TracingReporter, ViaCepSource,
};
use cep_race::{load_config, AddressSource, HttpFetcher, RaceService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;
    let settings = cfg.race_settings()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    // ===== COMPOSITION ROOT =====

    // 1. Outbound adapters
    let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestHttpFetcher::new()?);
    let sources: Vec<Arc<dyn AddressSource>> = vec![
        Arc::new(BrasilApiSource::new(cfg.brasil_api_url.clone(), fetcher.clone())),
        Arc::new(ViaCepSource::new(cfg.via_cep_url.clone(), fetcher)),
    ];

    // 2. Application service
    let race_service = Arc::new(RaceService::new(
        sources,
        Arc::new(TracingReporter::new()),
        settings,
    ));

    tracing::debug!(
        sources = race_service.source_count(),
        timeout_ms = cfg.timeout_ms,
        policy = %cfg.policy,
        "starting cepRace"
    );

    // 3. Inbound adapter
    let runner = CliRunner::new(race_service);
    let key = CliRunner::lookup_key(std::env::args().skip(1), &cfg.cep);

    runner.run(&key, &mut std::io::stdout().lock()).await?;
    Ok(())
}
