//! CLI Adapter
//!
//! Drives a single race from the command line and turns its terminal
//! outcome into output and an exit status.

use crate::application::RaceService;
use crate::domain::entities::Address;
use crate::domain::value_objects::LookupKey;
use std::io::Write;
use std::sync::Arc;

/// CLI runner - inbound adapter for one lookup per process.
///
/// 1. Picks the postal code (first argument, else the configured default)
/// 2. Runs the race through RaceService
/// 3. Writes the resolved address as JSON, or fails with the race error
pub struct CliRunner {
    race_service: Arc<RaceService>,
}

impl CliRunner {
    pub fn new(race_service: Arc<RaceService>) -> Self {
        Self { race_service }
    }

    /// Choose the lookup key: the first non-empty argument wins.
    pub fn lookup_key<I>(args: I, default_cep: &str) -> LookupKey
    where
        I: IntoIterator<Item = String>,
    {
        args.into_iter()
            .find(|arg| !arg.is_empty())
            .map(LookupKey::from)
            .unwrap_or_else(|| LookupKey::from(default_cep))
    }

    /// Race `key` and write the address to `out`.
    pub async fn run<W: Write>(&self, key: &LookupKey, out: &mut W) -> anyhow::Result<Address> {
        let address = self.race_service.race(key).await.into_result()?;

        serde_json::to_writer_pretty(&mut *out, &address)?;
        writeln!(out)?;

        Ok(address)
    }
}
