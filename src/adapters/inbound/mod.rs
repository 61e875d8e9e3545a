mod cli;

pub use cli::CliRunner;
