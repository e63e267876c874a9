use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use pokeapi_client::utils::render_summary;
use pokeapi_client::{fetch_outcome, Config, FetchOutcome};

/// Fetch a pokemon's base stats, types and first move from PokeAPI.
///
/// `POKEAPI_BASE_URL` and `POKEAPI_TIMEOUT_SECS` set the defaults; the flags
/// below override them.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Pokemon name (case-insensitive)
    name: String,

    /// API root, without the `/pokemon` segment
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds, applied to each of the two requests
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,

    /// Print the record as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Wrap width for the effect text in the summary
    #[arg(long, default_value_t = 72)]
    width: usize,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let client = config.build_client()?;

    match fetch_outcome(&client, &config.base_url, &cli.name).await? {
        FetchOutcome::Found(record) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print!("{}", render_summary(&record, cli.width));
            }
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("No record for {:?}: {}", cli.name, other);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "pokeapi-fetch",
            "Pikachu",
            "--base-url",
            "http://localhost:8000/api/v2/",
            "--timeout-secs",
            "3",
        ]);
        let config = cli.config();
        assert_eq!(config.base_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_timeout_flag_is_rejected() {
        let res = Cli::try_parse_from(["pokeapi-fetch", "pikachu", "--timeout-secs", "0"]);
        assert!(res.is_err());
    }
}
