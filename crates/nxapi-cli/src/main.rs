//! `nxapi`: query the NX API from the command line.
//!
//! Every command prints the decoded response as pretty JSON on stdout.
//! Logs go to stderr and are controlled by `RUST_LOG` (default `warn`).

mod telex;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use nxapi_sdk::{ClientConfig, NxApiClient, ReleaseQuery};
use serde::Serialize;

use crate::telex::TelexCommand;

#[derive(Parser, Debug)]
#[command(name = "nxapi")]
#[command(author, version, about = "FlyByWire NX API command line client", long_about = None)]
pub struct Cli {
    /// API base URL (falls back to NXAPI_URL, then the public API)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Current weather observation
    Metar(ReportArgs),
    /// Terminal aerodrome forecast
    Taf(ReportArgs),
    /// Terminal information broadcast
    Atis(ReportArgs),
    /// Airport information for one or more ICAO codes
    Airport {
        /// ICAO codes (more than one uses the batch endpoint)
        #[arg(required = true)]
        icaos: Vec<String>,
    },
    /// Online controllers
    Atc {
        /// Network, e.g. vatsim or ivao
        #[arg(long, default_value = "vatsim")]
        source: String,
    },
    /// Online pilots
    Pilots {
        /// Network, e.g. vatsim or ivao
        #[arg(long, default_value = "vatsim")]
        source: String,
    },
    /// Published charts for an airport
    Charts {
        /// ICAO code
        icao: String,
    },
    /// GNSS constellation elements
    Gnss,
    /// Satellite elements with TLE lines
    Satellites {
        /// Catalogue filter, e.g. gps or galileo
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Git metadata of a repository
    Git(GitArgs),
    /// Forward a raw JSON request to the Hoppie ACARS proxy
    Hoppie {
        /// Request body, e.g. '{"logon":"...","from":"DLH4CK","type":"ping"}'
        body: String,
    },
    /// Telex flight tracking and messaging
    Telex {
        #[command(subcommand)]
        command: TelexCommand,
    },
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// ICAO code
    pub icao: String,
    /// Upstream provider
    #[arg(long)]
    pub source: Option<String>,
}

#[derive(Args, Debug)]
pub struct GitArgs {
    /// Repository owner
    #[arg(long, default_value = "flybywiresim")]
    pub user: String,
    /// Repository name
    #[arg(long, default_value = "a32nx")]
    pub repo: String,

    #[command(subcommand)]
    pub command: GitCommand,
}

#[derive(Subcommand, Debug)]
pub enum GitCommand {
    /// Head commit of a branch
    Commit {
        #[arg(default_value = "master")]
        branch: String,
    },
    /// Releases, newest first
    Releases {
        /// Include pre-releases
        #[arg(long)]
        pre: bool,
        /// Releases to skip
        #[arg(long, allow_hyphen_values = true)]
        skip: Option<i64>,
        /// Releases to return
        #[arg(long, allow_hyphen_values = true)]
        take: Option<i64>,
    },
    /// Open pull requests
    Pulls,
    /// Build artifact of a pull request
    Artifact {
        /// Pull request number
        pull: String,
    },
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(base_url = %config.base_url, "using API");
    let client = NxApiClient::new(config);

    match cli.command {
        Command::Metar(a) => print_json(&client.metar(&a.icao, a.source.as_deref()).await?),
        Command::Taf(a) => print_json(&client.taf(&a.icao, a.source.as_deref()).await?),
        Command::Atis(a) => print_json(&client.atis(&a.icao, a.source.as_deref()).await?),
        Command::Airport { icaos } => match icaos.as_slice() {
            [single] => print_json(&client.airport(single).await?),
            many => print_json(&client.airports(many).await?),
        },
        Command::Atc { source } => print_json(&client.atc(&source).await?),
        Command::Pilots { source } => print_json(&client.pilots(&source).await?),
        Command::Charts { icao } => print_json(&client.charts(&icao).await?),
        Command::Gnss => print_json(&client.gnss().await?),
        Command::Satellites { kind } => print_json(&client.satellites(kind.as_deref()).await?),
        Command::Git(git) => run_git(&client, git).await,
        Command::Hoppie { body } => {
            let body: serde_json::Value =
                serde_json::from_str(&body).context("hoppie body is not valid JSON")?;
            print_json(&client.hoppie(&body).await?)
        }
        Command::Telex { command } => telex::run(&client, command).await,
    }
}

async fn run_git(client: &NxApiClient, args: GitArgs) -> Result<()> {
    let (user, repo) = (args.user.as_str(), args.repo.as_str());
    match args.command {
        GitCommand::Commit { branch } => print_json(&client.newest_commit(user, repo, &branch).await?),
        GitCommand::Releases { pre, skip, take } => {
            let query = ReleaseQuery {
                include_pre_releases: pre,
                skip,
                take,
            };
            print_json(&client.releases(user, repo, query).await?)
        }
        GitCommand::Pulls => print_json(&client.pulls(user, repo).await?),
        GitCommand::Artifact { pull } => print_json(&client.artifact(user, repo, &pull).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_metar_with_source() {
        let cli = Cli::try_parse_from(["nxapi", "metar", "EDDF", "--source", "vatsim"]).unwrap();
        match cli.command {
            Command::Metar(a) => {
                assert_eq!(a.icao, "EDDF");
                assert_eq!(a.source.as_deref(), Some("vatsim"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_skip_reaches_validation() {
        let cli = Cli::try_parse_from(["nxapi", "git", "releases", "--skip", "-1"]).unwrap();
        match cli.command {
            Command::Git(GitArgs {
                command: GitCommand::Releases { skip, .. },
                ..
            }) => assert_eq!(skip, Some(-1)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_api_url() {
        let cli = Cli::try_parse_from(["nxapi", "gnss", "--api-url", "http://localhost:3000"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:3000"));
    }
}
