use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use futures::TryStreamExt;
use nxapi_models::{AircraftStatus, Bounds, GeoLocation};
use nxapi_sdk::{NxApiClient, SdkError, TelexSession};

use crate::print_json;

#[derive(Subcommand, Debug)]
pub enum TelexCommand {
    /// Page through all active connections, one JSON page per line
    Connections {
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Number of active connections
    Count,
    /// Connections whose flight number matches
    Find {
        /// Flight number or fragment
        flight: String,
    },
    /// A single connection by id
    Get {
        /// Connection id
        id: String,
    },
    /// Connect as a flight, send a message, print the inbox and disconnect
    Session(SessionArgs),
}

#[derive(Args, Debug)]
pub struct BoundsArgs {
    /// Northern latitude limit
    #[arg(long, allow_hyphen_values = true)]
    pub north: Option<f64>,
    /// Eastern longitude limit
    #[arg(long, allow_hyphen_values = true)]
    pub east: Option<f64>,
    /// Southern latitude limit
    #[arg(long, allow_hyphen_values = true)]
    pub south: Option<f64>,
    /// Western longitude limit
    #[arg(long, allow_hyphen_values = true)]
    pub west: Option<f64>,
}

impl BoundsArgs {
    fn bounds(&self) -> Result<Option<Bounds>> {
        match (self.north, self.east, self.south, self.west) {
            (Some(north), Some(east), Some(south), Some(west)) => Ok(Some(Bounds {
                north,
                east,
                south,
                west,
            })),
            (None, None, None, None) => Ok(None),
            _ => bail!("--north, --east, --south and --west must be given together"),
        }
    }
}

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Own flight number
    #[arg(long)]
    pub flight: String,
    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub long: f64,
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    pub lat: f64,
    /// Departure airport
    #[arg(long, default_value = "")]
    pub origin: String,
    /// Arrival airport
    #[arg(long, default_value = "")]
    pub destination: String,
    /// Aircraft type designator
    #[arg(long, default_value = "A20N")]
    pub aircraft_type: String,
    /// Recipient flight of `--message`
    #[arg(long, requires = "message")]
    pub to: Option<String>,
    /// Free text to send
    #[arg(long, requires = "to")]
    pub message: Option<String>,
}

impl SessionArgs {
    fn status(&self) -> AircraftStatus {
        AircraftStatus {
            location: GeoLocation {
                long: self.long,
                lat: self.lat,
            },
            true_altitude: 0.0,
            heading: 0.0,
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            freetext_enabled: true,
            flight: self.flight.clone(),
            aircraft_type: self.aircraft_type.clone(),
        }
    }
}

pub async fn run(client: &NxApiClient, command: TelexCommand) -> Result<()> {
    match command {
        TelexCommand::Connections { bounds } => {
            let mut pages = std::pin::pin!(client.all_connections(bounds.bounds()?));
            while let Some(page) = pages.try_next().await? {
                println!("{}", serde_json::to_string(&page)?);
            }
            Ok(())
        }
        TelexCommand::Count => print_json(&client.count_connections().await?),
        TelexCommand::Find { flight } => print_json(&client.find_connections(&flight).await?),
        TelexCommand::Get { id } => print_json(&client.fetch_connection(&id).await?),
        TelexCommand::Session(args) => run_session(client.clone(), &args).await,
    }
}

async fn run_session(client: NxApiClient, args: &SessionArgs) -> Result<()> {
    let mut session = TelexSession::new(client);
    let token = session
        .connect(&args.status())
        .await
        .with_context(|| format!("connecting as {}", args.flight))?;
    tracing::info!(connection = %token.connection, "session open");

    // Always disconnect, even when a step in between fails.
    let outcome = exchange(&session, args).await;
    let closed = session.disconnect().await;
    settle(outcome, closed)
}

/// Combine the exchange result with the disconnect result, keeping both errors.
fn settle(outcome: Result<()>, closed: Result<(), SdkError>) -> Result<()> {
    match (outcome, closed) {
        (outcome, Ok(())) => outcome,
        (Ok(()), Err(e)) => Err(anyhow::Error::new(e).context("disconnecting")),
        (Err(e), Err(closing)) => Err(e.context(format!("disconnecting also failed: {closing}"))),
    }
}

async fn exchange(session: &TelexSession, args: &SessionArgs) -> Result<()> {
    if let (Some(to), Some(message)) = (&args.to, &args.message) {
        print_json(&session.send_message(to, message).await?)?;
    }
    print_json(&session.fetch_messages().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cli, Command};
    use clap::Parser;

    fn telex(args: &[&str]) -> TelexCommand {
        let argv = ["nxapi", "telex"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Telex { command } => command,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bounds_are_all_or_nothing() {
        let TelexCommand::Connections { bounds } = telex(&["connections"]) else {
            panic!("expected connections");
        };
        assert!(bounds.bounds().unwrap().is_none());

        let TelexCommand::Connections { bounds } = telex(&[
            "connections", "--north", "60", "--east", "20", "--south", "40", "--west", "-10",
        ]) else {
            panic!("expected connections");
        };
        let b = bounds.bounds().unwrap().unwrap();
        assert_eq!(b.west, -10.0);
        assert_eq!(b.north, 60.0);

        let TelexCommand::Connections { bounds } = telex(&["connections", "--north", "60"]) else {
            panic!("expected connections");
        };
        assert!(bounds.bounds().is_err());
    }

    #[test]
    fn session_status_keeps_longitude_and_latitude_apart() {
        let TelexCommand::Session(args) =
            telex(&["session", "--flight", "DLH4CK", "--long", "8.57", "--lat", "50.03"])
        else {
            panic!("expected session");
        };
        let status = args.status();
        assert_eq!(status.location.long, 8.57);
        assert_eq!(status.location.lat, 50.03);
        assert_eq!(status.flight, "DLH4CK");
    }

    #[test]
    fn message_needs_recipient() {
        let r = Cli::try_parse_from([
            "nxapi", "telex", "session", "--flight", "DLH4CK", "--message", "hello",
        ]);
        assert!(r.is_err());
    }

    #[test]
    fn settle_keeps_both_errors() {
        assert!(settle(Ok(()), Ok(())).is_ok());

        let err = settle(Err(anyhow::anyhow!("send failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "send failed");

        let err = settle(Ok(()), Err(SdkError::NotConnected)).unwrap_err();
        assert_eq!(err.to_string(), "disconnecting");
        assert!(err.downcast_ref::<SdkError>().is_some());

        let closing = SdkError::Status {
            status: 500,
            url: "http://localhost:3000/txcxn".into(),
        };
        let err = settle(Err(anyhow::anyhow!("send failed")), Err(closing)).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("send failed"));
        assert!(chain.contains("HTTP 500"));
    }
}
