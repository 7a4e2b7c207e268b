use clap::{Parser, Subcommand};
use log::trace;
use serde::Serialize;

use maps_adapter::{services::google::GoogleMapsService, Coordinates, GenericError, MapService, Waypoint};

#[derive(Parser)]
#[command(name = "maps-adapter", about = "Query the mapping provider from the command line.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Surface distance in meters between two `lat,lng` points.
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: Coordinates,
        #[arg(allow_hyphen_values = true)]
        to: Coordinates,
    },
    /// Autocomplete a place query.
    Search {
        query: String,
        /// Weight results toward this `lat,lng` point.
        #[arg(long, allow_hyphen_values = true)]
        near: Option<Coordinates>,
    },
    /// Look up a place by identifier.
    Details { place_id: String },
    /// Driving directions. Each endpoint is an address or a `lat,lng` point.
    Directions {
        #[arg(allow_hyphen_values = true)]
        origin: String,
        #[arg(allow_hyphen_values = true)]
        destination: String,
    },
    /// Address of a `lat,lng` point.
    Reverse {
        #[arg(allow_hyphen_values = true)]
        location: Coordinates,
    },
}

fn print_json(value: &impl Serialize) -> Result<(), GenericError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GenericError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("maps_adapter=trace"))
        .init();
    trace!("Logger init.");

    let cli = Cli::parse();
    let service: MapService<GoogleMapsService> = MapService::from_env();

    match cli.command {
        Command::Distance { from, to } => print_json(&service.calculate_distance(from, to)),
        Command::Search { query, near } => print_json(&service.search_places(&query, near).await),
        Command::Details { place_id } => print_json(&service.place_details(&place_id).await),
        Command::Directions {
            origin,
            destination,
        } => {
            let route = service
                .directions(Waypoint::parse(&origin), Waypoint::parse(&destination))
                .await;
            print_json(&route)
        }
        Command::Reverse { location } => print_json(&service.reverse_geocode(location).await),
    }
}
