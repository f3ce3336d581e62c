use std::path::PathBuf;

use clap::{Args, Parser};
use traffic_matrix::{coordinates::Coordinates, distance_matrix_api::DistanceMatrixRequest};

/// Four positional coordinates plus two flags.
///
/// Negative numbers are taken as coordinates. Any other value starting with
/// `-` is parsed as a flag, so such a coordinate has to follow `--`
/// (`traffic -- -d 2 3 4`).
#[derive(Parser, Debug)]
#[clap(author, version, about = "Travel time with traffic between two coordinates", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub lookup: LookupArgs,

    /// File to read API_KEY and DISTANCE_MATRIX_URL from
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Latitude of the origin
    #[arg(allow_negative_numbers = true)]
    pub origin_lat: String,

    /// Longitude of the origin
    #[arg(allow_negative_numbers = true)]
    pub origin_lng: String,

    /// Latitude of the destination
    #[arg(allow_negative_numbers = true)]
    pub destination_lat: String,

    /// Longitude of the destination
    #[arg(allow_negative_numbers = true)]
    pub destination_lng: String,
}

impl LookupArgs {
    pub fn to_request(&self) -> DistanceMatrixRequest {
        DistanceMatrixRequest {
            origin: Coordinates::new(&self.origin_lat, &self.origin_lng),
            destination: Coordinates::new(&self.destination_lat, &self.destination_lng),
        }
    }
}
