use anyhow::Context;
use tracing::debug;
use traffic_matrix::distance_matrix_api::DistanceMatrixClient;

use crate::{cli::LookupArgs, config::Config};

pub fn format_traffic_line(args: &LookupArgs, duration_in_traffic: &str) -> String {
    format!(
        "Traffic condition from {}, {} to {} {} is: {}",
        args.origin_lat,
        args.origin_lng,
        args.destination_lat,
        args.destination_lng,
        duration_in_traffic
    )
}

pub async fn run(args: &LookupArgs, config: Config) -> anyhow::Result<String> {
    let client = DistanceMatrixClient::new(config.client_params());
    let request = args.to_request();

    let duration_in_traffic = client
        .fetch_duration_in_traffic(&request)
        .await
        .context("error getting traffic information")?;

    debug!("Duration in traffic: {}", duration_in_traffic);

    Ok(format_traffic_line(args, &duration_in_traffic))
}
