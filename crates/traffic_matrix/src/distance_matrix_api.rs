use thiserror::Error;
use tracing::debug;

use crate::{coordinates::Coordinates, distance_matrix_response::DistanceMatrixResponse};

#[derive(Debug, Error)]
pub enum DistanceMatrixError {
    #[error("HTTP request failed")]
    Request(#[source] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unable to read response body")]
    ReadBody(#[source] reqwest::Error),

    #[error("Deserialization error")]
    Deserialize(#[from] serde_json::Error),

    #[error("No information found for this location: {0}")]
    NoResults(String),
}

pub const DISTANCE_MATRIX_API_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

pub const DEPARTURE_TIME: &str = "now";
pub const TRAFFIC_MODEL: &str = "best_guess";

/// A single origin to a single destination.
#[derive(Debug, Clone)]
pub struct DistanceMatrixRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
}

pub struct DistanceMatrixClientParams {
    pub api_key: String,
    pub endpoint: String,
}

pub struct DistanceMatrixClient {
    params: DistanceMatrixClientParams,
    client: reqwest::Client,
}

impl DistanceMatrixClient {
    pub fn new(params: DistanceMatrixClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Full GET url for the request. Coordinates and key go in verbatim.
    pub fn request_url(&self, request: &DistanceMatrixRequest) -> String {
        format!(
            "{}?origins={}&destinations={}&departure_time={}&traffic_model={}&key={}",
            self.params.endpoint,
            request.origin,
            request.destination,
            DEPARTURE_TIME,
            TRAFFIC_MODEL,
            self.params.api_key
        )
    }

    pub async fn fetch_matrix(
        &self,
        request: &DistanceMatrixRequest,
    ) -> Result<DistanceMatrixResponse, DistanceMatrixError> {
        debug!(
            "DistanceMatrixApi: Requesting {} -> {}",
            request.origin, request.destination
        );

        let response = self
            .client
            .get(self.request_url(request))
            .send()
            .await
            .map_err(DistanceMatrixError::Request)?;

        self.handle_response(response).await
    }

    pub async fn fetch_duration_in_traffic(
        &self,
        request: &DistanceMatrixRequest,
    ) -> Result<String, DistanceMatrixError> {
        let matrix = self.fetch_matrix(request).await?;

        match matrix.duration_in_traffic() {
            Some(text) => Ok(text.to_string()),
            None => Err(DistanceMatrixError::NoResults(matrix.empty_reason())),
        }
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<DistanceMatrixResponse, DistanceMatrixError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(DistanceMatrixError::Api { status, message });
        }

        let body = response.text().await.map_err(DistanceMatrixError::ReadBody)?;
        debug!("DistanceMatrixApi: Received {} bytes", body.len());

        let matrix: DistanceMatrixResponse = serde_json::from_str(&body)?;
        Ok(matrix)
    }
}
