use std::{collections::HashMap, path::Path};

use thiserror::Error;
use tracing::{debug, warn};
use traffic_matrix::distance_matrix_api::{DISTANCE_MATRIX_API_URL, DistanceMatrixClientParams};

pub const API_KEY_ENV_VAR: &str = "API_KEY";
pub const ENDPOINT_ENV_VAR: &str = "DISTANCE_MATRIX_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to load env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
}

impl Config {
    /// Reads the env file (if any) and the process environment.
    /// Variables already set in the environment take precedence over the file.
    pub fn load(env_file: &Path) -> Result<Self, ConfigError> {
        let file_vars = read_env_file(env_file)?;
        Ok(Self::resolve(&file_vars, |key| std::env::var(key).ok()))
    }

    pub fn resolve<F>(file_vars: &HashMap<String, String>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).or_else(|| file_vars.get(key).cloned());

        let api_key = lookup(API_KEY_ENV_VAR).unwrap_or_else(|| {
            warn!("{} is not set, the request will not be authenticated", API_KEY_ENV_VAR);
            String::new()
        });

        let endpoint = lookup(ENDPOINT_ENV_VAR)
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or_else(|| DISTANCE_MATRIX_API_URL.to_string());

        Self { api_key, endpoint }
    }

    pub fn client_params(self) -> DistanceMatrixClientParams {
        DistanceMatrixClientParams {
            api_key: self.api_key,
            endpoint: self.endpoint,
        }
    }
}

/// Parses a `.env` style file without touching the process environment.
/// A missing file yields no variables.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_config_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => {
            warn!("Env file {} not found, using the environment only", path.display());
            return Ok(HashMap::new());
        }
        Err(err) => return Err(to_config_error(err)),
    };

    let vars = iter
        .collect::<Result<HashMap<String, String>, _>>()
        .map_err(to_config_error)?;

    debug!("Loaded {} variables from {}", vars.len(), path.display());

    Ok(vars)
}
