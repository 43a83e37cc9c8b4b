/// Server configuration loaded from environment variables.
///
/// All fields except the prediction endpoint have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Remote prediction endpoint configuration.
    pub predictor: PredictorConfig,
}

/// Configuration for the remote model-serving endpoint.
///
/// Built once at startup and handed to the predictor client; no ambient
/// global state.
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Full scoring URL of the deployed model.
    pub endpoint_url: String,
    /// Optional credential, sent as `Authorization: Bearer <key>` when set.
    pub api_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `PREDICTION_ENDPOINT_URL` | (required)                 |
    /// | `PREDICTION_API_KEY`      | (unset: no credential)     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let predictor = PredictorConfig {
            endpoint_url: std::env::var("PREDICTION_ENDPOINT_URL")
                .expect("PREDICTION_ENDPOINT_URL must be set"),
            api_key: std::env::var("PREDICTION_API_KEY").ok(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            predictor,
        }
    }
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_trims_and_drops_empty_entries() {
        let origins = parse_origins("http://a.example, http://b.example ,,");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }
}
