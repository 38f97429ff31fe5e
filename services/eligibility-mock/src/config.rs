use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

#[derive(Parser, Debug, Clone)]
#[command(name = "eligibility-mock", version, about = "Healthcare eligibility mock API")]
pub struct Args {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma-separated list of origins allowed to call the API, or `*`.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    #[arg(long, default_value = "false")]
    pub enable_openapi: bool,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid allowed origin '{0}'")]
    InvalidOrigin(String),
    #[error("allowed origins list is empty")]
    NoOrigins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// A lone `*` (or `*` anywhere in the list) opens the API to every origin.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, ConfigError> {
        let entries = raw
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        if entries.is_empty() {
            return Err(ConfigError::NoOrigins);
        }
        if entries.contains(&"*") {
            return Ok(AllowedOrigins::Any);
        }
        let origins = entries
            .into_iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AllowedOrigins::List(origins))
    }

    // Credentials cannot be combined with wildcards, so explicit lists mirror the
    // request's method and headers instead.
    pub fn cors_layer(&self) -> CorsLayer {
        match self {
            AllowedOrigins::Any => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
            AllowedOrigins::List(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.iter().cloned()))
                .allow_methods(AllowMethods::list([Method::GET, Method::HEAD, Method::OPTIONS]))
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true),
        }
    }
}
