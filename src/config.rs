use crate::errors::{PayoffError, PayoffResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Upper bound on samples per curve; protects the server from huge ranges.
    pub max_grid_points: usize,
}

impl AppConfig {
    pub fn from_env() -> PayoffResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| PayoffError::Config(format!("SERVER_PORT: {e}")))?;

        let max_grid_points = env_var_or("MAX_GRID_POINTS", "1000000")
            .parse::<usize>()
            .map_err(|e| PayoffError::Config(format!("MAX_GRID_POINTS: {e}")))?;

        if max_grid_points == 0 {
            return Err(PayoffError::Config(
                "MAX_GRID_POINTS: must be greater than 0".into(),
            ));
        }

        Ok(Self {
            server_host: env_var_or("SERVER_HOST", "0.0.0.0"),
            server_port,
            max_grid_points,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3001,
            max_grid_points: 1_000_000,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
