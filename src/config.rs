use std::env;

use tracing::info;

pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 3030,
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or("0.0.0.0".to_string()),
            port,
        })
    }

    pub fn log(&self) {
        info!("HOST: {}", self.host);
        info!("PORT: {}", self.port);
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
