use std::env;
use std::path::PathBuf;

/// Products endpoint checked by the store catalog smoke test.
pub const DEFAULT_STORE_API_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_path: PathBuf,
    pub store_api_url: String,
    pub seed_samples: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("EXPENSE_CALC_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("EXPENSE_CALC_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7070),
            static_path: env::var("EXPENSE_CALC_STATIC_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            store_api_url: env::var("EXPENSE_CALC_STORE_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STORE_API_URL.into()),
            seed_samples: env::var("EXPENSE_CALC_SEED_SAMPLES")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 7070,
            static_path: PathBuf::from("static"),
            store_api_url: DEFAULT_STORE_API_URL.into(),
            seed_samples: true,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
