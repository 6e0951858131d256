use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = env_or("SURVEY_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SURVEY_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let data_path = PathBuf::from(env_or("SURVEY_DATA_PATH", "data/responses.json"));
        if data_path.file_name().is_none() {
            return Err(format!(
                "Invalid SURVEY_DATA_PATH: '{}' does not name a file",
                data_path.display()
            ));
        }

        let static_dir = PathBuf::from(env_or("SURVEY_STATIC_DIR", "static"));

        let max_body_size: usize = env_or("SURVEY_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid SURVEY_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("SURVEY_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            data_path,
            static_dir,
            max_body_size,
            log_level,
        })
    }
}
