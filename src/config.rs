use std::collections::HashMap;
use std::env;
use std::fs;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Key/value configuration loaded from an env-style file. Lines may carry an
/// `export ` prefix and single or double quotes around the value.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim();
            for quote in ['"', '\''] {
                if let Some(inner) = value
                    .strip_prefix(quote)
                    .and_then(|rest| rest.strip_suffix(quote))
                {
                    value = inner;
                }
            }
            values.insert(key.to_string(), value.to_string());
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// Base URL of the Lets Meet API server. File wins over environment;
    /// falls back to a local development server.
    pub fn base_url(&self) -> String {
        self.get("API_BASE_URL")
            .or_else(|| env::var("API_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}
