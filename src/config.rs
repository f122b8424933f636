use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Deserialize)]
pub struct Config {
    /// Plain-text IP echo service, e.g. https://api.ipify.org
    pub ip_info_url: String,
    /// DigitalOcean API root, e.g. https://api.digitalocean.com/v2
    pub do_api_base: String,
    pub do_api_key: String,
    pub domain_name: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

// 不打印 API key
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("ip_info_url", &self.ip_info_url)
            .field("do_api_base", &self.do_api_base)
            .field("do_api_key", &"<redacted>")
            .field("domain_name", &self.domain_name)
            .field("timeout_secs", &self.timeout_secs)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("ip_info_url", &self.ip_info_url),
            ("do_api_base", &self.do_api_base),
            ("do_api_key", &self.do_api_key),
            ("domain_name", &self.domain_name),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                anyhow::bail!("Config key `{}` must not be empty", key);
            }
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("Config key `timeout_secs` must be greater than zero");
        }

        Ok(())
    }
}
