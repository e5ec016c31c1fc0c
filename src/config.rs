use anyhow::{anyhow, Result};
use config::Config;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::database::DATABASE_FILE_NAME;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize)]
pub struct SchoolConfig {
    /// Path to the directory holding the SQLite database
    pub data_dir: String,

    /// Address the HTTP server binds to
    pub address: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Show "Aluno não matriculado em nenhum curso" instead of an empty
    /// course list for students without enrollments
    pub legacy_unenrolled_sentinel: bool,
}

const EMPTY_CONFIG: &str = r#"### escola configuration file

### directory holding the SQLite database
# data_dir = "~/.escola"

### HTTP server
# address = "127.0.0.1"
# port = 3000

### list students without enrollments with a placeholder string instead of []
# legacy_unenrolled_sentinel = false
"#;

impl Default for SchoolConfig {
    fn default() -> Self {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        Self {
            data_dir: format!("{}/.escola", home_dir),
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            legacy_unenrolled_sentinel: false,
        }
    }
}

impl SchoolConfig {
    /// Create and initialize a configuration
    ///
    /// Reads `path` (or `$HOME/.escola/escola.toml`), writing a commented
    /// template there if the file does not exist, then applies `ESCOLA_*`
    /// environment variables on top.
    pub fn new(path: &Option<String>) -> Result<SchoolConfig> {
        let mut builder = Config::builder();

        match path {
            Some(p) => {
                let path = Path::new(p.as_str());
                if path.exists() {
                    let path_str = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                    builder = builder.add_source(config::File::with_name(path_str));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG)
                        .map_err(|e| anyhow!("Unable to create config file: {}", e))?;
                }
            }
            None => {
                let escola_dir = Self::default_dir()?;
                std::fs::create_dir_all(escola_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create escola directory: {}", e))?;
                let p = format!("{}/escola.toml", escola_dir.as_str());
                if Path::new(p.as_str()).exists() {
                    builder = builder.add_source(config::File::with_name(p.as_str()));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG).map_err(|e| {
                        anyhow!("Unable to create config file {}: {}", p.as_str(), e)
                    })?;
                }
            }
        }

        // E.g., `ESCOLA_PORT=8080 escola serve`
        builder = builder.add_source(config::Environment::with_prefix("ESCOLA"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        Self::from_map(&config)
    }

    fn default_dir() -> Result<String> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
        let home_str = home
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?;
        Ok(format!("{}/.escola", home_str))
    }

    fn from_map(config: &HashMap<String, String>) -> Result<SchoolConfig> {
        let data_dir = match config.get("data_dir") {
            Some(p) => expand_home(p),
            None => Self::default_dir()?,
        };

        let address = config
            .get("address")
            .cloned()
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let port = match config.get("port") {
            Some(p) => p
                .parse()
                .map_err(|e| anyhow!("Invalid port '{}': {}", p, e))?,
            None => DEFAULT_PORT,
        };

        let legacy_unenrolled_sentinel = match config.get("legacy_unenrolled_sentinel") {
            Some(v) => v.parse().map_err(|e| {
                anyhow!("Invalid legacy_unenrolled_sentinel '{}': {}", v, e)
            })?,
            None => false,
        };

        Ok(SchoolConfig {
            data_dir,
            address,
            port,
            legacy_unenrolled_sentinel,
        })
    }

    /// Get the path to the SQLite database file
    pub fn sqlite_path(&self) -> String {
        let data_dir = self.data_dir.trim_end_matches('/');
        format!("{}/{}", data_dir, DATABASE_FILE_NAME)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    /// Display configuration summary
    pub fn summary(&self) -> String {
        [
            format!("Data Directory:     {}", self.data_dir),
            format!("SQLite Path:        {}", self.sqlite_path()),
            format!("Listen Address:     {}", self.bind_address()),
            format!(
                "Legacy Sentinel:    {}",
                if self.legacy_unenrolled_sentinel {
                    "enabled"
                } else {
                    "disabled"
                }
            ),
        ]
        .join("\n")
    }

    /// Get the default config file path
    pub fn config_file_path() -> String {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| "~".to_string());
        format!("{}/.escola/escola.toml", home_dir)
    }
}

/// Expand `~` or a leading `~/` to the home directory
///
/// `~user` forms are left untouched.
fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return path.to_string(),
    };
    match dirs::home_dir() {
        Some(home) => format!("{}{}", home.to_string_lossy(), rest),
        None => path.to_string(),
    }
}
