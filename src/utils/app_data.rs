use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "bookshelf";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the configured books root
pub const ROOT_ENV_VAR: &str = "BOOKSHELF_ROOT";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding one sub-directory per book
    #[serde(default = "default_books_root")]
    pub books_root: PathBuf,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Turn single newlines in markdown into line breaks
    #[serde(default = "default_hard_breaks")]
    pub hard_breaks: bool,

    /// Scan documents in parallel when searching
    #[serde(default = "default_parallel_search")]
    pub parallel_search: bool,
}

fn default_books_root() -> PathBuf {
    PathBuf::from("books")
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_hard_breaks() -> bool {
    true
}

fn default_parallel_search() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            books_root: default_books_root(),
            bind: default_bind(),
            hard_breaks: default_hard_breaks(),
            parallel_search: default_parallel_search(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit file, or return default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
            let config: AppConfig = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Apply overrides in precedence order: command line, then environment,
    /// then whatever the file said
    pub fn with_overrides(
        mut self,
        env_root: Option<String>,
        cli_root: Option<PathBuf>,
        cli_bind: Option<String>,
    ) -> Self {
        if let Some(root) = env_root.filter(|r| !r.is_empty()) {
            self.books_root = PathBuf::from(root);
        }
        if let Some(root) = cli_root {
            self.books_root = root;
        }
        if let Some(bind) = cli_bind {
            self.bind = bind;
        }
        self
    }

    /// [`AppConfig::with_overrides`] reading the environment from the process
    pub fn with_process_overrides(self, cli_root: Option<PathBuf>, cli_bind: Option<String>) -> Self {
        self.with_overrides(std::env::var(ROOT_ENV_VAR).ok(), cli_root, cli_bind)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}
