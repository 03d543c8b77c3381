use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::analysis::{GeminiClient, DEFAULT_ANALYSIS_TIMEOUT, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL};
use crate::db::{Database, FileSlots, SlotStore};
use crate::models::Language;

/// Which slot backend holds the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "json" | "file" => Ok(Self::Json),
            other => anyhow::bail!("unknown storage backend '{}' (expected sqlite or json)", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage: StorageBackend,
    pub language: Language,

    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_url: String,
    pub analysis_timeout: Duration,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_dir = match env::var("HUE_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => directories::ProjectDirs::from("", "", "emotional-hue")
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
                .data_dir()
                .to_path_buf(),
        };

        let storage = match env::var("HUE_STORAGE") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::default(),
        };

        let language = env::var("HUE_LANG")
            .ok()
            .or_else(|| env::var("LANG").ok())
            .map(|tag| Language::detect(Some(&tag)))
            .unwrap_or_default();

        let analysis_timeout = match env::var("HUE_ANALYSIS_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .context("HUE_ANALYSIS_TIMEOUT_SECS must be a number of seconds")?,
            ),
            Err(_) => DEFAULT_ANALYSIS_TIMEOUT,
        };

        Ok(Self {
            data_dir,
            storage,
            language,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gemini_model: env::var("HUE_GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into()),
            gemini_url: env::var("HUE_GEMINI_URL").unwrap_or_else(|_| DEFAULT_GEMINI_URL.into()),
            analysis_timeout,
            host: env::var("HUE_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("HUE_PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .context("HUE_PORT must be a port number")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Opens the configured backend, running migrations where it has any.
    pub fn open_slots(&self) -> Result<Arc<dyn SlotStore>> {
        match self.storage {
            StorageBackend::Sqlite => {
                let db = Database::open(self.data_dir.join("emotional-hue.db"))?;
                db.migrate()?;
                Ok(Arc::new(db))
            }
            StorageBackend::Json => Ok(Arc::new(
                FileSlots::open(&self.data_dir)
                    .with_context(|| format!("Failed to open {}", self.data_dir.display()))?,
            )),
        }
    }

    pub fn gemini_client(&self) -> GeminiClient {
        GeminiClient::new(
            self.gemini_url.clone(),
            self.gemini_api_key.clone(),
            self.gemini_model.clone(),
        )
        .with_language(self.language)
    }
}
