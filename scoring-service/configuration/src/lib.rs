use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;

pub use logging::setup_logging;

pub type AppConfig = ScoringConfig;

const CONFIG_PREFIX: &str = "SCORING_SERVICE";
const CONFIG_DIR: &str = "config";
const DEFAULT_RUN_ENV: &str = "development";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value `{value}` for {key}")]
    InvalidOverride { key: String, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

/// External binaries the analysis pipeline shells out to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: String,
    #[serde(default = "default_whisper_path")]
    pub whisper_path: String,
    #[serde(default = "default_whisper_model_path")]
    pub whisper_model_path: String,
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: u32,
    #[serde(default = "default_tool_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Parent directory for per-request scratch directories; system temp dir when unset.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
            ffprobe_path: default_ffprobe_path(),
            whisper_path: default_whisper_path(),
            whisper_model_path: default_whisper_model_path(),
            sample_rate_hz: default_sample_rate(),
            timeout_ms: default_tool_timeout_ms(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_upload_bytes(),
        }
    }
}

/// Loads `SCORING_SERVICE_CONFIG` or `config/<RUN_ENV>.toml`, then applies
/// `SCORING_SERVICE_*` environment overrides.
pub fn load_config() -> Result<ScoringConfig, ConfigError> {
    let path = std::env::var(format!("{CONFIG_PREFIX}_CONFIG"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| DEFAULT_RUN_ENV.to_string());
            Path::new(CONFIG_DIR).join(format!("{run_env}.toml"))
        });

    let mut config = load_config_file(&path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Missing files yield defaults; unreadable or malformed files are errors.
pub fn load_config_file(path: &Path) -> Result<ScoringConfig, ConfigError> {
    if !path.exists() {
        return Ok(ScoringConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn apply_env_overrides<F>(config: &mut ScoringConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| {
        let key = format!("{CONFIG_PREFIX}_{name}");
        lookup(&key).map(|value| (key, value))
    };

    if let Some((_, value)) = var("SERVER_HOST") {
        config.server.host = value;
    }
    if let Some((key, value)) = var("SERVER_PORT") {
        config.server.port = parse_override(key, value)?;
    }
    if let Some((_, value)) = var("LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Some((key, value)) = var("LOG_JSON") {
        config.logging.json = parse_override(key, value)?;
    }
    if let Some((_, value)) = var("FFMPEG_PATH") {
        config.service.tools.ffmpeg_path = value;
    }
    if let Some((_, value)) = var("FFPROBE_PATH") {
        config.service.tools.ffprobe_path = value;
    }
    if let Some((_, value)) = var("WHISPER_PATH") {
        config.service.tools.whisper_path = value;
    }
    if let Some((_, value)) = var("WHISPER_MODEL_PATH") {
        config.service.tools.whisper_model_path = value;
    }
    if let Some((key, value)) = var("TOOL_TIMEOUT_MS") {
        config.service.tools.timeout_ms = parse_override(key, value)?;
    }
    if let Some((_, value)) = var("WORK_DIR") {
        config.service.workspace.root_dir = Some(PathBuf::from(value));
    }
    if let Some((key, value)) = var("MAX_UPLOAD_BYTES") {
        config.service.upload.max_bytes = parse_override(key, value)?;
    }
    Ok(())
}

fn parse_override<T: std::str::FromStr>(key: String, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidOverride { key, value })
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_ffprobe_path() -> String {
    "ffprobe".to_string()
}

fn default_whisper_path() -> String {
    "whisper/whisper-cli".to_string()
}

fn default_whisper_model_path() -> String {
    "whisper/models/ggml-base.en.bin".to_string()
}

fn default_sample_rate() -> u32 {
    16_000
}

fn default_tool_timeout_ms() -> u64 {
    120_000
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}
