//! Environment-backed configuration.
//!
//! Everything except the API key has a default. Override with `LABELSCORE_*`
//! environment variables. The credential, chunk size and pacing interval also
//! accept the unprefixed names (`API_KEY`, `GEMINI_API_KEY`, `CHUNK_SIZE`,
//! `PACING_INTERVAL_MS`, `WAIT_TIME_MS`) when the prefixed one is unset.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::artifact::artifact_path;
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_INPUT_PATH, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
    DEFAULT_OUTPUT_PREFIX, DEFAULT_PACING_INTERVAL,
};
use crate::dispatch::FailurePolicy;

/// Run configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `LABELSCORE_*` overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// Credential for the scoring backend.
    pub api_key: String,

    /// Model name passed to the scoring backend. Default: `gemini-2.0-flash`.
    pub model: String,

    /// Labels per scoring request. Default: `100`.
    pub chunk_size: NonZeroUsize,

    /// Stagger between consecutive request starts. Default: `4s`.
    pub pacing_interval: Duration,

    /// Newline-delimited label file.
    pub input_path: PathBuf,

    /// Directory that receives `<prefix>-run-<N>.json` artifacts.
    pub output_dir: PathBuf,

    /// Artifact filename prefix. Default: `manufacturing-scores`.
    pub output_prefix: String,

    /// What a single failed chunk does to the run. Default: abort.
    pub failure_policy: FailurePolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("chunk_size", &self.chunk_size)
            .field("pacing_interval", &self.pacing_interval)
            .field("input_path", &self.input_path)
            .field("output_dir", &self.output_dir)
            .field("output_prefix", &self.output_prefix)
            .field("failure_policy", &self.failure_policy)
            .finish()
    }
}

impl Config {
    /// Credential variables, highest precedence first.
    const ENV_API_KEY: &'static [&'static str] =
        &["LABELSCORE_API_KEY", "API_KEY", "GEMINI_API_KEY"];
    const ENV_MODEL: &'static str = "LABELSCORE_MODEL";
    const ENV_CHUNK_SIZE: &'static [&'static str] = &["LABELSCORE_CHUNK_SIZE", "CHUNK_SIZE"];
    const ENV_PACING_INTERVAL_MS: &'static [&'static str] = &[
        "LABELSCORE_PACING_INTERVAL_MS",
        "PACING_INTERVAL_MS",
        "WAIT_TIME_MS",
    ];
    const ENV_INPUT_PATH: &'static str = "LABELSCORE_INPUT_PATH";
    const ENV_OUTPUT_DIR: &'static str = "LABELSCORE_OUTPUT_DIR";
    const ENV_OUTPUT_PREFIX: &'static str = "LABELSCORE_OUTPUT_PREFIX";
    const ENV_FAILURE_POLICY: &'static str = "LABELSCORE_FAILURE_POLICY";

    /// Builds a config with every default and the given credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pacing_interval: DEFAULT_PACING_INTERVAL,
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// The credential is checked first so a missing key fails before anything else.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = Self::parse_api_key_from_env()?;
        let defaults = Self::with_api_key(api_key);

        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let chunk_size = Self::parse_chunk_size_from_env(defaults.chunk_size)?;
        let pacing_interval = Self::parse_pacing_from_env(defaults.pacing_interval)?;
        let input_path = Self::parse_path_from_env(Self::ENV_INPUT_PATH, defaults.input_path);
        let output_dir = Self::parse_path_from_env(Self::ENV_OUTPUT_DIR, defaults.output_dir);
        let output_prefix =
            Self::parse_string_from_env(Self::ENV_OUTPUT_PREFIX, defaults.output_prefix);
        let failure_policy = Self::parse_failure_policy_from_env(defaults.failure_policy)?;

        Ok(Self {
            api_key: defaults.api_key,
            model,
            chunk_size,
            pacing_interval,
            input_path,
            output_dir,
            output_prefix,
            failure_policy,
        })
    }

    /// Returns the artifact path for `run_number`.
    pub fn artifact_path(&self, run_number: u64) -> PathBuf {
        artifact_path(&self.output_dir, &self.output_prefix, run_number)
    }

    /// First variable in `names` that is set to a non-blank value, with its name.
    fn first_env(names: &[&'static str]) -> Option<(&'static str, String)> {
        names.iter().find_map(|&name| {
            env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
    }

    fn parse_api_key_from_env() -> Result<String, ConfigError> {
        Self::first_env(Self::ENV_API_KEY)
            .map(|(_, value)| value)
            .ok_or(ConfigError::MissingCredential {
                names: Self::ENV_API_KEY,
            })
    }

    fn parse_chunk_size_from_env(default: NonZeroUsize) -> Result<NonZeroUsize, ConfigError> {
        let Some((name, value)) = Self::first_env(Self::ENV_CHUNK_SIZE) else {
            return Ok(default);
        };

        let size: usize = value.parse().map_err(|e| ConfigError::InvalidNumber {
            name,
            value: value.clone(),
            source: e,
        })?;

        NonZeroUsize::new(size).ok_or(ConfigError::InvalidChunkSize { value })
    }

    fn parse_pacing_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match Self::first_env(Self::ENV_PACING_INTERVAL_MS) {
            Some((name, value)) => value
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| ConfigError::InvalidNumber {
                    name,
                    value,
                    source: e,
                }),
            None => Ok(default),
        }
    }

    fn parse_failure_policy_from_env(
        default: FailurePolicy,
    ) -> Result<FailurePolicy, ConfigError> {
        match env::var(Self::ENV_FAILURE_POLICY) {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidFailurePolicy { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }
}
