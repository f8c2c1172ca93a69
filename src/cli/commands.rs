//! CLI command implementations
//!
//! Boot order for `serve`:
//! 1. Load configuration (file, then flag overrides)
//! 2. Construct the store with the default catalog
//! 3. Apply seed data, skipping invalid records. Without a configured seed
//!    file the bundled `data/initial_data.json` is used when present.
//! 4. Bind HTTP and serve

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};
use crate::store::{RobotStore, SeedFile, SeedReport};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Config file consulted when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./robodb.json";

/// Seed file loaded when none is configured; skipped if it does not exist
pub const DEFAULT_SEED_PATH: &str = "data/initial_data.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bind address and CORS
    #[serde(flatten)]
    pub http: HttpServerConfig,

    /// Seed file loaded at startup. When unset, `DEFAULT_SEED_PATH` is
    /// loaded if it exists; a configured path must exist.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed_file: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Explicit path must exist; without one, the default path is used if
    /// present and built-in defaults otherwise.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|e| CliError::config_error(e))
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, port: Option<u16>, seed: Option<PathBuf>) -> Self {
        if let Some(port) = port {
            self.http.port = port;
        }
        if seed.is_some() {
            self.seed_file = seed;
        }
        self
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port, seed } => {
            let result = serve(config.as_deref(), port, seed);
            if let Err(e) = &result {
                log_event_with_fields(Event::BootFailed, &[("error", e.message())]);
            }
            result
        }
        Command::CheckSeed { seed } => check_seed(&seed),
    }
}

/// Builds a store and applies the seed file.
pub fn boot_store(config: &Config) -> CliResult<(Arc<RobotStore>, SeedReport)> {
    boot_store_from(config, Path::new(DEFAULT_SEED_PATH))
}

fn boot_store_from(
    config: &Config,
    default_seed: &Path,
) -> CliResult<(Arc<RobotStore>, SeedReport)> {
    let store = Arc::new(RobotStore::new());

    let seed_path = match &config.seed_file {
        Some(path) => Some(path.as_path()),
        None if default_seed.exists() => Some(default_seed),
        None => None,
    };

    let report = match seed_path {
        Some(path) => store.load_seed(SeedFile::load(path)?),
        None => SeedReport::default(),
    };

    Ok((store, report))
}

/// Load config and seed data, then serve HTTP until the process exits
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    seed: Option<PathBuf>,
) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = Config::resolve(config_path)?.with_overrides(port, seed);
    Logger::set_min_severity(config.severity()?);

    let addr = config.http.socket_addr();
    log_event_with_fields(Event::ConfigLoaded, &[("addr", addr.as_str())]);

    let (store, _report) = boot_store(&config)?;
    let server = HttpServer::with_store(config.http.clone(), store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a seed file against the default catalog and print the report
pub fn check_seed(seed_path: &Path) -> CliResult<()> {
    // Keep stdout to the single JSON report
    Logger::set_min_severity(Severity::Error);

    let seed = SeedFile::load(seed_path)?;
    let report = RobotStore::new().load_seed(seed);
    write_response(serde_json::to_value(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 8080);
        assert!(config.seed_file.is_none());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_load_flattened_config() {
        let file = write_temp(
            r#"{"host": "127.0.0.1", "port": 9100, "seed_file": "data/initial_data.json"}"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.socket_addr(), "127.0.0.1:9100");
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("data/initial_data.json"))
        );
    }

    #[test]
    fn test_zero_port_rejected() {
        let file = write_temp(r#"{"port": 0}"#);
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message().contains("port"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let file = write_temp(r#"{"log_level": "chatty"}"#);
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_explicit_missing_config_fails() {
        assert!(Config::resolve(Some(Path::new("/nonexistent/robodb.json"))).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(9001), Some(PathBuf::from("s.json")));
        assert_eq!(config.http.port, 9001);
        assert_eq!(config.seed_file, Some(PathBuf::from("s.json")));

        let unchanged = Config::default().with_overrides(None, None);
        assert_eq!(unchanged, Config::default());
    }

    #[test]
    fn test_boot_store_applies_seed() {
        let seed = write_temp(
            r#"{"robots": [
                {"code": "R1", "name": "Arm", "model": "car", "tech": ["AI"], "status": "active"},
                {"code": "R2", "name": "Bad", "model": "spaceship", "tech": [], "status": "active"}
            ]}"#,
        );
        let config = Config::default().with_overrides(None, Some(seed.path().to_path_buf()));

        let (store, report) = boot_store(&config).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.exists("R1"));
        assert_eq!(report.skipped[0].code, "R2");
    }

    #[test]
    fn test_boot_store_skips_ill_typed_record() {
        let seed = write_temp(
            r#"{"robots": [
                {"code": "R1", "name": "Arm", "model": "car", "tech": ["AI"], "status": "active"},
                {"code": "R2", "name": "Bad", "model": "car", "tech": "AI", "status": "active"}
            ]}"#,
        );
        let config = Config::default().with_overrides(None, Some(seed.path().to_path_buf()));

        let (store, report) = boot_store(&config).unwrap();
        assert!(store.exists("R1"));
        assert!(!store.exists("R2"));
        assert_eq!(report.skipped[0].code, "R2");
    }

    #[test]
    fn test_boot_store_loads_default_seed() {
        let seed = write_temp(
            r#"{"robots": [{"code": "R1", "name": "Arm", "model": "car", "tech": null, "status": "active"}]}"#,
        );

        let (store, report) = boot_store_from(&Config::default(), seed.path()).unwrap();
        assert_eq!(report.accepted, vec!["R1".to_string()]);
        assert!(store.exists("R1"));
    }

    #[test]
    fn test_boot_store_missing_default_seed_is_empty() {
        let (store, report) =
            boot_store_from(&Config::default(), Path::new("/nonexistent/initial_data.json"))
                .unwrap();
        assert!(store.is_empty());
        assert_eq!(report, SeedReport::default());
    }

    #[test]
    fn test_boot_store_missing_configured_seed_fails() {
        let config =
            Config::default().with_overrides(None, Some(PathBuf::from("/nonexistent/seed.json")));
        let err = boot_store(&config).unwrap_err();
        assert!(err.message().contains("/nonexistent/seed.json"));
    }

    #[test]
    fn test_bundled_seed_file_loads_cleanly() {
        let (store, report) = boot_store(&Config::default()).unwrap();
        assert_eq!(report.skipped_count(), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_boot_store_malformed_seed_fails() {
        let seed = write_temp("{\"robots\": [");
        let config = Config::default().with_overrides(None, Some(seed.path().to_path_buf()));
        assert!(boot_store(&config).is_err());
    }
}
