use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_REPORT_FILE: &str = "eligibility-report.pdf";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub report: ReportConfig,
    pub institution_catalog: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            AppEnvironment::from_str(&lookup("APP_ENV").unwrap_or_else(|| "development".into()));

        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let output_dir = lookup("APP_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = lookup("APP_REPORT_FILE").unwrap_or_else(|| DEFAULT_REPORT_FILE.into());
        if file_name.trim().is_empty() {
            return Err(ConfigError::EmptyReportFile);
        }

        let institution_catalog = lookup("APP_INSTITUTION_CATALOG")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            report: ReportConfig {
                output_dir,
                file_name: file_name.trim().to_string(),
            },
            institution_catalog,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where exported PDF reports land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl ReportConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    EmptyReportFile,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { source } => {
                write!(f, "APP_HOST must be an IP address or localhost: {source}")
            }
            ConfigError::EmptyReportFile => write!(f, "APP_REPORT_FILE must not be blank"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::EmptyReportFile => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| values.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults load");

        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.report, ReportConfig::default());
        assert_eq!(
            config.report.output_path(),
            PathBuf::from(".").join("eligibility-report.pdf")
        );
        assert!(config.institution_catalog.is_none());
    }

    #[test]
    fn overrides_are_read_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("APP_ENV", "prod"),
            ("APP_HOST", "localhost"),
            ("APP_PORT", "8088"),
            ("APP_REPORT_DIR", "/tmp/reports"),
            ("APP_REPORT_FILE", "profile.pdf"),
            ("APP_INSTITUTION_CATALOG", "catalog.json"),
        ]))
        .expect("overrides load");

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.server.socket_addr().expect("localhost resolves"),
            SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8088)
        );
        assert_eq!(
            config.report.output_path(),
            PathBuf::from("/tmp/reports/profile.pdf")
        );
        assert_eq!(
            config.institution_catalog,
            Some(PathBuf::from("catalog.json"))
        );
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")]))
            .expect_err("port must parse");
        assert!(matches!(err, ConfigError::InvalidPort));
    }

    #[test]
    fn blank_report_file_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_REPORT_FILE", "  ")]))
            .expect_err("file name required");
        assert!(matches!(err, ConfigError::EmptyReportFile));
    }

    #[test]
    fn invalid_host_is_reported() {
        let server = ServerConfig {
            host: "not-an-ip".to_string(),
            port: 3000,
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
