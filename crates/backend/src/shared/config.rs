use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the built frontend bundle (index.html, wasm, js)
    pub static_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"
"#;

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "APP_PORT";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `APP_PORT`, when set, replaces the configured port.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_port_override(&mut config, std::env::var(PORT_ENV).ok())?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("cannot read {}", config_path.display()))?;
                let config: Config = toml::from_str(&contents)
                    .with_context(|| format!("invalid config {}", config_path.display()))?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG).context("invalid embedded config")?;
    Ok(config)
}

fn apply_port_override(config: &mut Config, value: Option<String>) -> anyhow::Result<()> {
    if let Some(value) = value {
        config.server.port = value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV, value))?;
        tracing::info!("Port overridden by {}: {}", PORT_ENV, config.server.port);
    }
    Ok(())
}

/// Address the HTTP server binds to
pub fn socket_addr(config: &Config) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    addr.parse()
        .with_context(|| format!("invalid server address '{}'", addr))
}

/// Get the static bundle directory from configuration
///
/// Relative paths are tried against the working directory first, then
/// against the executable directory.
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    // If absolute path, use as is
    if dir.is_absolute() || dir.exists() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    tracing::warn!("Static directory not found: {}", dir.display());
    dir.to_path_buf()
}
