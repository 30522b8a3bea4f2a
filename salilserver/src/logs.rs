//! Initialisation du logging console (tracing + EnvFilter).

use salilconfig::Config;
use tracing_subscriber::EnvFilter;

/// Options de configuration du logging
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Niveau minimum ("TRACE", "DEBUG", "INFO", ...)
    pub min_level: String,
    /// Active la sortie console
    pub enable_console: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            min_level: "INFO".to_string(),
            enable_console: true,
        }
    }
}

impl LoggingOptions {
    /// Options lues depuis la configuration
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            min_level: config
                .get_log_min_level()
                .unwrap_or(defaults.min_level),
            enable_console: config
                .get_log_enable_console()
                .unwrap_or(defaults.enable_console),
        }
    }
}

/// Initialise le système de tracing
///
/// La variable d'environnement `RUST_LOG` prime sur le niveau configuré.
/// À n'appeler qu'une fois par process.
pub fn init_logging(options: &LoggingOptions) {
    if !options.enable_console {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.min_level.to_lowercase()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
