use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "WellnessHelp";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Facilities suggested alongside a resolved disease.
pub const FACILITY_LIMIT: usize = 3;

/// Content store file names, relative to the data directory.
pub const KNOWLEDGE_BASE_FILE: &str = "db.json";
pub const VACCINATION_FILE: &str = "vaccinations.json";
pub const PREVENTIVE_FILE: &str = "preventive_health.json";
pub const LEGACY_DISEASE_FILE: &str = "diseases_multilang.json";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_PORT: u16 = 8000;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,wellness_lib=debug"
    } else {
        "info"
    }
}

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the four content store files.
    pub data_dir: PathBuf,
    /// Static assets served under `/public`.
    pub public_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl AppConfig {
    /// Read `WELLNESS_DATA_DIR`, `WELLNESS_PUBLIC_DIR` and `WELLNESS_BIND`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("WELLNESS_BIND") {
            Some(raw) => match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => addr,
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Invalid WELLNESS_BIND, using default");
                    defaults.bind_addr
                }
            },
            None => defaults.bind_addr,
        };

        Self {
            data_dir: lookup("WELLNESS_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            public_dir: lookup("WELLNESS_PUBLIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            bind_addr,
        }
    }

    pub fn knowledge_base_path(&self) -> PathBuf {
        self.data_dir.join(KNOWLEDGE_BASE_FILE)
    }

    pub fn vaccination_path(&self) -> PathBuf {
        self.data_dir.join(VACCINATION_FILE)
    }

    pub fn preventive_path(&self) -> PathBuf {
        self.data_dir.join(PREVENTIVE_FILE)
    }

    pub fn legacy_disease_path(&self) -> PathBuf {
        self.data_dir.join(LEGACY_DISEASE_FILE)
    }
}
