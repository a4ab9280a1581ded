//! Configuration for Products API

use core_config::{app_info, env_flag, env_parse, server::ServerConfig, AppInfo, FromEnv};
use domain_products::IdPolicy;

pub use core_config::Environment;

/// Catalog behaviour switches
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Registers `/add-image` and `/get-image`
    pub images_enabled: bool,
    pub id_policy: IdPolicy,
}

impl FromEnv for CatalogConfig {
    fn from_env() -> Result<Self, core_config::ConfigError> {
        Ok(Self {
            images_enabled: env_flag("CATALOG_IMAGES_ENABLED", true)?,
            id_policy: env_parse("CATALOG_ID_POLICY", "sequential")?,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            images_enabled: true,
            id_policy: IdPolicy::default(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub catalog: CatalogConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let catalog = CatalogConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            catalog,
        })
    }
}
