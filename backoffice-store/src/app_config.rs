use backoffice_order::PricingConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
        }
    }
}

fn default_per_page() -> usize {
    backoffice_catalog::listing::DEFAULT_PER_PAGE
}

/// Remote API the repositories stand in for
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

/// Where the in-memory store loads its orders from
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SeedConfig {
    pub orders_path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. BACKOFFICE__PRICING__MINOR_UNIT_DIGITS=2
            .add_source(config::Environment::with_prefix("BACKOFFICE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
