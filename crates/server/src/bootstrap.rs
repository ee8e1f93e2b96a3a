use caliope_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

use crate::api::ApiContext;

pub struct Application {
    pub config: AppConfig,
    pub context: ApiContext,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    let config = AppConfig::load(options)?;
    Ok(bootstrap_with_config(config))
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    let context = ApiContext::simulated(&config);

    info!(
        event_name = "system.bootstrap.catalog_seeded",
        correlation_id = "bootstrap",
        services = context.catalog.services().len(),
        products = context.catalog.products().len(),
        memberships = context.catalog.memberships().len(),
        "seed catalog loaded"
    );

    Application { config, context }
}
