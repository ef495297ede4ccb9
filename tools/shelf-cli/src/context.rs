//! CLI execution context.

use anyhow::Result;
use shelf_core::PageSize;
use shelf_data::CatalogClient;

use crate::config::CliConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Catalog API client.
    pub client: CatalogClient,
}

impl Context {
    /// Load context from config file, applying CLI overrides.
    pub fn load(
        config_path: Option<&str>,
        base_url_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config().unwrap_or_default()
        };

        let base_url = base_url_override.unwrap_or(&config.api.base_url);
        let client = CatalogClient::with_base_url(base_url);

        Ok(Self {
            config,
            output,
            client,
        })
    }

    /// Find a config file in the current directory or its ancestors.
    fn find_config() -> Option<CliConfig> {
        let config_names = ["shelf.toml", ".shelf.toml"];

        let mut current = std::env::current_dir().ok()?;
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Default page size from config, falling back to 10 for values
    /// outside the fixed option set.
    pub fn default_page_size(&self) -> PageSize {
        match PageSize::from_value(self.config.ui.page_size) {
            Some(size) => size,
            None => {
                self.output.warn(&format!(
                    "ui.page_size {} is not one of 10/20/50/100, using 10",
                    self.config.ui.page_size
                ));
                PageSize::Ten
            }
        }
    }
}
