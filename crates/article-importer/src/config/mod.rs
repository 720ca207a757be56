pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, default_config_path, load_config, load_config_from_str,
    load_default_config, API_URL_ENV,
};
pub use schema::{ApiConfig, CategoriesConfig, FormConfig, ImporterConfig, LoggingConfig};
