// Infrastructure layer modules
pub mod handler_config;
pub mod logging;

// Re-exports
pub use handler_config::{HandlerConfig, SECRETS_MANAGER_ARN_ENV};
pub use logging::init_logging;
