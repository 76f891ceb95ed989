mod core_config;
pub mod defaults;

pub use core_config::CoreConfig;
