pub mod errors;

pub use errors::{
    ConfigError, PlatformError, StoreError, StyleError, ValidationError, WitaiError,
};

pub type Result<T> = std::result::Result<T, WitaiError>;
