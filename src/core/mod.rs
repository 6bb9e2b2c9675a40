// Public modules
pub mod defaults;
pub mod error;
pub mod restyle;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
