/*!
 * Core Module
 * Error handling, configuration, and capability traits
 */

pub mod config;
pub mod errors;
pub mod traits;

// Re-export for convenience
pub use config::CollectionConfig;
pub use errors::*;
pub use traits::*;
