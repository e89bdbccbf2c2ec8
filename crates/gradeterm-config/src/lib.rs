//! # Gradeterm Config
//!
//! Configuration types for the Grade Entry System terminal client.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`api`]: Backend API endpoint configuration
//!
//! # Example
//!
//! ```ignore
//! use gradeterm_config::ApiConfig;
//!
//! // Load from environment
//! let api_config = ApiConfig::from_env();
//! println!("talking to {}", api_config.base_url);
//! ```

pub mod api;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
