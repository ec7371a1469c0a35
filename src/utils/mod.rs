//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`client_ip`] - Client address extraction from proxy headers
//! - [`base_url`] - Public base URL derivation for `short_url`

pub mod base_url;
pub mod client_ip;
pub mod code_generator;
