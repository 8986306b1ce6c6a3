//! Utility functions for credentials and logging

pub mod credentials;
pub mod logging;

pub use credentials::{AccessCredential, generate_access_key, generate_access_key_with};
