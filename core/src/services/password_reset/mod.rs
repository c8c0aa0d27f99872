//! Password reset: token issuance, validity and consumption.

pub mod service;

#[cfg(test)]
mod tests;

pub use service::{PasswordResetService, PasswordResetServiceConfig};
