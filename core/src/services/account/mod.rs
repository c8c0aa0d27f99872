//! Account lifecycle: signup, login, contact changes, resend flows.

pub mod password;
pub mod service;

#[cfg(test)]
mod tests;

pub use service::{AccountService, ContactUpdate, NewAccount, ResendOutcome};
