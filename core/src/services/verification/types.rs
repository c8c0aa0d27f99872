//! Types for verification service results

/// Result of issuing a verification credential
#[derive(Debug, Clone)]
pub struct IssuedCredential {
    /// The issued token or code
    pub value: String,

    /// Whether the notification carrying it was accepted by the gateway.
    /// Issuance succeeds either way; this only reflects delivery.
    pub delivered: bool,
}
