//! Error Types for AES-128-GCM
//!
//! This module defines the single failure mode exposed at the public
//! boundary of the crate: authentication failure on `open`.
//!
//! # Disclaimer
//!
//! Per NIST SP 800-38D, a GCM implementation must not let a caller
//! distinguish "ciphertext too short to contain a tag" from "tag did not
//! match". Either case could leak information useful to a chosen-ciphertext
//! attacker if they were reported differently. Both causes are therefore
//! collapsed into the one variant below; do not add a second variant to
//! `GcmError` without re-reading that requirement.

use thiserror::Error;

/// The only error this crate's public API can return.
///
/// Both malformed input (a ciphertext shorter than the 16-byte tag) and a
/// tag mismatch surface as this same variant. No positional or
/// timing-distinguishable detail is attached.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcmError {
    /// Returned by [`crate::open`] when the ciphertext is shorter than the
    /// tag length, or when the computed tag does not match the received
    /// tag. The plaintext buffer that would otherwise have been produced is
    /// never constructed.
    #[error("AES-GCM authentication failed")]
    AuthenticationFailed,
}
