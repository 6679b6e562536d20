//! # aes128-gcm
//!
//! A from-scratch, table-free implementation of AES-128 in Galois/Counter
//! Mode (GCM), following NIST SP 800-38D and FIPS 197.
//!
//! This crate implements exactly one authenticated-encryption construction,
//! AES-128-GCM with a 12-byte nonce and a 16-byte tag, built up from four
//! layers:
//!
//! - [`gf8`]: GF(2^8) byte arithmetic (the field AES's S-box and
//!   `MixColumns` are defined over), computed algebraically rather than via
//!   lookup table.
//! - [`aes_core`]: the AES-128 key schedule and single-block encryption
//!   primitive.
//! - [`ghash`]: the GF(2^128) multiply-accumulate step GCM uses for its
//!   universal-hash authentication tag.
//! - [`aead`]: the GCM composition itself, exposed as [`seal`] and [`open`].
//!
//! # Example
//!
//! ```
//! use aes128_gcm::{seal, open, Aes128Key};
//!
//! let key = Aes128Key::new([0u8; 16]);
//! let nonce = [0u8; 12];
//!
//! let sealed = seal(&key, &nonce, b"", b"");
//! assert_eq!(open(&key, &nonce, b"", &sealed).unwrap(), b"");
//! ```
//!
//! # Scope
//!
//! This crate targets correctness and a side-channel-conscious shape, not
//! throughput: there is no AES-NI or CLMUL acceleration, no precomputed
//! S-box table, and no streaming/incremental API. A production deployment
//! would put a table-driven or hardware-assisted path behind the same
//! [`seal`]/[`open`] contract rather than replace it.
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", without warranty of any kind,
//! express or implied. Correct use of AES-128-GCM additionally requires
//! that a (key, nonce) pair is never reused. This crate has no way to
//! enforce that and it remains a caller obligation.

pub mod aead;
pub mod aes_core;
pub mod error;
pub mod gf8;
pub mod ghash;
pub mod key;

#[cfg(test)]
mod tests;

pub use aead::{open, seal, NONCE_SIZE, TAG_SIZE};
pub use error::GcmError;
pub use key::{Aes128Key, AES_128_KEY_SIZE};
