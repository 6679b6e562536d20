//! AES-128 Key Handling
//!
//! This module wraps the raw 16-byte AES-128 key in an owning type so that
//! key material is zeroized when it goes out of scope and never printed
//! through a derived `Debug` impl.
//!
//! # Usage
//!
//! ```
//! use aes128_gcm::Aes128Key;
//!
//! let key = Aes128Key::new([0u8; 16]);
//! assert_eq!(key.as_bytes().len(), 16);
//! ```

use zeroize::Zeroize;

/// Size of an AES-128 key in bytes.
pub const AES_128_KEY_SIZE: usize = 16;

/// An AES-128 key, owned and zeroized on drop.
///
/// The fixed-size array in the constructor is a compile-time guarantee that
/// the key is exactly 16 bytes; there is no runtime key-length validation to
/// get wrong.
pub struct Aes128Key([u8; AES_128_KEY_SIZE]);

impl Aes128Key {
    /// Construct a key from 16 bytes, taking ownership of the buffer.
    pub fn new(bytes: [u8; AES_128_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Borrow the key bytes.
    pub fn as_bytes(&self) -> &[u8; AES_128_KEY_SIZE] {
        &self.0
    }
}

impl Drop for Aes128Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Aes128Key").field(&"<redacted>").finish()
    }
}
