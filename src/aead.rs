//! AES-128-GCM Authenticated Encryption
//!
//! This module composes the AES-128 block cipher ([`crate::aes_core`]) and
//! the GHASH multiply-accumulate step ([`crate::ghash`]) into the GCM AEAD
//! construction: counter-mode keystream generation for confidentiality, and
//! a GHASH-derived tag for integrity over both the ciphertext and the
//! caller-supplied associated data.
//!
//! # Usage
//!
//! ```
//! use aes128_gcm::{seal, open, Aes128Key};
//!
//! let key = Aes128Key::new([0x42u8; 16]);
//! let nonce = [0x24u8; 12];
//! let aad = b"header";
//! let plaintext = b"attack at dawn";
//!
//! let sealed = seal(&key, &nonce, aad, plaintext);
//! let recovered = open(&key, &nonce, aad, &sealed).expect("authentication failed");
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! # Disclaimer
//!
//! A nonce MUST NOT be reused with the same key: GCM's authentication
//! guarantee, and a meaningful part of its confidentiality guarantee,
//! collapse under nonce reuse. This crate has no way to enforce that at the
//! API level; it is a caller obligation.

use crate::aes_core::{self, RoundKeys};
use crate::error::GcmError;
use crate::ghash;
use crate::key::Aes128Key;
use zeroize::Zeroize;

/// Size of the nonce GCM expects, in bytes.
pub const NONCE_SIZE: usize = 12;

/// Size of the authentication tag appended by [`seal`] and verified by
/// [`open`], in bytes.
pub const TAG_SIZE: usize = 16;

const BLOCK_SIZE: usize = 16;

/// Increment the low 32 bits of a counter block, wrapping on overflow.
///
/// Only `ctr[12..16]` ever changes; the nonce prefix in `ctr[0..12]` is
/// immutable for the duration of one seal/open call.
fn increment_counter(ctr: &mut [u8; 16]) {
    let counter = u32::from_be_bytes([ctr[12], ctr[13], ctr[14], ctr[15]]);
    ctr[12..16].copy_from_slice(&counter.wrapping_add(1).to_be_bytes());
}

/// Derive the hash subkey `H = AES_K(0^128)` and the tag mask
/// `T0 = AES_K(N || 0x00000001)` from an expanded key schedule and nonce.
fn derive_h_and_tag_mask(round_keys: &RoundKeys, nonce: &[u8; NONCE_SIZE]) -> ([u8; 16], [u8; 16]) {
    let h = aes_core::encrypt_block(&[0u8; 16], round_keys);

    let mut j0 = [0u8; 16];
    j0[..NONCE_SIZE].copy_from_slice(nonce);
    j0[15] = 1;
    let tag_mask = aes_core::encrypt_block(&j0, round_keys);

    (h, tag_mask)
}

/// Absorb associated data and ciphertext into a GHASH accumulator, then fold
/// in the length block `L = u64_be(8 * ad.len()) || u64_be(8 * ciphertext.len())`.
fn compute_accumulator(h: &[u8; 16], aad: &[u8], ciphertext: &[u8]) -> [u8; 16] {
    let mut accumulator = [0u8; 16];

    for block in aad.chunks(BLOCK_SIZE) {
        ghash::addmul(&mut accumulator, block, h);
    }
    for block in ciphertext.chunks(BLOCK_SIZE) {
        ghash::addmul(&mut accumulator, block, h);
    }

    let mut length_block = [0u8; 16];
    length_block[0..8].copy_from_slice(&(8 * aad.len() as u64).to_be_bytes());
    length_block[8..16].copy_from_slice(&(8 * ciphertext.len() as u64).to_be_bytes());
    ghash::addmul(&mut accumulator, &length_block, h);

    accumulator
}

/// Generate counter-mode keystream blocks starting at counter value 2 and
/// XOR them against `input`, writing the result to a fresh buffer.
///
/// Used identically for encryption (input = plaintext) and decryption
/// (input = ciphertext): CTR-mode keystream does not depend on which
/// direction is in progress, only on the counter block.
fn apply_keystream(round_keys: &RoundKeys, j0: &[u8; 16], input: &[u8]) -> Vec<u8> {
    let mut ctr = *j0;
    let mut output = Vec::with_capacity(input.len());

    for chunk in input.chunks(BLOCK_SIZE) {
        increment_counter(&mut ctr);
        let keystream = aes_core::encrypt_block(&ctr, round_keys);
        for (byte, k) in chunk.iter().zip(keystream.iter()) {
            output.push(byte ^ k);
        }
    }

    output
}

/// Constant-time equality of two 16-byte tags.
///
/// Folds `diff |= x[i] ^ y[i]` over every byte before testing the result, so
/// the number of operations performed does not depend on where (or whether)
/// the two tags first differ.
fn ct_eq(x: &[u8; 16], y: &[u8; 16]) -> bool {
    let mut diff = 0u8;
    for i in 0..16 {
        diff |= x[i] ^ y[i];
    }
    diff == 0
}

/// Largest plaintext/ciphertext length, in bytes, for which the 32-bit GCM
/// counter does not wrap within a single call.
const MAX_MESSAGE_LEN: usize = (u32::MAX as usize - 1) * BLOCK_SIZE;

/// Seal `plaintext` under `key`, `nonce`, and `aad`, returning
/// `ciphertext || tag`.
///
/// Sealing never fails for inputs within [`MAX_MESSAGE_LEN`]. The nonce
/// must still never be reused with the same key, but that is a caller
/// obligation this function cannot check.
///
/// # Panics
///
/// Panics if `plaintext.len()` would require the 32-bit GCM counter to wrap
/// within this call. This bounds a caller-contract violation (an
/// unreasonably large single buffer), not an attacker-reachable input, so it
/// is a precondition check rather than a [`GcmError`] variant.
pub fn seal(key: &Aes128Key, nonce: &[u8; NONCE_SIZE], aad: &[u8], plaintext: &[u8]) -> Vec<u8> {
    assert!(
        plaintext.len() <= MAX_MESSAGE_LEN,
        "aes128-gcm: plaintext too large for a single nonce's counter space"
    );

    let mut round_keys = aes_core::expand_key(key.as_bytes());
    let (mut h, mut tag_mask) = derive_h_and_tag_mask(&round_keys, nonce);

    let mut j0 = [0u8; 16];
    j0[..NONCE_SIZE].copy_from_slice(nonce);
    j0[15] = 1;

    let ciphertext = apply_keystream(&round_keys, &j0, plaintext);
    let mut accumulator = compute_accumulator(&h, aad, &ciphertext);

    let mut tag = [0u8; TAG_SIZE];
    for i in 0..TAG_SIZE {
        tag[i] = tag_mask[i] ^ accumulator[i];
    }

    round_keys.zeroize();
    h.zeroize();
    tag_mask.zeroize();
    accumulator.zeroize();

    let mut output = Vec::with_capacity(ciphertext.len() + TAG_SIZE);
    output.extend_from_slice(&ciphertext);
    output.extend_from_slice(&tag);
    output
}

/// Verify and decrypt `ciphertext_and_tag` (ciphertext followed by its
/// 16-byte tag) under `key`, `nonce`, and `aad`.
///
/// The accumulator is computed over the received ciphertext and the tag is
/// verified in constant time *before* any plaintext byte is produced; on
/// failure, no plaintext is ever materialized, matching the failure
/// semantics in [`GcmError`].
pub fn open(
    key: &Aes128Key,
    nonce: &[u8; NONCE_SIZE],
    aad: &[u8],
    ciphertext_and_tag: &[u8],
) -> Result<Vec<u8>, GcmError> {
    if ciphertext_and_tag.len() < TAG_SIZE {
        return Err(GcmError::AuthenticationFailed);
    }
    let (ciphertext, received_tag) =
        ciphertext_and_tag.split_at(ciphertext_and_tag.len() - TAG_SIZE);

    let mut round_keys = aes_core::expand_key(key.as_bytes());
    let (mut h, mut tag_mask) = derive_h_and_tag_mask(&round_keys, nonce);

    let mut accumulator = compute_accumulator(&h, aad, ciphertext);

    let mut expected_tag = [0u8; TAG_SIZE];
    for i in 0..TAG_SIZE {
        expected_tag[i] = tag_mask[i] ^ accumulator[i];
    }
    h.zeroize();
    tag_mask.zeroize();
    accumulator.zeroize();

    let mut received = [0u8; TAG_SIZE];
    received.copy_from_slice(received_tag);
    if !ct_eq(&expected_tag, &received) {
        round_keys.zeroize();
        return Err(GcmError::AuthenticationFailed);
    }

    let mut j0 = [0u8; 16];
    j0[..NONCE_SIZE].copy_from_slice(nonce);
    j0[15] = 1;

    let plaintext = apply_keystream(&round_keys, &j0, ciphertext);
    round_keys.zeroize();
    Ok(plaintext)
}
