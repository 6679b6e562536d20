//! GF(2^128) Multiply-Accumulate (GHASH)
//!
//! This module provides the multiply-accumulate step GCM uses to fold
//! associated data, ciphertext, and length framing into a single 128-bit
//! authentication accumulator.
//!
//! 16-byte blocks are treated as polynomials in
//! `GF(2)[x] / (x^128 + x^7 + x^2 + x + 1)`, under the GCM "bit-reversed"
//! convention: for a block `B`, bit index `i` in `[0, 128)` corresponds to
//! `B[i/8]` bit `7 - (i % 8)`, i.e. most-significant-bit-first within each
//! byte, byte 0 first.
//!
//! # Disclaimer
//!
//! This is the schoolbook reference form: expand both operands to 128-bit
//! arrays, multiply into a 256-bit product, then fold the high half back
//! down with the field's reduction identity. It is not constant-time in the
//! way a carry-less-multiplication instruction would be, but its execution
//! path does not depend on whether the accumulator is correct, which is the
//! property GCM's authentication step needs from it. A production path may
//! substitute a table-driven or CLMUL-backed multiply provided the
//! externally observed result is bit-identical.

/// Size of a GHASH block in bytes.
pub const BLOCK_SIZE: usize = 16;

fn expand_bits(block: &[u8; 16]) -> [u8; 128] {
    let mut bits = [0u8; 128];
    for i in 0..128 {
        bits[i] = (block[i / 8] >> (7 - (i % 8))) & 1;
    }
    bits
}

fn pack_bits(bits: &[u8; 128]) -> [u8; 16] {
    let mut block = [0u8; 16];
    for i in 0..128 {
        block[i / 8] |= bits[i] << (7 - (i % 8));
    }
    block
}

/// Multiply two GHASH field elements: `a * h` in `GF(2^128)`.
fn gf128_multiply(a: &[u8; 16], h: &[u8; 16]) -> [u8; 16] {
    let abits = expand_bits(a);
    let hbits = expand_bits(h);
    let mut prod = [0u8; 256];

    for i in 0..128 {
        if abits[i] == 0 {
            continue;
        }
        for j in 0..128 {
            prod[i + j] ^= hbits[j];
        }
    }

    for i in (0..128).rev() {
        let carry = prod[i + 128];
        if carry != 0 {
            prod[i] ^= carry;
            prod[i + 1] ^= carry;
            prod[i + 2] ^= carry;
            prod[i + 7] ^= carry;
            prod[i + 128] = 0;
        }
    }

    let mut low = [0u8; 128];
    low.copy_from_slice(&prod[..128]);
    pack_bits(&low)
}

/// Fold `x` (a slice of at most 16 bytes, implicitly right-zero-padded) into
/// the accumulator `a`, then multiply by the hash subkey `h`:
/// `a <- (a xor pad(x)) * h`.
///
/// This is the `addmul` step GCM calls once per absorbed block (once per
/// associated-data block, once per ciphertext block, and once for the final
/// length block).
pub fn addmul(a: &mut [u8; 16], x: &[u8], h: &[u8; 16]) {
    debug_assert!(x.len() <= BLOCK_SIZE);
    for (byte, xbyte) in a.iter_mut().zip(x.iter()) {
        *byte ^= xbyte;
    }
    *a = gf128_multiply(a, h);
}
