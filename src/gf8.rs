//! GF(2^8) Arithmetic
//!
//! This module provides the byte-level finite-field operations that the AES
//! round function is built from: polynomial multiplication, squaring,
//! multiplication by x ("xtime"), and the S-box byte substitution.
//!
//! Bytes are interpreted as polynomials over GF(2) modulo the AES
//! irreducible polynomial m(x) = x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! # Table-free by design
//!
//! Every function here computes its result algebraically, one bit or one
//! addition-chain step at a time, rather than through a precomputed lookup
//! table. A lookup table's access pattern depends on the table index, and
//! the table index here is (indirectly) the secret key. Computing the
//! result algebraically avoids that data-dependent memory access, closing
//! off a cache side channel.
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", favoring a side-channel-free
//! shape over throughput. A production path may reintroduce precomputed
//! tables or hardware carry-less multiplication behind the same function
//! signatures.

/// Multiply two elements of GF(2^8), reducing modulo the AES polynomial.
///
/// Performs schoolbook polynomial multiplication into a 15-bit product, then
/// folds bits 14 down to 8 back into bits 0..7 using the reduction identity
/// x^8 ≡ x^4 + x^3 + x + 1 (mod m(x)).
pub fn multiply(c: u8, d: u8) -> u8 {
    let mut f = [0u8; 8];
    let mut g = [0u8; 8];
    let mut h = [0u8; 15];

    for i in 0..8 {
        f[i] = (c >> i) & 1;
        g[i] = (d >> i) & 1;
    }
    for i in 0..8 {
        for j in 0..8 {
            h[i + j] ^= f[i] & g[j];
        }
    }

    for i in (0..=6).rev() {
        h[i] ^= h[i + 8];
        h[i + 1] ^= h[i + 8];
        h[i + 3] ^= h[i + 8];
        h[i + 4] ^= h[i + 8];
        h[i + 8] ^= h[i + 8];
    }

    let mut result = 0u8;
    for i in 0..8 {
        result |= h[i] << i;
    }
    result
}

/// Square an element of GF(2^8): `square(c) = multiply(c, c)`.
pub fn square(c: u8) -> u8 {
    multiply(c, c)
}

/// Multiply an element of GF(2^8) by x (the generator): `xtime(c) = multiply(c, 2)`.
pub fn xtime(c: u8) -> u8 {
    multiply(c, 2)
}

/// Compute the AES S-box substitution of a byte without a lookup table.
///
/// This is the multiplicative inverse `c^254` in GF(2^8) (with 0 mapped to
/// 0), followed by the AES affine transformation over GF(2). The inverse is
/// computed via the addition chain
/// `c^254 = ((((c^2 * c)^2 * c)^8 * (c^2 * c))^2 * c)^2`,
/// which needs 254 only as an exponent identity, not as a loop count.
pub fn bytesub(c: u8) -> u8 {
    let c3 = multiply(square(c), c);
    let c7 = multiply(square(c3), c);
    let c63 = multiply(square(square(square(c7))), c7);
    let c127 = multiply(square(c63), c);
    let c254 = square(c127);

    let mut f = [0u8; 8];
    for i in 0..8 {
        f[i] = (c254 >> i) & 1;
    }

    let mut h = [0u8; 8];
    h[0] = f[0] ^ f[4] ^ f[5] ^ f[6] ^ f[7] ^ 1;
    h[1] = f[1] ^ f[5] ^ f[6] ^ f[7] ^ f[0] ^ 1;
    h[2] = f[2] ^ f[6] ^ f[7] ^ f[0] ^ f[1];
    h[3] = f[3] ^ f[7] ^ f[0] ^ f[1] ^ f[2];
    h[4] = f[4] ^ f[0] ^ f[1] ^ f[2] ^ f[3];
    h[5] = f[5] ^ f[1] ^ f[2] ^ f[3] ^ f[4] ^ 1;
    h[6] = f[6] ^ f[2] ^ f[3] ^ f[4] ^ f[5] ^ 1;
    h[7] = f[7] ^ f[3] ^ f[4] ^ f[5] ^ f[6];

    let mut result = 0u8;
    for i in 0..8 {
        result |= h[i] << i;
    }
    result
}
