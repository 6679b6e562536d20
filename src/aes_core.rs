//! AES-128 Core Implementation
//!
//! This module provides the AES-128 key schedule and single-block encryption
//! primitive that the rest of the crate is built on.
//!
//! Only AES-128 block *encryption* is implemented: the keystream is
//! generated by encrypting successive counter blocks, so no decryption
//! direction and no other key size is needed. Byte substitution and GF(2^8)
//! multiplication are delegated to [`crate::gf8`], which computes them
//! algebraically rather than via lookup table.
//!
//! # Features
//!
//! - Key expansion (`expand_key`) producing the 11 round keys (176 bytes)
//!   AES-128 needs.
//! - Single-block encryption (`encrypt_block`), 10 rounds with `MixColumns`
//!   omitted in the final round.
//!
//! # Note
//!
//! The 4x4 state is indexed column-major: input byte at offset `j*4+i` maps
//! to `state[i][j]`, matching the layout FIPS 197 specifies.

use crate::gf8::{bytesub, xtime};

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-128 key size in bytes.
pub const AES_128_KEY_SIZE: usize = 16;

/// Number of 32-bit words in an AES-128 key.
const NK: usize = 4;

/// Number of encryption rounds for AES-128.
const NR: usize = 10;

/// Number of columns in the AES state.
const NB: usize = 4;

/// Expanded round keys for AES-128: 11 round keys of 16 bytes each.
pub type RoundKeys = [[u8; 16]; NR + 1];

/// Expand an AES-128 key into its 11 round keys.
///
/// `RotWord`/`SubWord` are applied every 4th word (every `NK` words, with
/// `NK = 4` for AES-128), driven by a running round constant that starts at
/// 1 and is updated with [`xtime`] after each use, following the iterative
/// Rcon form of the algorithm rather than a precomputed Rcon table.
pub fn expand_key(key: &[u8; AES_128_KEY_SIZE]) -> RoundKeys {
    let mut w = [[0u8; 4]; NB * (NR + 1)];
    for (i, word) in w.iter_mut().enumerate().take(NK) {
        word.copy_from_slice(&key[i * 4..i * 4 + 4]);
    }

    let mut rcon = 1u8;
    for i in NK..NB * (NR + 1) {
        let mut temp = w[i - 1];
        if i % NK == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = bytesub(*byte);
            }
            temp[0] ^= rcon;
            rcon = xtime(rcon);
        }
        for j in 0..4 {
            w[i][j] = w[i - NK][j] ^ temp[j];
        }
    }

    let mut round_keys: RoundKeys = [[0u8; 16]; NR + 1];
    for (round, key_words) in round_keys.iter_mut().zip(w.chunks(NB)) {
        for (j, word) in key_words.iter().enumerate() {
            round[j * 4..j * 4 + 4].copy_from_slice(word);
        }
    }
    round_keys
}

/// Load a 16-byte block into column-major state.
fn load_state(block: &[u8; AES_BLOCK_SIZE]) -> [[u8; 4]; 4] {
    let mut state = [[0u8; 4]; 4];
    for j in 0..4 {
        for i in 0..4 {
            state[i][j] = block[j * 4 + i];
        }
    }
    state
}

/// Store column-major state back into a 16-byte block.
fn store_state(state: &[[u8; 4]; 4]) -> [u8; AES_BLOCK_SIZE] {
    let mut block = [0u8; AES_BLOCK_SIZE];
    for j in 0..4 {
        for i in 0..4 {
            block[j * 4 + i] = state[i][j];
        }
    }
    block
}

fn sub_bytes(state: &mut [[u8; 4]; 4]) {
    for row in state.iter_mut() {
        for byte in row.iter_mut() {
            *byte = bytesub(*byte);
        }
    }
}

/// Row `i` rotated left by `i` positions.
fn shift_rows(state: &mut [[u8; 4]; 4]) {
    for (i, row) in state.iter_mut().enumerate() {
        row.rotate_left(i);
    }
}

fn mix_columns(state: &mut [[u8; 4]; 4]) {
    for j in 0..4 {
        let (a0, a1, a2, a3) = (state[0][j], state[1][j], state[2][j], state[3][j]);
        state[0][j] = xtime(a0 ^ a1) ^ a1 ^ a2 ^ a3;
        state[1][j] = xtime(a1 ^ a2) ^ a2 ^ a3 ^ a0;
        state[2][j] = xtime(a2 ^ a3) ^ a3 ^ a0 ^ a1;
        state[3][j] = xtime(a3 ^ a0) ^ a0 ^ a1 ^ a2;
    }
}

fn add_round_key(state: &mut [[u8; 4]; 4], round_key: &[u8; 16]) {
    for i in 0..4 {
        for j in 0..4 {
            state[i][j] ^= round_key[j * 4 + i];
        }
    }
}

/// Encrypt a single 16-byte block with an already-expanded AES-128 key
/// schedule.
///
/// 10 rounds preceded by an initial `AddRoundKey`; `MixColumns` is omitted
/// from the final round.
pub fn encrypt_block(block: &[u8; AES_BLOCK_SIZE], round_keys: &RoundKeys) -> [u8; AES_BLOCK_SIZE] {
    let mut state = load_state(block);

    add_round_key(&mut state, &round_keys[0]);

    for round_key in round_keys.iter().take(NR).skip(1) {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[NR]);

    store_state(&state)
}
