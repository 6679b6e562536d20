//! NIST SP 800-38D / GCM reference test vectors (test cases 1-4).

use crate::{open, seal, Aes128Key};
use hex::decode as hex_decode;

fn key_from_hex(s: &str) -> Aes128Key {
    let bytes: [u8; 16] = hex_decode(s).unwrap().try_into().unwrap();
    Aes128Key::new(bytes)
}

fn nonce_from_hex(s: &str) -> [u8; 12] {
    hex_decode(s).unwrap().try_into().unwrap()
}

#[test]
fn test_nist_case1_empty_plaintext_empty_aad() {
    let key = Aes128Key::new([0u8; 16]);
    let nonce = nonce_from_hex("000000000000000000000000");

    let sealed = seal(&key, &nonce, b"", b"");
    assert_eq!(hex::encode(&sealed), "58e2fccefa7e3061367f1d57a4e7455a");

    let recovered = open(&key, &nonce, b"", &sealed).unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn test_nist_case2_single_zero_block() {
    let key = Aes128Key::new([0u8; 16]);
    let nonce = nonce_from_hex("000000000000000000000000");
    let plaintext = [0u8; 16];

    let sealed = seal(&key, &nonce, b"", &plaintext);
    assert_eq!(
        hex::encode(&sealed),
        "0388dace60b6a392f328c2b971b2fe78ab6e47d42cec13bdf53a67b21257bddf"
    );

    let recovered = open(&key, &nonce, b"", &sealed).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_nist_case3_multi_block_no_aad() {
    let key = key_from_hex("feffe9928665731c6d6a8f9467308308");
    let nonce = nonce_from_hex("cafebabefacedbaddecaf888");
    let plaintext = hex_decode(
        "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b391aafd255",
    )
    .unwrap();

    let sealed = seal(&key, &nonce, b"", &plaintext);
    assert_eq!(
        hex::encode(&sealed),
        "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e2329aca12e21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac973d58e091473f59854d5c2af327cd64a62cf35abd2ba6fab4"
    );

    let recovered = open(&key, &nonce, b"", &sealed).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_nist_case4_multi_block_with_aad() {
    let key = key_from_hex("feffe9928665731c6d6a8f9467308308");
    let nonce = nonce_from_hex("cafebabefacedbaddecaf888");
    let aad = hex_decode("feedfacedeadbeeffeedfacedeadbeefabaddad2").unwrap();
    let plaintext = hex_decode(
        "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39",
    )
    .unwrap();

    let sealed = seal(&key, &nonce, &aad, &plaintext);
    assert_eq!(
        hex::encode(&sealed),
        "42831ec2217774244b7221b784d0d49ce3aa212f2c02a4e035c17e2329aca12e21d514b25466931c7d8f6a5aac84aa051ba30b396a0aac973d58e0915bc94fbc3221a5db94fae95ae7121a47"
    );

    let recovered = open(&key, &nonce, &aad, &sealed).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_nist_case5_bit_flip_fails_authentication() {
    let key = key_from_hex("feffe9928665731c6d6a8f9467308308");
    let nonce = nonce_from_hex("cafebabefacedbaddecaf888");
    let aad = hex_decode("feedfacedeadbeeffeedfacedeadbeefabaddad2").unwrap();
    let plaintext = hex_decode(
        "d9313225f88406e5a55909c5aff5269a86a7a9531534f7da2e4c303d8a318a721c3c0c95956809532fcf0e2449a6b525b16aedf5aa0de657ba637b39",
    )
    .unwrap();

    let mut sealed = seal(&key, &nonce, &aad, &plaintext);

    // Flip a bit in the ciphertext body.
    let mut tampered_body = sealed.clone();
    tampered_body[0] ^= 0x01;
    assert!(open(&key, &nonce, &aad, &tampered_body).is_err());

    // Flip a bit in the tag.
    let last = sealed.len() - 1;
    sealed[last] ^= 0x01;
    assert!(open(&key, &nonce, &aad, &sealed).is_err());
}
