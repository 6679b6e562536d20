use crate::ghash::addmul;
use hex::decode as hex_decode;

#[test]
fn test_addmul_with_zero_h_is_zero() {
    let mut a = [0xAAu8; 16];
    let h = [0u8; 16];
    addmul(&mut a, &[0xFFu8; 16], &h);
    assert_eq!(a, [0u8; 16]);
}

#[test]
fn test_addmul_short_block_is_zero_padded() {
    let h: [u8; 16] = hex_decode("66e94bd4ef8a2c3b884cfa59ca342b2e")
        .unwrap()
        .try_into()
        .unwrap();

    let mut a = [0u8; 16];
    addmul(&mut a, &[0x01, 0x02, 0x03], &h);

    let mut expected = [0u8; 16];
    let mut padded = [0u8; 16];
    padded[0] = 0x01;
    padded[1] = 0x02;
    padded[2] = 0x03;
    addmul(&mut expected, &padded, &h);

    assert_eq!(a, expected);
}

#[test]
fn test_addmul_nist_gcm_test_case_2() {
    // NIST SP 800-38D test case 2: single all-zero plaintext block under an
    // all-zero key and nonce. H is the zero-key AES block, and GHASH over
    // the resulting ciphertext plus the length block must match the known
    // accumulator value used to produce the published tag.
    let h: [u8; 16] = hex_decode("66e94bd4ef8a2c3b884cfa59ca342b2e")
        .unwrap()
        .try_into()
        .unwrap();
    let ciphertext: [u8; 16] = hex_decode("0388dace60b6a392f328c2b971b2fe78")
        .unwrap()
        .try_into()
        .unwrap();

    let mut accumulator = [0u8; 16];
    addmul(&mut accumulator, &ciphertext, &h);

    let mut length_block = [0u8; 16];
    length_block[8..16].copy_from_slice(&(8u64 * 16).to_be_bytes());
    addmul(&mut accumulator, &length_block, &h);

    let tag_mask: [u8; 16] = hex_decode("58e2fccefa7e3061367f1d57a4e7455a")
        .unwrap()
        .try_into()
        .unwrap();
    let mut tag = [0u8; 16];
    for i in 0..16 {
        tag[i] = tag_mask[i] ^ accumulator[i];
    }

    let expected_tag: [u8; 16] = hex_decode("ab6e47d42cec13bdf53a67b21257bddf")
        .unwrap()
        .try_into()
        .unwrap();
    assert_eq!(tag, expected_tag);
}
