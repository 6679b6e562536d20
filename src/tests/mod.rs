mod test_ghash;

mod nist;
