mod test_nist_gcm;
