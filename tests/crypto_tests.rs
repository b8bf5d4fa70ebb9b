// tests/crypto_tests.rs
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use secret_vault::consts::{NONCE_LEN, TAG_LEN, TOKEN_VERSION};
use secret_vault::core::cipher::{decrypt, encrypt};
use secret_vault::core::generate_key;
use secret_vault::{Ciphertext, DecryptionError, EncryptionKey};

fn tamper(ciphertext: &Ciphertext, index: usize) -> Ciphertext {
    let mut raw = URL_SAFE.decode(ciphertext.as_str()).unwrap();
    raw[index] ^= 0x01;
    Ciphertext::from(URL_SAFE.encode(raw))
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let key = generate_key();
    for plaintext in ["TestPassword123!", "Secur3!ty", "", "pässwörd with spaces ✓"] {
        let ciphertext = encrypt(&key, plaintext).unwrap();
        assert_ne!(ciphertext.as_str(), plaintext);
        let decrypted = decrypt(&key, &ciphertext).unwrap();
        assert_eq!(decrypted.expose_secret(), plaintext);
    }
}

#[test]
fn test_same_plaintext_encrypts_differently() {
    let key = generate_key();
    let first = encrypt(&key, "TestPassword123!").unwrap();
    let second = encrypt(&key, "TestPassword123!").unwrap();

    assert_ne!(first, second);
    assert_eq!(decrypt(&key, &first).unwrap().expose_secret(), "TestPassword123!");
    assert_eq!(decrypt(&key, &second).unwrap().expose_secret(), "TestPassword123!");
}

#[test]
fn test_token_layout() {
    let key = generate_key();
    let ciphertext = encrypt(&key, "abc").unwrap();
    let raw = URL_SAFE.decode(ciphertext.as_str()).unwrap();

    assert_eq!(raw[0], TOKEN_VERSION);
    assert_eq!(raw.len(), 1 + NONCE_LEN + 3 + TAG_LEN);
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let key1 = generate_key();
    let key2 = generate_key();
    let ciphertext = encrypt(&key1, "secret").unwrap();

    assert!(matches!(decrypt(&key2, &ciphertext), Err(DecryptionError)));
}

#[test]
fn test_decrypt_detects_tampering_anywhere() {
    let key = generate_key();
    let ciphertext = encrypt(&key, "important secret").unwrap();

    // version byte, nonce, body, tag
    for index in [0, 1, 1 + NONCE_LEN, 1 + NONCE_LEN + 16 + TAG_LEN - 1] {
        let tampered = tamper(&ciphertext, index);
        assert!(
            matches!(decrypt(&key, &tampered), Err(DecryptionError)),
            "byte {index} flipped but decryption succeeded"
        );
    }
}

#[test]
fn test_decrypt_rejects_malformed_tokens() {
    let key = generate_key();
    let short = Ciphertext::from(URL_SAFE.encode([TOKEN_VERSION; 10]));

    for bad in [
        Ciphertext::from(String::new()),
        Ciphertext::from("not base64 at all!!".to_owned()),
        short,
    ] {
        assert!(matches!(decrypt(&key, &bad), Err(DecryptionError)));
    }
}

#[test]
fn test_fixed_key_interoperates() {
    let key = EncryptionKey::new([0x42; 32]);
    let same = EncryptionKey::new([0x42; 32]);
    let ciphertext = encrypt(&key, "shared").unwrap();

    assert_eq!(decrypt(&same, &ciphertext).unwrap().expose_secret(), "shared");
}

#[test]
fn test_secret_types_redact_debug_output() {
    let key = generate_key();
    let plain = decrypt(&key, &encrypt(&key, "Secur3!ty").unwrap()).unwrap();

    assert_eq!(format!("{key:?}"), "EncryptionKey([REDACTED])");
    assert!(!format!("{plain:?}").contains("Secur3!ty"));
}
