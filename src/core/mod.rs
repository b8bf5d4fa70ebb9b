// src/core/mod.rs
pub mod cipher;
pub mod key_store;
pub mod validator;

pub use cipher::{decrypt, encrypt, Ciphertext};
pub use key_store::{generate_key, KeyStore};
pub use validator::{validate, ValidationError};
