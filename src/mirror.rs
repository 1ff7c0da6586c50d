//! Encrypted mirrors of downloaded puzzle inputs.
//!
//! Puzzle inputs are per-user and must not be published in plaintext, but
//! losing them means re-downloading every day by hand. Each downloaded
//! input therefore gets an AES-256-GCM encrypted sibling (`day_NN.enc.txt`)
//! that is safe to commit; `--decrypt-data` restores the plaintext files
//! from those mirrors on a fresh clone.

use std::fs;
use std::path::Path;

use aes_gcm::aead::{rand_core::RngCore, Aead, OsRng};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::constants::AES_KEY_VAR;
use crate::error::{Error, Result};

/// Suffix of encrypted mirror files in the data directory.
pub const MIRROR_SUFFIX: &str = ".enc.txt";

/// Plaintext suffix the mirrors are restored to.
const DATA_SUFFIX: &str = ".txt";

/// AES-GCM standard nonce length; the nonce is prepended to the ciphertext.
const NONCE_LEN: usize = 12;

/// Encrypts and decrypts input mirror files with a shared 32-byte key.
pub struct InputMirror {
    cipher: Aes256Gcm,
}

impl InputMirror {
    pub fn new(key: &str) -> Result<Self> {
        if key.len() != 32 {
            return Err(Error::CryptoError(format!(
                "key must be exactly 32 bytes, got {}",
                key.len()
            )));
        }
        let key = Key::<Aes256Gcm>::from_slice(key.as_bytes());
        Ok(Self { cipher: Aes256Gcm::new(key) })
    }

    /// Builds a mirror with the key from the environment.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(AES_KEY_VAR)
            .map_err(|_| Error::MissingEnvVar(AES_KEY_VAR.to_string()))?;
        Self::new(&key)
    }

    /// Encrypts one input: base64 of a fresh random nonce followed by the
    /// ciphertext.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);
        let nonce = Nonce::from(nonce);

        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| Error::CryptoError(e.to_string()))?;

        let mut payload = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(payload))
    }

    /// Decrypts one mirror payload back to the plaintext input.
    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let payload = BASE64
            .decode(encoded.trim())
            .map_err(|e| Error::CryptoError(e.to_string()))?;
        if payload.len() < NONCE_LEN {
            return Err(Error::CryptoError(
                "payload is shorter than the nonce".to_string(),
            ));
        }

        let (nonce, ciphertext) = payload.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|e| Error::CryptoError(e.to_string()))?;
        String::from_utf8(plaintext).map_err(|e| Error::CryptoError(e.to_string()))
    }

    /// Restores every `*.enc.txt` mirror in the data directory to its
    /// plaintext `*.txt` sibling. Returns the number of restored files.
    pub fn restore_data_dir(&self, data_dir: &Path) -> Result<usize> {
        let mut restored = 0;
        for entry in fs::read_dir(data_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let Some(stem) = file_name.strip_suffix(MIRROR_SUFFIX) else {
                continue;
            };

            let decrypted = self.decrypt(&fs::read_to_string(entry.path())?)?;
            let target = data_dir.join(format!("{stem}{DATA_SUFFIX}"));
            fs::write(&target, decrypted)?;
            log::info!("Restored '{}' from its mirror.", target.display());
            restored += 1;
        }
        Ok(restored)
    }
}
