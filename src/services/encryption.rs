use crate::error::Result;

/// Decrypts credentials stored in OBM records.
///
/// The plaintext is returned to the caller only; implementations must not
/// cache or log it.
pub trait Encryption: Send + Sync {
    fn decrypt(&self, ciphertext: &str) -> Result<String>;
}
