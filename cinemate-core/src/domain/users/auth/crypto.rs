use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use rand::{TryRngCore, rngs::OsRng};
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroizing;

/// Hashing helper for opaque bearer tokens.
///
/// Tokens are hashed with HMAC-SHA-256 under a server-side key before they
/// touch the database, so a leaked sessions table cannot be replayed.
#[derive(Debug)]
pub struct AuthCrypto {
    token_hmac_key: Zeroizing<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum AuthCryptoError {
    #[error("token HMAC key must not be empty")]
    EmptyTokenKey,
    #[error("random token generation failed: {0}")]
    Rng(String),
}

impl AuthCrypto {
    const TOKEN_BYTES: usize = 32;

    pub fn new(token_hmac_key: impl AsRef<[u8]>) -> Result<Self, AuthCryptoError> {
        let key = token_hmac_key.as_ref();
        if key.is_empty() {
            return Err(AuthCryptoError::EmptyTokenKey);
        }

        Ok(Self {
            token_hmac_key: Zeroizing::new(key.to_vec()),
        })
    }

    /// Hash an opaque bearer token with the configured secret key. The
    /// digest is returned as hex for storage in the database.
    pub fn hash_token(&self, token: &str) -> String {
        type HmacSha256 = Hmac<Sha256>;

        let mut mac = HmacSha256::new_from_slice(&self.token_hmac_key)
            .expect("HMAC-SHA-256 accepts keys of any size");
        mac.update(token.as_bytes());

        let digest = mac.finalize().into_bytes();
        hex::encode(digest)
    }

    /// Fresh 256-bit token, URL-safe base64 without padding.
    pub fn generate_token(&self) -> Result<String, AuthCryptoError> {
        let mut bytes = Zeroizing::new([0u8; Self::TOKEN_BYTES]);
        OsRng
            .try_fill_bytes(&mut bytes[..])
            .map_err(|err| AuthCryptoError::Rng(err.to_string()))?;
        Ok(URL_SAFE_NO_PAD.encode(&bytes[..]))
    }
}
