//! Compact signed session tokens: `header.claims.mac`, each part base64url.
//!
//! The MAC is a keyed BLAKE3 hash over `header.claims`. Clients only decode the
//! claims for display; the server is the one that verifies.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

const HEADER: &str = r#"{"alg":"BLAKE3","typ":"JWT"}"#;

pub const KEY_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub org_id: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have three dot-separated parts")]
    Shape,
    #[error("token is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
    #[error("token has an empty organization id")]
    EmptyOrg,
    #[error("token signature does not match")]
    Signature,
}

pub fn mint(claims: &SessionClaims, key: &[u8; KEY_LEN]) -> Result<String, TokenError> {
    if claims.org_id.trim().is_empty() {
        return Err(TokenError::EmptyOrg);
    }
    let header = URL_SAFE_NO_PAD.encode(HEADER);
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{}.{}", header, body);
    let mac = blake3::keyed_hash(key, signing_input.as_bytes());
    Ok(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(mac.as_bytes())
    ))
}

fn split(token: &str) -> Result<(&str, &str, &str), TokenError> {
    let mut parts = token.trim().split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(c), Some(s), None) if !h.is_empty() && !c.is_empty() => Ok((h, c, s)),
        _ => Err(TokenError::Shape),
    }
}

/// Reads the claims without checking the MAC.
pub fn decode_claims(token: &str) -> Result<SessionClaims, TokenError> {
    let (_, claims, _) = split(token)?;
    let bytes = URL_SAFE_NO_PAD.decode(claims)?;
    let claims: SessionClaims = serde_json::from_slice(&bytes)?;
    if claims.org_id.trim().is_empty() {
        return Err(TokenError::EmptyOrg);
    }
    Ok(claims)
}

pub fn verify(token: &str, key: &[u8; KEY_LEN]) -> Result<SessionClaims, TokenError> {
    let (header, claims, sig) = split(token)?;
    let sig = URL_SAFE_NO_PAD.decode(sig)?;
    let sig: [u8; 32] = sig.try_into().map_err(|_| TokenError::Signature)?;
    let expected = blake3::keyed_hash(key, format!("{}.{}", header, claims).as_bytes());
    // blake3::Hash equality is constant-time.
    if expected != blake3::Hash::from(sig) {
        return Err(TokenError::Signature);
    }
    decode_claims(token)
}

#[cfg(test)]
#[path = "../tests/session/token_tests.rs"]
mod tests;
