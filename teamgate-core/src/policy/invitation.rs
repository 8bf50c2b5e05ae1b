//! Signed invitation tokens.
//!
//! A token is the flat JSON payload plus a hex HMAC-SHA256 of it keyed by the
//! server's invite salt. Everything here is pure in (token, secret, now).

use crate::domain::{InvitationPayload, SignupRequest, SignupSettings};
use crate::error::{AppError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How long an invitation link stays valid after it was issued (24h)
pub const INVITATION_VALIDITY_MS: i64 = 86_400_000;

/// Payload and signature ready to be placed in a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedInvitation {
    pub payload: String,
    pub signature: String,
}

/// Hex encoded HMAC-SHA256 of `payload` keyed by `secret`.
pub fn sign(payload: &str, secret: &str) -> String {
    // HMAC accepts keys of any length
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return String::new(),
    };
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time check of a hex signature. An empty secret verifies nothing.
pub fn verify_signature(payload: &str, signature: &str, secret: &str) -> bool {
    if secret.is_empty() {
        return false;
    }

    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

/// Validate a raw token and return its parsed payload.
///
/// Fails with [`AppError::SignupLinkInvalid`] when the token is missing, the
/// signature does not match, the payload is malformed or was issued in the
/// future, and with [`AppError::SignupLinkExpired`] once it is older than
/// [`INVITATION_VALIDITY_MS`].
pub fn validate_token(
    payload: &str,
    signature: &str,
    secret: &str,
    now_ms: i64,
) -> Result<InvitationPayload> {
    if payload.is_empty() || signature.is_empty() {
        return Err(AppError::SignupLinkInvalid);
    }

    if !verify_signature(payload, signature, secret) {
        return Err(AppError::SignupLinkInvalid);
    }

    let parsed = InvitationPayload::from_json(payload)?;

    let age = now_ms.saturating_sub(parsed.time_ms);
    if age < 0 {
        return Err(AppError::SignupLinkInvalid);
    }
    if age > INVITATION_VALIDITY_MS {
        return Err(AppError::SignupLinkExpired);
    }

    Ok(parsed)
}

/// Enforce the email domain allow-list. An empty list allows every address.
pub fn check_accepted_domain(email: &str, settings: &SignupSettings) -> Result<()> {
    let allowed = settings.allowed_domains();
    if allowed.is_empty() {
        return Ok(());
    }

    let domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.trim().to_lowercase());

    match domain {
        Some(domain) if allowed.iter().any(|d| *d == domain) => Ok(()),
        _ => Err(AppError::AcceptedDomain(allowed.join(", "))),
    }
}

/// Fails with [`AppError::NotImplemented`] unless signup is switched on.
pub fn ensure_signup_enabled(settings: &SignupSettings) -> Result<()> {
    if settings.signup_enabled() {
        Ok(())
    } else {
        Err(AppError::NotImplemented(
            "User sign-up with email is disabled".to_string(),
        ))
    }
}

/// Check a signed link without touching the team store: feature gate first,
/// then the token, then the email domain.
pub fn verify_request(
    request: &SignupRequest,
    settings: &SignupSettings,
    now_ms: i64,
) -> Result<InvitationPayload> {
    ensure_signup_enabled(settings)?;

    let payload = validate_token(
        request.payload.as_deref().unwrap_or_default(),
        request.signature.as_deref().unwrap_or_default(),
        &settings.invite_salt,
        now_ms,
    )?;
    check_accepted_domain(&payload.email, settings)?;

    Ok(payload)
}

/// Serialize and sign a payload.
pub fn issue(payload: &InvitationPayload, secret: &str) -> SignedInvitation {
    let payload = payload.to_json();
    let signature = sign(&payload, secret);
    SignedInvitation { payload, signature }
}
