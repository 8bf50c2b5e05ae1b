//! Signup policy settings

use serde::Deserialize;

/// Snapshot of the server settings that govern signup.
///
/// Read fresh for every validation so runtime changes to the secret, the
/// feature switches or the allow-list take effect on the next request.
#[derive(Clone, Deserialize)]
pub struct SignupSettings {
    pub enable_sign_up_with_email: bool,
    pub enable_user_creation: bool,
    /// Secret keying invitation link signatures
    pub invite_salt: String,
    /// Comma and/or whitespace separated email domains; empty allows all
    #[serde(default)]
    pub restrict_creation_to_domains: String,
}

impl SignupSettings {
    /// Both switches must be on for any signup to proceed
    pub fn signup_enabled(&self) -> bool {
        self.enable_sign_up_with_email && self.enable_user_creation
    }

    /// Normalized allow-list: lowercased, `@` prefixes stripped, blanks dropped
    pub fn allowed_domains(&self) -> Vec<String> {
        self.restrict_creation_to_domains
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(|d| d.trim().trim_start_matches('@').to_lowercase())
            .filter(|d| !d.is_empty())
            .collect()
    }
}

impl Default for SignupSettings {
    fn default() -> Self {
        Self {
            enable_sign_up_with_email: true,
            enable_user_creation: true,
            invite_salt: String::new(),
            restrict_creation_to_domains: String::new(),
        }
    }
}

impl std::fmt::Debug for SignupSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupSettings")
            .field("enable_sign_up_with_email", &self.enable_sign_up_with_email)
            .field("enable_user_creation", &self.enable_user_creation)
            .field("invite_salt", &"[REDACTED]")
            .field(
                "restrict_creation_to_domains",
                &self.restrict_creation_to_domains,
            )
            .finish()
    }
}
