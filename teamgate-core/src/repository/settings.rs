//! Signup settings source

use crate::domain::SignupSettings;
use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupSettingsRepository: Send + Sync {
    /// Current settings. Callers must not hold on to the result across
    /// requests.
    async fn current(&self) -> Result<SignupSettings>;
}

/// Settings held in memory, typically loaded once from [`crate::Config`]
/// and replaced when an operator changes them.
pub struct StaticSignupSettings {
    settings: RwLock<SignupSettings>,
}

impl StaticSignupSettings {
    pub fn new(settings: SignupSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    pub async fn replace(&self, settings: SignupSettings) {
        *self.settings.write().await = settings;
    }
}

#[async_trait]
impl SignupSettingsRepository for StaticSignupSettings {
    async fn current(&self) -> Result<SignupSettings> {
        Ok(self.settings.read().await.clone())
    }
}
