use crate::model::settings::BusinessSettings;
use async_trait::async_trait;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Resolves the settings in effect right now. Infallible: unreadable or
    /// malformed values degrade to the built-in defaults.
    async fn resolve(&self) -> BusinessSettings;
}
