use crate::database::{model::settings::SettingRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::settings::BusinessSettings;
use kernel::repository::settings::SettingsRepository;

#[derive(new)]
pub struct SettingsRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SettingsRepository for SettingsRepositoryImpl {
    async fn resolve(&self) -> BusinessSettings {
        let rows: Result<Vec<SettingRow>, sqlx::Error> =
            sqlx::query_as("SELECT key, value FROM app_settings")
                .fetch_all(self.db.inner_ref())
                .await;

        match rows {
            Ok(rows) => BusinessSettings::from_entries(
                rows.iter().map(|row| (row.key.as_str(), row.value.as_str())),
            ),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    "failed to load app settings, falling back to defaults"
                );
                BusinessSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn resolve_uses_defaults_for_empty_store(pool: sqlx::PgPool) {
        let repo = SettingsRepositoryImpl::new(ConnectionPool::new(pool));

        let settings = repo.resolve().await;
        assert_eq!(settings, BusinessSettings::default());
    }

    #[sqlx::test]
    async fn resolve_reads_stored_values(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SettingsRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        sqlx::query(
            "INSERT INTO app_settings (key, value)
             VALUES ('min_hours_advance', '24'), ('max_active_reservations', '2')",
        )
        .execute(&pool)
        .await?;

        let settings = repo.resolve().await;
        assert_eq!(settings.min_hours_advance, 24);
        assert_eq!(settings.max_active_reservations, 2);

        Ok(())
    }

    #[sqlx::test]
    async fn resolve_keeps_defaults_for_malformed_values(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SettingsRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        sqlx::query("INSERT INTO app_settings (key, value) VALUES ('min_hours_advance', 'soon')")
            .execute(&pool)
            .await?;

        let settings = repo.resolve().await;
        assert_eq!(settings, BusinessSettings::default());

        Ok(())
    }
}
