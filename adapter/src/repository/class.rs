use crate::database::{model::class::ClassRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::class::Class;
use kernel::repository::class::ClassRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ClassRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ClassRepository for ClassRepositoryImpl {
    async fn find_active(&self) -> AppResult<Vec<Class>> {
        let rows: Vec<ClassRow> = sqlx::query_as(
            r#"
                SELECT id, name, description, image_url, is_active
                FROM classes
                WHERE is_active = TRUE
                ORDER BY name
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Class::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn find_active_skips_inactive_classes(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ClassRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        sqlx::query("INSERT INTO classes (name, is_active) VALUES ('Yoga', TRUE), ('Spin', FALSE)")
            .execute(&pool)
            .await?;

        let classes = repo.find_active().await?;
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Yoga");

        Ok(())
    }
}
