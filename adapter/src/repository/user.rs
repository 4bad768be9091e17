use crate::database::{model::user::ProfileRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::UserProfile};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<UserProfile>> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
                SELECT id, is_active, role
                FROM profiles
                WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(UserProfile::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;

    #[sqlx::test]
    async fn find_profile_returns_stored_flags(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let (user_id,): (UserId,) = sqlx::query_as(
            "INSERT INTO profiles (user_name, is_active, role) VALUES ($1, $2, 'admin') RETURNING id",
        )
        .bind("Test Member")
        .bind(false)
        .fetch_one(&pool)
        .await?;

        let profile = repo.find_profile(user_id).await?.unwrap();
        assert_eq!(profile.user_id, user_id);
        assert!(!profile.is_active);
        assert_eq!(profile.role, Role::Admin);

        Ok(())
    }

    #[sqlx::test]
    async fn find_profile_returns_none_for_unknown_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let missing = repo.find_profile(UserId::new()).await?;
        assert!(missing.is_none());

        Ok(())
    }
}
