use kernel::model::{id::UserId, role::Role, user::UserProfile};

#[derive(sqlx::FromRow)]
pub struct ProfileRow {
    pub id: UserId,
    pub is_active: bool,
    pub role: Role,
}

impl From<ProfileRow> for UserProfile {
    fn from(value: ProfileRow) -> Self {
        let ProfileRow {
            id,
            is_active,
            role,
        } = value;
        Self {
            user_id: id,
            is_active,
            role,
        }
    }
}
