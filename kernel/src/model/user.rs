use crate::model::{id::UserId, role::Role};

/// Read-only projection of a member's profile, owned by the identity
/// collaborator.
#[derive(Debug)]
pub struct UserProfile {
    pub user_id: UserId,
    pub is_active: bool,
    pub role: Role,
}
