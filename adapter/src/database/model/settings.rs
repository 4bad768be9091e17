#[derive(sqlx::FromRow)]
pub struct SettingRow {
    pub key: String,
    pub value: String,
}
