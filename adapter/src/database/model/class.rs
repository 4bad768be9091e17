use kernel::model::{class::Class, id::ClassId};

#[derive(sqlx::FromRow)]
pub struct ClassRow {
    pub id: ClassId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl From<ClassRow> for Class {
    fn from(value: ClassRow) -> Self {
        let ClassRow {
            id,
            name,
            description,
            image_url,
            is_active,
        } = value;
        Self {
            class_id: id,
            name,
            description,
            image_url,
            is_active,
        }
    }
}
