use kernel::model::{class::Class, id::ClassId};
use serde::Serialize;

#[derive(Serialize)]
pub struct ClassesResponse {
    pub items: Vec<ClassResponse>,
}

impl From<Vec<Class>> for ClassesResponse {
    fn from(value: Vec<Class>) -> Self {
        Self {
            items: value.into_iter().map(ClassResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ClassResponse {
    pub id: ClassId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl From<Class> for ClassResponse {
    fn from(value: Class) -> Self {
        let Class {
            class_id,
            name,
            description,
            image_url,
            is_active,
        } = value;
        Self {
            id: class_id,
            name,
            description,
            image_url,
            is_active,
        }
    }
}
