use serde::{Deserialize, Serialize};

use crate::model::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub age: u32,
    pub sex: Sex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisitor {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
}

impl Visitor {
    pub fn create(id: u64, fields: NewVisitor) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            sex: fields.sex,
        }
    }
}

impl Model for Visitor {
    const COLLECTION: &'static str = "visitors";

    fn key(&self) -> String {
        self.id.to_string()
    }
}
