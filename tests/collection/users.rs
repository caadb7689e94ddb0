use jsondb::Keyed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Keyed)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn new(id: i32, name: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            age,
        }
    }
}
