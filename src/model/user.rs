use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for creating or replacing a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, name: String, email: String) -> User {
        User { id, name, email }
    }
}
