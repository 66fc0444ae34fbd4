use std::fmt;
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserData {
    pub fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Extends the record with the identifier the service assigned to it.
    pub fn with_id(self, id: String) -> CreatedUser {
        CreatedUser { data: self, id }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedUser {
    pub data: UserData,
    pub id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}
