use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Instructor,
    Student,
}

impl Role {
    /// Roles allowed into the admin console. Anything else is bounced to
    /// the login screen by the app shell.
    pub fn is_admin_role(self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }
}
