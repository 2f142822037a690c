use crate::CreateMember;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    /// Free text, e.g. "Site Engineer"
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
}

impl Member {
    pub fn new(request: CreateMember) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            role: request.role,
            email: request.email,
        }
    }
}
