use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: String,
    /// Unique within a class; attendance records reference students by login
    pub login: String,
    pub name: String,
    pub class_id: String,
}
