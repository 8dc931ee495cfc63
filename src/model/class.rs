use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroupDto {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Cached by the backend, may lag behind the real roster size
    #[serde(default)]
    pub student_count: Option<u32>,
}
