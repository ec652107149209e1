use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "value::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "value::text")]
    pub email: Option<String>,
    /// Team name, not a reference
    #[serde(default, deserialize_with = "value::text")]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "value::flag")]
    pub is_superhero: bool,
}
