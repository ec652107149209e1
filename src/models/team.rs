use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Team {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "value::text")]
    pub name: Option<String>,
}
