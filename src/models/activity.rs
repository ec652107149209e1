use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{self, value_number, value_text};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Activity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "type", default, deserialize_with = "value::text")]
    pub activity_type: Option<String>,
    /// Name or id of the user who logged the activity
    #[serde(default, deserialize_with = "value::text")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
}

impl Activity {
    pub fn duration_minutes(&self) -> Option<f64> {
        self.duration.as_ref().and_then(value_number)
    }

    pub fn duration_text(&self) -> String {
        self.duration.as_ref().map(value_text).unwrap_or_default()
    }
}
