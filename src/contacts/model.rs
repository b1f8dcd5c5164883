use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub contact_type: String,
}
