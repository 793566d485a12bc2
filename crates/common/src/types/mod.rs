use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
    /// Active storage variant (`relational`, `file` or `read_only`).
    pub backend: String,
}

/// Acknowledgement returned after the document has been stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveAck {
    pub success: bool,
    pub message: String,
}

impl SaveAck {
    pub fn saved() -> Self {
        Self { success: true, message: "data saved".to_string() }
    }
}
