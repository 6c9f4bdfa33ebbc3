use serde::{Deserialize, Serialize};

/// Ответ на команды start / cancel / delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportActionResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl ImportActionResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}
