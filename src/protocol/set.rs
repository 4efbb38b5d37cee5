use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::protocol::command::Command;
use crate::store::FlagStore;

/// SET command: `{"key": "...", "value": true|false}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SetCmd {
    pub key: String,
    pub value: bool,
}

#[cfg(test)]
impl SetCmd {
    pub fn new(key: impl Into<String>, value: bool) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// `{"success": true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFlagResponse {
    pub success: bool,
}

impl SetFlagResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[async_trait]
impl Command for SetCmd {
    const NAME: &'static str = "set";

    type Response = SetFlagResponse;

    async fn execute(self, store: &dyn FlagStore) -> SetFlagResponse {
        debug!(key = %self.key, value = self.value, "Setting flag");
        store.set_flag(self.key, self.value).await;
        SetFlagResponse::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryFlagStore;

    #[tokio::test]
    async fn test_set_cmd_execute_success() {
        let store = MemoryFlagStore::new();
        let result = SetCmd::new("key", true).execute(&store).await;

        assert_eq!(result, SetFlagResponse::ok());
        assert!(store.get("key"));
    }

    #[tokio::test]
    async fn test_set_cmd_overwrites() {
        let store = MemoryFlagStore::new();
        SetCmd::new("key", true).execute(&store).await;
        let result = SetCmd::new("key", false).execute(&store).await;

        assert!(result.success);
        assert!(!store.get("key"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_response_encoding() {
        let json = serde_json::to_string(&SetFlagResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
