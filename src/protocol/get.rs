use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::protocol::command::Command;
use crate::store::FlagStore;

/// GET command: `{"key": "..."}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetCmd {
    pub key: String,
}

#[cfg(test)]
impl GetCmd {
    /// Create a new GET command
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// `{"value": true|false}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFlagResponse {
    pub value: bool,
}

#[async_trait]
impl Command for GetCmd {
    const NAME: &'static str = "get";

    type Response = GetFlagResponse;

    async fn execute(self, store: &dyn FlagStore) -> GetFlagResponse {
        GetFlagResponse {
            value: store.get_flag(&self.key).await,
        }
    }
}
