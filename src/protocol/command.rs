use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};
use crate::store::FlagStore;

/// A flag operation carried in one request body.
///
/// The request type is the command itself: it is decoded from the JSON
/// body, then executed against the store to produce the response payload.
#[async_trait]
pub trait Command: DeserializeOwned + Send + 'static {
    /// Operation name, also used in error messages
    const NAME: &'static str;

    /// Response payload
    type Response: Serialize + Send + 'static;

    /// Execute the command on the given store
    async fn execute(self, store: &dyn FlagStore) -> Self::Response;
}

/// Decode a request body into a command
///
/// Any shape mismatch (invalid JSON, missing field, wrong type) is a
/// malformed request; the store is never touched in that case.
pub fn decode<C: Command>(body: &[u8]) -> Result<C> {
    serde_json::from_slice(body).map_err(|source| Error::MalformedRequest {
        command: C::NAME,
        source,
    })
}
