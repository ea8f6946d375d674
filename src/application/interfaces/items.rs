use crate::error::PocketResult;
use crate::model::requests::{AddRequest, RetrieveRequest};
use crate::model::responses::{AddResponse, ModifyResponse, RetrieveResponse};
use crate::presentation::action::Action;
use async_trait::async_trait;

/// Interface for the item endpoints
///
/// Every call sends the consumer key and the stored access token.
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Saves a single URL
    ///
    /// Fails with `InvalidInput` before sending anything when the URL is blank.
    async fn add(&self, request: &AddRequest) -> PocketResult<AddResponse>;

    /// Applies a batch of actions in order
    ///
    /// Fails with `InvalidInput` before sending anything when the batch is
    /// empty or an action misses a required field.
    async fn modify(&self, actions: &[Action]) -> PocketResult<ModifyResponse>;

    /// Retrieves saved items matching the filters
    async fn retrieve(&self, request: &RetrieveRequest) -> PocketResult<RetrieveResponse>;
}
