use crate::application::client::Client;
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::items::ItemService;
use crate::constants::{ADD_PATH, MODIFY_PATH, RETRIEVE_PATH};
use crate::error::{AppError, PocketResult};
use crate::model::requests::{AddRequest, Authenticated, ModifyRequest, RetrieveRequest};
use crate::model::responses::{AddResponse, ModifyResponse, RetrieveResponse};
use crate::presentation::action::Action;
use async_trait::async_trait;
use tracing::{debug, info, warn};

#[async_trait]
impl ItemService for Client {
    async fn add(&self, request: &AddRequest) -> PocketResult<AddResponse> {
        request.validate()?;
        info!("Adding item: {}", request.url);

        let access_token = self.access_token().await;
        let body = Authenticated {
            body: request,
            consumer_key: self.consumer_key(),
            access_token: &access_token,
        };
        let response: AddResponse = self.post(ADD_PATH, &body).await?;

        debug!("Item added with id: {}", response.item.item_id);
        Ok(response)
    }

    async fn modify(&self, actions: &[Action]) -> PocketResult<ModifyResponse> {
        if actions.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one action is required".to_string(),
            ));
        }
        for action in actions {
            action.validate()?;
        }
        info!("Sending {} actions", actions.len());

        let access_token = self.access_token().await;
        let modify = ModifyRequest { actions };
        let body = Authenticated {
            body: &modify,
            consumer_key: self.consumer_key(),
            access_token: &access_token,
        };
        let response: ModifyResponse = self.post(MODIFY_PATH, &body).await?;

        for (index, err) in response.failed_actions() {
            warn!(
                "Action {} ({}) failed: {}",
                index,
                actions
                    .get(index)
                    .map(|a| a.action_type().as_str())
                    .unwrap_or("unknown"),
                err.message
            );
        }
        Ok(response)
    }

    async fn retrieve(&self, request: &RetrieveRequest) -> PocketResult<RetrieveResponse> {
        debug!("Retrieving items: {}", request);

        let access_token = self.access_token().await;
        let body = Authenticated {
            body: request,
            consumer_key: self.consumer_key(),
            access_token: &access_token,
        };
        let response: RetrieveResponse = self.post(RETRIEVE_PATH, &body).await?;

        debug!("Retrieved {} items", response.list.len());
        Ok(response)
    }
}
