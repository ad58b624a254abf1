//! # Product Client
//!
//! The document-store API the seller screen and the moderation process use. Wraps a
//! `ResourceClient<ProductRecord>` and exposes domain-specific calls.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    ApprovalStatus, NewProduct, ProductFilter, ProductId, ProductRecord, ProductStatus,
    ProductUpdate, UserId,
};
use crate::product_actor::{ModerationAction, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<ProductRecord>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<ProductRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<ProductRecord> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<ProductRecord> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(e) => match e.downcast::<ProductError>() {
                Ok(rejected) => *rejected,
                Err(e) => ProductError::ActorCommunicationError(e.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: NewProduct) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every record owned by `owner`, in creation order.
    #[instrument(skip(self))]
    pub async fn list_for_owner(&self, owner: UserId) -> Result<Vec<ProductRecord>, ProductError> {
        debug!("Sending request");
        self.inner
            .query(ProductFilter::OwnedBy(owner))
            .await
            .map_err(Self::map_error)
    }

    /// Every record in the store.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ProductRecord>, ProductError> {
        debug!("Sending request");
        self.inner
            .query(ProductFilter::All)
            .await
            .map_err(Self::map_error)
    }

    /// Writes the `status` field of one record and returns the stored record.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: ProductId,
        status: ProductStatus,
    ) -> Result<ProductRecord, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id, ProductUpdate::status(status))
            .await
            .map_err(Self::map_error)
    }

    /// Moderation: mark a record approved.
    #[instrument(skip(self))]
    pub async fn approve(&self, id: ProductId) -> Result<ApprovalStatus, ProductError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ModerationAction::Approve)
            .await
            .map_err(Self::map_error)
    }

    /// Moderation: send a record back to review.
    #[instrument(skip(self))]
    pub async fn return_to_pending(&self, id: ProductId) -> Result<ApprovalStatus, ProductError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ModerationAction::ReturnToPending)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_update, MockClient};

    #[tokio::test]
    async fn test_list_for_owner_sends_owner_filter() {
        let (client, mut receiver) = create_mock_client::<ProductRecord>(10);
        let products = ProductClient::new(client);

        let list_task =
            tokio::spawn(async move { products.list_for_owner("seller_a".into()).await });

        let (filter, responder) = crate::framework::mock::expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filter, ProductFilter::OwnedBy("seller_a".into()));

        responder
            .send(Ok(vec![ProductRecord::new("product_1", "seller_a", "Honey", 80.0)]))
            .unwrap();

        let listed = list_task.await.unwrap().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Honey");
    }

    #[tokio::test]
    async fn test_set_status_writes_only_status() {
        let (client, mut receiver) = create_mock_client::<ProductRecord>(10);
        let products = ProductClient::new(client);

        let task = tokio::spawn(async move {
            products
                .set_status("product_1".into(), ProductStatus::Inactive)
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id.as_str(), "product_1");
        assert_eq!(update, ProductUpdate::status(ProductStatus::Inactive));

        let stored = ProductRecord::new("product_1", "seller_a", "Honey", 80.0)
            .with_status(ProductStatus::Inactive);
        responder.send(Ok(stored)).unwrap();

        let result = task.await.unwrap().unwrap();
        assert_eq!(result.status, ProductStatus::Inactive);
    }

    #[tokio::test]
    async fn test_approve_sends_moderation_action() {
        let (client, mut receiver) = create_mock_client::<ProductRecord>(10);
        let products = ProductClient::new(client);

        let task = tokio::spawn(async move { products.approve("product_9".into()).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id.as_str(), "product_9");
        assert_eq!(action, ModerationAction::Approve);
        responder.send(Ok(ApprovalStatus::Approved)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), ApprovalStatus::Approved);
    }

    #[tokio::test]
    async fn test_errors_are_mapped() {
        let mut mock = MockClient::<ProductRecord>::new();
        mock.expect_delete()
            .return_err(FrameworkError::NotFound("product_4".into()));
        mock.expect_get().return_err(FrameworkError::ActorClosed);

        let products = ProductClient::new(mock.client());

        let deleted = products.delete("product_4".into()).await;
        assert_eq!(deleted, Err(ProductError::NotFound("product_4".into())));

        let fetched = products.get("product_4".into()).await;
        assert!(matches!(
            fetched,
            Err(ProductError::ActorCommunicationError(msg)) if msg.contains("Actor closed")
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_store_rejections_keep_their_variant() {
        let mut mock = MockClient::<ProductRecord>::new();
        mock.expect_update()
            .return_err(FrameworkError::EntityError(Box::new(ProductError::EmptyName)));
        mock.expect_action()
            .return_err(FrameworkError::EntityError("disk full".into()));

        let products = ProductClient::new(mock.client());

        let updated = products
            .set_status("product_1".into(), ProductStatus::Active)
            .await;
        assert_eq!(updated, Err(ProductError::EmptyName));

        let approved = products.approve("product_1".into()).await;
        assert!(matches!(
            approved,
            Err(ProductError::ActorCommunicationError(msg)) if msg == "disk full"
        ));

        mock.verify();
    }
}
