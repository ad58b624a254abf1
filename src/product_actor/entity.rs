//! [`ActorEntity`] implementation for [`ProductRecord`].
//!
//! Creation validates the payload and starts every record `Active` and `Pending`.
//! Updates only touch `status`; approval changes go through [`ModerationAction`].

use async_trait::async_trait;

use super::actions::ModerationAction;
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{
    ApprovalStatus, NewProduct, ProductFilter, ProductId, ProductRecord, ProductStatus,
    ProductUpdate,
};

#[async_trait]
impl ActorEntity for ProductRecord {
    type Id = ProductId;
    type Create = NewProduct;
    type Update = ProductUpdate;
    type Filter = ProductFilter;
    type Action = ModerationAction;
    type ActionResult = ApprovalStatus;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: NewProduct) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if !params.price.is_finite() || params.price < 0.0 {
            return Err(ProductError::InvalidPrice(params.price));
        }
        Ok(Self {
            id,
            owner_id: params.owner_id,
            name: params.name,
            price: params.price,
            status: ProductStatus::Active,
            approval_status: ApprovalStatus::Pending,
        })
    }

    fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::All => true,
            ProductFilter::OwnedBy(owner) => &self.owner_id == owner,
        }
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ModerationAction,
        _ctx: &(),
    ) -> Result<ApprovalStatus, Self::Error> {
        self.approval_status = match action {
            ModerationAction::Approve => ApprovalStatus::Approved,
            ModerationAction::ReturnToPending => ApprovalStatus::Pending,
        };
        Ok(self.approval_status)
    }
}
