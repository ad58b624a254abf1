use serde::{Deserialize, Serialize};

use std::fmt::Display;

use crate::model::UserId;

/// Store-assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for ProductId {
    fn from(seq: u32) -> Self {
        Self(format!("product_{}", seq))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seller-controlled visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

impl Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => f.write_str("Active"),
            Self::Inactive => f.write_str("Inactive"),
        }
    }
}

/// Moderation state, owned by the external moderation process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    Pending,
}

impl Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => f.write_str("Approved"),
            Self::Pending => f.write_str("Pending"),
        }
    }
}

/// A product listed by a seller.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// so the document store is a [`ResourceActor`](crate::framework::ResourceActor) of
/// `ProductRecord`s.
///
/// See [`impl ActorEntity for ProductRecord`](#impl-ActorEntity-for-ProductRecord) for:
/// - Creation parameters ([`NewProduct`])
/// - Update parameters ([`ProductUpdate`])
/// - Query filter ([`ProductFilter`])
/// - Moderation actions ([`ModerationAction`](crate::product_actor::ModerationAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub owner_id: UserId,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
    pub approval_status: ApprovalStatus,
}

impl ProductRecord {
    /// Creates a record as the store would hold it.
    ///
    /// # Arguments
    /// * `id` - Store-assigned identifier
    /// * `owner_id` - The seller who owns the record
    /// * `name` - Display name
    /// * `price` - Price in the seller's currency
    pub fn new(
        id: impl Into<ProductId>,
        owner_id: impl Into<UserId>,
        name: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name: name.into(),
            price,
            status: ProductStatus::Active,
            approval_status: ApprovalStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_approval(mut self, approval_status: ApprovalStatus) -> Self {
        self.approval_status = approval_status;
        self
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub owner_id: UserId,
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(owner_id: impl Into<UserId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            owner_id: owner_id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Single-field update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub status: Option<ProductStatus>,
}

impl ProductUpdate {
    pub fn status(status: ProductStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

/// Selects records for a store query.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    All,
    OwnedBy(UserId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        for status in [ProductStatus::Active, ProductStatus::Inactive] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_store_assigned_ids() {
        assert_eq!(ProductId::from(7).as_str(), "product_7");
        assert_eq!(ProductId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_record_document_shape() {
        let record = ProductRecord::new("product_1", "seller_a", "Maize flour", 350.0)
            .with_approval(ApprovalStatus::Approved);

        let doc = serde_json::to_value(&record).unwrap();
        assert_eq!(doc["id"], "product_1");
        assert_eq!(doc["ownerId"], "seller_a");
        assert_eq!(doc["status"], "Active");
        assert_eq!(doc["approvalStatus"], "Approved");

        let back: ProductRecord = serde_json::from_value(doc).unwrap();
        assert_eq!(back, record);
    }
}
