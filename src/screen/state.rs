//! What the screen currently shows.
//!
//! [`ProductList`] is the client-side cache keyed by product id. A refetch replaces it
//! wholesale; toggles and deletes patch single entries after the store confirmed them.

use crate::links::LinkKind;
use crate::model::{ProductId, ProductRecord, ProductStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A full-list fetch is outstanding.
    Loading,
    /// Nobody is signed in.
    SignedOut,
    /// The list is on screen.
    Ready,
}

/// Records in display order, at most one per id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductList {
    records: Vec<ProductRecord>,
}

impl ProductList {
    /// Replaces the whole list. Later duplicates of an id are dropped.
    pub fn replace(&mut self, records: Vec<ProductRecord>) {
        self.records.clear();
        for record in records {
            if self.position(&record.id).is_none() {
                self.records.push(record);
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Returns false when `id` is not in the list.
    pub fn set_status(&mut self, id: &ProductId, status: ProductStatus) -> bool {
        match self.records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ProductId) -> Option<ProductRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.records.iter().map(|record| record.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }
}

/// One open "link copied" confirmation window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedLink {
    pub id: ProductId,
    epoch: u64,
}

/// Confirmation windows, tracked independently per link kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopiedLinks {
    product: Option<CopiedLink>,
    checkout: Option<CopiedLink>,
    next_epoch: u64,
}

impl CopiedLinks {
    /// Opens a window for `id`, replacing any open window of the same kind.
    /// Returns the epoch that [`expire`](Self::expire) must be called with.
    pub fn mark(&mut self, kind: LinkKind, id: ProductId) -> u64 {
        self.next_epoch += 1;
        let epoch = self.next_epoch;
        *self.slot_mut(kind) = Some(CopiedLink { id, epoch });
        epoch
    }

    /// Closes the window opened at `epoch`. A newer window of the same kind stays open.
    pub fn expire(&mut self, kind: LinkKind, epoch: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|copied| copied.epoch == epoch) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn get(&self, kind: LinkKind) -> Option<&ProductId> {
        self.slot(kind).as_ref().map(|copied| &copied.id)
    }

    pub fn is_copied(&self, kind: LinkKind, id: &ProductId) -> bool {
        self.get(kind) == Some(id)
    }

    pub fn clear(&mut self) {
        self.product = None;
        self.checkout = None;
    }

    fn slot(&self, kind: LinkKind) -> &Option<CopiedLink> {
        match kind {
            LinkKind::Product => &self.product,
            LinkKind::Checkout => &self.checkout,
        }
    }

    fn slot_mut(&mut self, kind: LinkKind) -> &mut Option<CopiedLink> {
        match kind {
            LinkKind::Product => &mut self.product,
            LinkKind::Checkout => &mut self.checkout,
        }
    }
}

/// Snapshot published by the screen after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub phase: Phase,
    pub products: ProductList,
    pub copied: CopiedLinks,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            products: ProductList::default(),
            copied: CopiedLinks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> ProductRecord {
        ProductRecord::new(id, "seller_a", name, 10.0)
    }

    #[test]
    fn test_replace_is_wholesale_and_keyed_by_id() {
        let mut list = ProductList::default();
        list.replace(vec![record("p1", "old")]);
        list.replace(vec![
            record("p2", "b"),
            record("p3", "c"),
            record("p2", "dup"),
        ]);

        assert_eq!(
            list.ids(),
            vec![ProductId::from("p2"), ProductId::from("p3")]
        );
        assert_eq!(list.get(&"p2".into()).map(|r| r.name.as_str()), Some("b"));
        assert!(list.get(&"p1".into()).is_none());
    }

    #[test]
    fn test_remove_takes_exactly_one() {
        let mut list = ProductList::default();
        list.replace(vec![
            record("p1", "a"),
            record("p2", "b"),
            record("p3", "c"),
        ]);

        let removed = list.remove(&"p2".into()).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(
            list.ids(),
            vec![ProductId::from("p1"), ProductId::from("p3")]
        );
        assert!(list.remove(&"p2".into()).is_none());
    }

    #[test]
    fn test_set_status_on_missing_id() {
        let mut list = ProductList::default();
        list.replace(vec![record("p1", "a")]);
        assert!(list.set_status(&"p1".into(), ProductStatus::Inactive));
        assert!(!list.set_status(&"p9".into(), ProductStatus::Inactive));
        assert_eq!(
            list.get(&"p1".into()).unwrap().status,
            ProductStatus::Inactive
        );
    }

    #[test]
    fn test_copied_windows_are_independent_per_kind() {
        let mut copied = CopiedLinks::default();
        let product_epoch = copied.mark(LinkKind::Product, "p1".into());
        let checkout_epoch = copied.mark(LinkKind::Checkout, "p2".into());

        assert!(copied.is_copied(LinkKind::Product, &"p1".into()));
        assert!(copied.is_copied(LinkKind::Checkout, &"p2".into()));

        assert!(copied.expire(LinkKind::Product, product_epoch));
        assert_eq!(copied.get(LinkKind::Product), None);
        assert!(copied.is_copied(LinkKind::Checkout, &"p2".into()));

        assert!(copied.expire(LinkKind::Checkout, checkout_epoch));
        assert_eq!(copied.get(LinkKind::Checkout), None);
    }

    #[test]
    fn test_stale_expiry_keeps_newer_window() {
        let mut copied = CopiedLinks::default();
        let first = copied.mark(LinkKind::Checkout, "p1".into());
        let second = copied.mark(LinkKind::Checkout, "p2".into());

        assert!(!copied.expire(LinkKind::Checkout, first));
        assert!(copied.is_copied(LinkKind::Checkout, &"p2".into()));
        assert!(copied.expire(LinkKind::Checkout, second));
    }
}
