//! # Identity Provider
//!
//! Publishes the signed-in seller (or `None`) and notifies subscribers on every change.
//!
//! Backed by a [`tokio::sync::watch`] channel: a subscriber always sees the latest
//! identity, and rapid successive changes may be observed as one. An
//! [`IdentitySubscription`] is a scoped resource; dropping it unsubscribes.

use tokio::sync::watch;
use tracing::{debug, info};

use crate::model::Identity;

/// Source of truth for "who is signed in".
#[derive(Debug)]
pub struct IdentityProvider {
    sender: watch::Sender<Option<Identity>>,
}

impl Default for IdentityProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdentityProvider {
    pub fn new(initial: Option<Identity>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// The identity right now.
    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    /// Signs `identity` in, replacing whoever was signed in before.
    pub fn sign_in(&self, identity: Identity) {
        info!(uid = %identity.uid, "Signed in");
        self.sender.send_replace(Some(identity));
    }

    pub fn sign_out(&self) {
        if let Some(previous) = self.sender.send_replace(None) {
            info!(uid = %previous.uid, "Signed out");
        }
    }

    /// Starts listening for changes.
    pub fn subscribe(&self) -> IdentitySubscription {
        debug!(subscribers = self.sender.receiver_count() + 1, "Subscribed");
        IdentitySubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live listener on an [`IdentityProvider`].
#[derive(Debug)]
pub struct IdentitySubscription {
    receiver: watch::Receiver<Option<Identity>>,
}

impl IdentitySubscription {
    /// The identity as last seen, marking it observed.
    pub fn current(&mut self) -> Option<Identity> {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next change.
    ///
    /// Returns `None` once the provider has been dropped.
    pub async fn changed(&mut self) -> Option<Option<Identity>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

impl Drop for IdentitySubscription {
    fn drop(&mut self) {
        debug!("Unsubscribed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscription_sees_changes() {
        let provider = IdentityProvider::default();
        let mut subscription = provider.subscribe();
        assert_eq!(subscription.current(), None);

        provider.sign_in(Identity::new("seller_a"));
        assert_eq!(
            subscription.changed().await,
            Some(Some(Identity::new("seller_a")))
        );

        provider.sign_out();
        assert_eq!(subscription.changed().await, Some(None));
    }

    #[tokio::test]
    async fn test_drop_unsubscribes() {
        let provider = IdentityProvider::new(Some(Identity::new("seller_a")));
        let first = provider.subscribe();
        let second = provider.subscribe();
        assert_eq!(provider.subscriber_count(), 2);

        drop(first);
        assert_eq!(provider.subscriber_count(), 1);
        drop(second);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_changed_ends_when_provider_dropped() {
        let provider = IdentityProvider::default();
        let mut subscription = provider.subscribe();
        drop(provider);
        assert_eq!(subscription.changed().await, None);
    }

    #[test]
    fn test_sign_out_when_signed_out_is_harmless() {
        let provider = IdentityProvider::default();
        provider.sign_out();
        assert_eq!(provider.current(), None);
    }
}
