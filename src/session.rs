//! Session state module for tracking which multi-step flow each user is in.

use regex::Regex;
use std::sync::{Arc, LazyLock};
use teloxide::dispatching::dialogue::{InMemStorage, Storage};
use tracing::{debug, warn};

use crate::event::UserId;

/// Multi-step flow a user is currently in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowTag {
    /// The next text message is expected to be an email address
    AwaitingEmail,
}

/// Dialogue storage holding the active flow of each private chat
pub type FlowStorage = InMemStorage<FlowTag>;

/// Active flows, keyed by the user's private chat
///
/// Lost on restart; a user who was mid-flow simply starts again.
pub struct SessionTracker {
    storage: Arc<FlowStorage>,
}

impl Default for SessionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::with_storage(InMemStorage::new())
    }

    pub fn with_storage(storage: Arc<FlowStorage>) -> Self {
        Self { storage }
    }

    /// Set the active flow for `user_id`, replacing any previous one
    pub async fn begin_flow(&self, user_id: &UserId, tag: FlowTag) {
        let Some(chat_id) = user_id.chat_id() else {
            warn!(user_id = %user_id, "Cannot track a flow for a non-numeric user id");
            return;
        };
        match Arc::clone(&self.storage).update_dialogue(chat_id, tag).await {
            Ok(()) => debug!(user_id = %user_id, flow = ?tag, "Flow started"),
            Err(e) => warn!(user_id = %user_id, error = %e, "Failed to store flow"),
        }
    }

    pub async fn current_flow(&self, user_id: &UserId) -> Option<FlowTag> {
        let chat_id = user_id.chat_id()?;
        match Arc::clone(&self.storage).get_dialogue(chat_id).await {
            Ok(tag) => tag,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to read flow");
                None
            }
        }
    }

    /// Clear the active flow for `user_id`; no-op if there is none
    pub async fn end_flow(&self, user_id: &UserId) {
        let Some(chat_id) = user_id.chat_id() else {
            return;
        };
        // Removing an absent dialogue reports an error, which is the no-op case
        if Arc::clone(&self.storage).remove_dialogue(chat_id).await.is_ok() {
            debug!(user_id = %user_id, "Flow ended");
        }
    }
}

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email shape pattern is valid")
});

/// Syntactic email check: `local@domain.tld` without whitespace
///
/// This is not an RFC 5322 validation and says nothing about deliverability.
pub fn is_email_shaped(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        // Valid shapes
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("  prenom.nom@academie.sapience.org \n"));
        assert!(is_email_shaped("x+tag@sub.domain.io"));

        // Invalid shapes
        assert!(!is_email_shaped("not-an-email"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a b@c.d"));
        assert!(!is_email_shaped("a@@b.co"));
        assert!(!is_email_shaped("@b.co"));
        assert!(!is_email_shaped(""));
    }

    #[tokio::test]
    async fn test_flow_lifecycle() {
        let sessions = SessionTracker::new();
        let user = UserId::from("42");

        assert_eq!(sessions.current_flow(&user).await, None);
        sessions.begin_flow(&user, FlowTag::AwaitingEmail).await;
        assert_eq!(sessions.current_flow(&user).await, Some(FlowTag::AwaitingEmail));

        sessions.end_flow(&user).await;
        assert_eq!(sessions.current_flow(&user).await, None);

        // Ending twice is harmless
        sessions.end_flow(&user).await;
        assert_eq!(sessions.current_flow(&user).await, None);
    }

    #[tokio::test]
    async fn test_flows_are_per_user() {
        let sessions = SessionTracker::new();
        sessions.begin_flow(&UserId::from("42"), FlowTag::AwaitingEmail).await;
        assert_eq!(sessions.current_flow(&UserId::from("7")).await, None);
        assert_eq!(
            sessions.current_flow(&UserId::from("42")).await,
            Some(FlowTag::AwaitingEmail)
        );
    }

    #[tokio::test]
    async fn test_flows_live_in_shared_dialogue_storage() {
        let storage = InMemStorage::new();
        let sessions = SessionTracker::with_storage(Arc::clone(&storage));
        sessions.begin_flow(&UserId::from("42"), FlowTag::AwaitingEmail).await;

        let stored = Arc::clone(&storage)
            .get_dialogue(teloxide::types::ChatId(42))
            .await
            .unwrap();
        assert_eq!(stored, Some(FlowTag::AwaitingEmail));
    }

    #[tokio::test]
    async fn test_non_numeric_user_has_no_flow() {
        let sessions = SessionTracker::new();
        let user = UserId::from("alice");
        sessions.begin_flow(&user, FlowTag::AwaitingEmail).await;
        assert_eq!(sessions.current_flow(&user).await, None);
    }
}
