//! Inbound events and outbound render instructions exchanged between the
//! Telegram transport and the routing core.

use serde::{Deserialize, Serialize};
use std::fmt;
use teloxide::types::ChatId;

/// Stable platform identifier of a user, used as a key only
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Private chat with this user; Telegram uses the user id as its chat id
    pub fn chat_id(&self) -> Option<ChatId> {
        self.0.parse().ok().map(ChatId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<teloxide::types::UserId> for UserId {
    fn from(id: teloxide::types::UserId) -> Self {
        Self(id.0.to_string())
    }
}

/// An interaction received from the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// Slash command, `name` without the leading `/`
    Command { name: String, user_id: UserId },
    /// Inline keyboard button carrying an opaque routing key
    ButtonPress { routing_key: String, user_id: UserId },
    /// Free text that is not a command
    TextMessage { body: String, user_id: UserId },
}

impl InboundEvent {
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Command { user_id, .. }
            | Self::ButtonPress { user_id, .. }
            | Self::TextMessage { user_id, .. } => user_id,
        }
    }
}

/// How the text of a render instruction must be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    /// Telegram HTML markup
    Rich,
    Plain,
}

/// Navigation keyboard shown under a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuReference {
    /// No keyboard
    None,
    Main,
    BackToMain,
    Resources,
    Coaching,
    /// Detail page of a coaching level: external link and back to coaching
    CoachingDetail,
    Faq,
    BackToFaq,
    /// Course and seminar pages: payment methods link and back to main
    Payment,
    /// Both ways of obtaining a discount code
    DiscountOptions,
}

/// What the presentation layer should show in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    pub text: String,
    pub formatting: Formatting,
    pub navigation: MenuReference,
}

impl RenderInstruction {
    pub fn rich(text: impl Into<String>, navigation: MenuReference) -> Self {
        Self {
            text: text.into(),
            formatting: Formatting::Rich,
            navigation,
        }
    }

    pub fn plain(text: impl Into<String>, navigation: MenuReference) -> Self {
        Self {
            text: text.into(),
            formatting: Formatting::Plain,
            navigation,
        }
    }
}

/// Outcome of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Render(RenderInstruction),
    /// Nothing to show; the event was not for us
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_from_numeric_user_id() {
        assert_eq!(UserId::from("42").chat_id(), Some(ChatId(42)));
        assert_eq!(UserId::from(teloxide::types::UserId(7)).chat_id(), Some(ChatId(7)));
        assert_eq!(UserId::from("alice").chat_id(), None);
    }
}
