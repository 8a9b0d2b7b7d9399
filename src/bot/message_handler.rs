//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::requests::HasPayload;
use tracing::debug;

use crate::event::{Dispatch, InboundEvent, UserId};
use crate::router::Router;

use super::ui_builder::{keyboard, parse_mode};

/// Split `/name@bot args` into `name`; `None` for text that is not a command
pub fn command_name(text: &str) -> Option<&str> {
    let first = text.trim_start().strip_prefix('/')?.split_whitespace().next()?;
    let name = first.split('@').next().unwrap_or(first);
    (!name.is_empty()).then_some(name)
}

/// Convert a text message into an inbound event
pub fn inbound_event(text: &str, user_id: UserId) -> InboundEvent {
    match command_name(text) {
        Some(name) => InboundEvent::Command {
            name: name.to_string(),
            user_id,
        },
        None => InboundEvent::TextMessage {
            body: text.to_string(),
            user_id,
        },
    }
}

pub async fn message_handler(bot: Bot, msg: Message, router: Arc<Router>) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Received non-text message, ignoring");
        return Ok(());
    };
    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = %msg.chat.id, "Received message without sender, ignoring");
        return Ok(());
    };

    debug!(user_id = %user.id, message_length = text.len(), "Received text message from user");

    let event = inbound_event(text, user.id.into());
    let render = match router.dispatch(event).await {
        Dispatch::Render(render) => render,
        Dispatch::Ignored => return Ok(()),
    };

    let mut request = bot.send_message(msg.chat.id, render.text);
    request.payload_mut().parse_mode = parse_mode(render.formatting);
    request.payload_mut().reply_markup = keyboard(render.navigation).map(Into::into);
    request.await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_extraction() {
        assert_eq!(command_name("/start"), Some("start"));
        assert_eq!(command_name("/code@SeshatBot"), Some("code"));
        assert_eq!(command_name("  /faq please"), Some("faq"));
        assert_eq!(command_name("a@b.co"), None);
        assert_eq!(command_name("/"), None);
        assert_eq!(command_name("/@bot"), None);
    }

    #[test]
    fn test_text_becomes_text_message() {
        let event = inbound_event("a@b.co", UserId::from("42"));
        assert_eq!(
            event,
            InboundEvent::TextMessage {
                body: "a@b.co".to_string(),
                user_id: UserId::from("42"),
            }
        );
    }
}
