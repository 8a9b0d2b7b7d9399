//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::requests::HasPayload;
use teloxide::types::CallbackQuery;
use teloxide::{ApiError, RequestError};
use tracing::{debug, error};

use crate::event::{Dispatch, InboundEvent};
use crate::router::Router;

use super::ui_builder::{keyboard, parse_mode};

/// Handle callback queries from inline keyboards
///
/// The rendered page replaces the message that carried the pressed button.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, router: Arc<Router>) -> Result<()> {
    // Answer first to remove the loading state on the button
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        error!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
    }

    let Some(data) = q.data.clone() else {
        debug!(user_id = %q.from.id, "Callback query without data, ignoring");
        return Ok(());
    };

    let event = InboundEvent::ButtonPress {
        routing_key: data,
        user_id: q.from.id.into(),
    };
    let render = match router.dispatch(event).await {
        Dispatch::Render(render) => render,
        Dispatch::Ignored => return Ok(()),
    };

    let Some(message) = q.message.as_ref() else {
        debug!(user_id = %q.from.id, "Callback query without message, nothing to edit");
        return Ok(());
    };

    let mut request = bot.edit_message_text(message.chat().id, message.id(), render.text);
    request.payload_mut().parse_mode = parse_mode(render.formatting);
    request.payload_mut().reply_markup = keyboard(render.navigation);

    match request.await {
        Ok(_) => debug!(user_id = %q.from.id, "Callback rendered"),
        Err(e) if is_unchanged_page(&e) => debug!(user_id = %q.from.id, "Callback page unchanged"),
        Err(e) => error!(user_id = %q.from.id, error = %e, "Failed to edit message for callback"),
    }

    Ok(())
}

/// Telegram refuses edits that leave the message as it was, e.g. on a double tap
fn is_unchanged_page(error: &RequestError) -> bool {
    matches!(error, RequestError::Api(ApiError::MessageNotModified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_page_is_recognised() {
        assert!(is_unchanged_page(&RequestError::Api(ApiError::MessageNotModified)));
        assert!(!is_unchanged_page(&RequestError::Api(ApiError::BotBlocked)));
        assert!(!is_unchanged_page(&RequestError::Api(ApiError::MessageToEditNotFound)));
    }
}
