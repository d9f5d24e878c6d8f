//! Polling runner: converts teloxide messages to core messages and passes
//! them to the handler chain.

use anyhow::Result;
use chrono::Utc;
use flatbot_core::{Chat, Message};
use tracing::{debug, error};

use crate::chain::HandlerChain;

/// Core view of one inbound teloxide message. Non-text messages archive with
/// empty content.
fn to_core_message(msg: &teloxide::types::Message) -> Message {
    Message {
        id: msg.id.to_string(),
        chat: Chat::new(msg.chat.id.0),
        content: msg.text().unwrap_or_default().to_string(),
        created_at: Utc::now(),
    }
}

/// Starts long polling with the given teloxide Bot. Each inbound message is
/// converted to a core [`Message`] and dispatched through the chain in a
/// spawned task so polling keeps draining.
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = to_core_message(&msg);
                debug!(
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "received message"
                );

                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(error = %e, chat_id = core_msg.chat.id, "handler chain failed");
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
