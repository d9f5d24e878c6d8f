//! # Handler chain
//!
//! Runs a sequence of handlers over each inbound message. All before() run in
//! order (any false stops the chain); then handle() runs until one returns Stop.

use flatbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs all before() in order, then handle() until Stop.
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(
            chat_id = message.chat.id,
            message_id = %message.id,
            "handler chain started"
        );

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(chat_id = message.chat.id, "chain stopped in before phase");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            if h.handle(message).await? == HandlerResponse::Stop {
                debug!(chat_id = message.chat.id, "chain stopped by handler");
                return Ok(HandlerResponse::Stop);
            }
        }

        Ok(HandlerResponse::Continue)
    }
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

// Unit/integration tests live in tests/chain_test.rs
