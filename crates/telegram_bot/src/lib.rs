//! Telegram bot.
//!
//! The bot is a thin front end: it parses commands, calls the expense
//! engine and renders replies. All persistent state lives in the engine,
//! whose handle is injected at build time.

use std::sync::Arc;

use engine::Engine;
use teloxide::prelude::*;

pub use parsing::Limits;

mod commands;
mod handlers;
mod parsing;
mod ui;

#[derive(Clone)]
pub struct ConfigParameters {
    engine: Arc<Engine>,
    limits: Limits,
}

pub struct Bot {
    token: String,
    engine: Arc<Engine>,
    limits: Limits,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);

        let parameters = ConfigParameters {
            engine: Arc::clone(&self.engine),
            limits: self.limits,
        };

        let handler = Update::filter_message().branch(
            dptree::entry()
                .filter_command::<commands::Command>()
                .endpoint(handlers::handle_command),
        );

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default)]
pub struct BotBuilder {
    token: String,
    engine: Option<Arc<Engine>>,
    limits: Limits,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn engine(mut self, engine: Arc<Engine>) -> BotBuilder {
        self.engine = Some(engine);
        self
    }

    pub fn limits(mut self, limits: Limits) -> BotBuilder {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");

        if self.token.is_empty() {
            return Err("missing bot token".to_string());
        }
        let engine = self
            .engine
            .ok_or_else(|| "missing engine handle".to_string())?;

        Ok(Bot {
            token: self.token,
            engine,
            limits: self.limits,
        })
    }
}
