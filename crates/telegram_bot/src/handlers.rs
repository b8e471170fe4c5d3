//! Command endpoints: interpreter -> store -> rendered reply.
//!
//! Storage failures are logged and turned into a generic retry message; a
//! failed command never takes the dispatcher down.

use chrono::{Datelike, Utc};
use teloxide::{
    payloads::SendMessageSetters,
    prelude::*,
    types::{ChatId, ParseMode},
};

use crate::{ConfigParameters, commands::Command, parsing, ui};

pub(crate) async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    cfg: ConfigParameters,
) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        bot.send_message(msg.chat.id, "Could not identify the user.")
            .await?;
        return Ok(());
    };
    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => {
            tracing::info!(user_id, "new user started the bot");
            bot.send_message(chat_id, ui::welcome_text()).await?;
        }
        Command::Help => {
            bot.send_message(chat_id, ui::help_text())
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Command::Add { input } => handle_add(&bot, chat_id, user_id, &input, &cfg).await?,
        Command::List => handle_list(&bot, chat_id, user_id, &cfg).await?,
        Command::Summary => handle_summary(&bot, chat_id, user_id, &cfg).await?,
    }

    Ok(())
}

async fn handle_add(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    input: &str,
    cfg: &ConfigParameters,
) -> ResponseResult<()> {
    let expense = match parsing::parse_add(input, &cfg.limits) {
        Ok(expense) => expense,
        Err(error) => {
            bot.send_message(chat_id, ui::render_parse_error(&error))
                .await?;
            return Ok(());
        }
    };

    match cfg
        .engine
        .add_expense(user_id, expense.amount, expense.category, &expense.description)
        .await
    {
        Ok(id) => {
            tracing::info!(
                user_id,
                id,
                amount = %expense.amount,
                category = %expense.category,
                "expense added"
            );
            bot.send_message(chat_id, ui::render_added(&expense)).await?;
        }
        Err(error) => {
            tracing::error!(user_id, "failed to add expense: {error}");
            bot.send_message(chat_id, "❌ Failed to add expense. Please try again.")
                .await?;
        }
    }

    Ok(())
}

async fn handle_list(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    cfg: &ConfigParameters,
) -> ResponseResult<()> {
    match cfg
        .engine
        .recent_expenses(user_id, cfg.limits.list_limit)
        .await
    {
        Ok(expenses) if expenses.is_empty() => {
            bot.send_message(chat_id, ui::EMPTY_LIST).await?;
        }
        Ok(expenses) => {
            bot.send_message(chat_id, ui::render_list(&expenses))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Err(error) => {
            tracing::error!(user_id, "failed to fetch expenses: {error}");
            bot.send_message(chat_id, "❌ Failed to fetch expenses. Please try again.")
                .await?;
        }
    }

    Ok(())
}

async fn handle_summary(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    cfg: &ConfigParameters,
) -> ResponseResult<()> {
    let now = Utc::now();
    let (year, month) = (now.year(), now.month());

    match cfg.engine.monthly_summary(user_id, year, month).await {
        Ok(summary) if summary.is_empty() => {
            bot.send_message(chat_id, ui::EMPTY_SUMMARY).await?;
        }
        Ok(summary) => {
            bot.send_message(chat_id, ui::render_summary(year, month, &summary))
                .parse_mode(ParseMode::Markdown)
                .await?;
        }
        Err(error) => {
            tracing::error!(user_id, "failed to fetch summary: {error}");
            bot.send_message(chat_id, "❌ Failed to fetch summary. Please try again.")
                .await?;
        }
    }

    Ok(())
}
