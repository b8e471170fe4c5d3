//! Command structs

use teloxide::utils::command::{BotCommands, ParseError};

/// Hands the whole argument tail to the caller unparsed.
///
/// `/add` arguments are validated separately so the user gets a specific
/// rejection instead of teloxide's generic parse failure.
pub fn raw_args(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Commands to track your expenses:")]
pub enum Command {
    #[command(description = "Start tracking your expenses.")]
    Start,
    #[command(description = "Show this help message.")]
    Help,
    #[command(
        description = "Add a new expense: /add <amount> <category> <description>",
        parse_with = raw_args
    )]
    Add { input: String },
    #[command(description = "Show your recent expenses.")]
    List,
    #[command(description = "Get spending summary for this month.")]
    Summary,
}
