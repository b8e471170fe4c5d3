//! Reply rendering. Pure string builders, no bot calls.

use engine::{Category, CategorySummary, Expense, MoneyCents};

use crate::parsing::{AddExpense, ParseError};

pub(crate) const EMPTY_LIST: &str =
    "📝 No expenses found. Use /add to record your first expense!";
pub(crate) const EMPTY_SUMMARY: &str =
    "📊 No expenses found for this month. Start tracking your expenses with /add!";

pub(crate) fn welcome_text() -> String {
    "Welcome to Expense Bot! 💰\n\n\
     I'll help you track your daily expenses. Here are the commands you can use:\n\n\
     /add - Add a new expense\n\
     /list - Show recent expenses\n\
     /summary - Get spending summary\n\
     /help - Show this help message\n\n\
     Let's start tracking your expenses!"
        .to_string()
}

pub(crate) fn help_text() -> String {
    format!(
        "📖 *Expense Bot Help*\n\n\
         *Commands:*\n\
         /add <amount> <category> <description> - Add an expense\n\
         /list - Show your recent expenses\n\
         /summary - Get spending summary for this month\n\
         /help - Show this help message\n\n\
         *Examples:*\n\
         /add 15.50 food lunch at cafe\n\
         /add 50 transport monthly bus pass\n\
         /add 120 shopping new shoes\n\n\
         Categories: {}",
        category_list()
    )
}

pub(crate) fn render_added(expense: &AddExpense) -> String {
    let description = if expense.description.is_empty() {
        "None"
    } else {
        expense.description.as_str()
    };

    format!(
        "✅ Expense added successfully!\n\n\
         💰 Amount: {}\n\
         📂 Category: {}\n\
         📝 Description: {}",
        expense.amount, expense.category, description
    )
}

pub(crate) fn render_list(expenses: &[Expense]) -> String {
    let mut text = String::from("📋 *Your Recent Expenses:*\n\n");

    for (index, expense) in expenses.iter().enumerate() {
        let description = if expense.description.is_empty() {
            "No description"
        } else {
            expense.description.as_str()
        };

        text.push_str(&format!(
            "{idx}. *{amount}* - {category}\n   {description}\n   📅 {date}\n\n",
            idx = index + 1,
            amount = expense.amount,
            category = expense.category,
            date = expense.date.date_naive(),
        ));
    }

    let total: MoneyCents = expenses.iter().map(|e| e.amount).sum();
    text.push_str(&format!("💰 *Total: {total}*"));
    text
}

pub(crate) fn render_summary(year: i32, month: u32, summary: &[CategorySummary]) -> String {
    let mut text = format!("📊 *Monthly Summary ({year}-{month:02}):*\n\n");

    let mut total = MoneyCents::ZERO;
    let mut count = 0;
    for row in summary {
        total += row.total;
        count += row.count;
        text.push_str(&format!(
            "📂 *{}*: {} ({} transactions)\n",
            row.category, row.total, row.count
        ));
    }

    text.push_str(&format!(
        "\n💰 *Total Spent: {total}*\n📝 *Total Transactions: {count}*"
    ));
    text
}

pub(crate) fn render_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::MalformedInput => {
            "❌ Invalid format. Use: /add <amount> <category> <description>".to_string()
        }
        ParseError::InvalidAmount => {
            "❌ Please enter a valid amount (number greater than 0)".to_string()
        }
        ParseError::UnknownCategory => {
            format!("❌ Invalid category. Choose from: {}", category_list())
        }
        ParseError::AmountTooLarge { max } => {
            format!("❌ Amount too large. Maximum allowed: {max}")
        }
        ParseError::DescriptionTooLong { max } => {
            format!("❌ Description too long. Maximum {max} characters.")
        }
    }
}

fn category_list() -> String {
    Category::ALL.map(Category::as_str).join(", ")
}
