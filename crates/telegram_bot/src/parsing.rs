use engine::{Category, MoneyCents};

/// Validation limits for `/add`, supplied by the application configuration.
#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub max_amount: MoneyCents,
    pub max_description: usize,
    pub list_limit: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_amount: MoneyCents::new(10_000_00),
            max_description: 200,
            list_limit: 10,
        }
    }
}

/// A validated `/add` command, ready for the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddExpense {
    pub amount: MoneyCents,
    pub category: Category,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least an amount and a category")]
    MalformedInput,
    #[error("not a valid positive amount")]
    InvalidAmount,
    #[error("not a known category")]
    UnknownCategory,
    #[error("amount larger than {max}")]
    AmountTooLarge { max: MoneyCents },
    #[error("description longer than {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Parses the text after `/add` into a validated expense.
///
/// Expected shape: `<amount> <category> [description...]`. Checks run in
/// order and the first failure wins; the category is matched
/// case-insensitively and any description tokens are rejoined with single
/// spaces (empty when absent).
pub fn parse_add(input: &str, limits: &Limits) -> Result<AddExpense, ParseError> {
    let mut tokens = input.split_whitespace();

    let (Some(amount_token), Some(category_token)) = (tokens.next(), tokens.next()) else {
        return Err(ParseError::MalformedInput);
    };

    let amount: MoneyCents = amount_token
        .parse()
        .map_err(|_| ParseError::InvalidAmount)?;
    if !amount.is_positive() {
        return Err(ParseError::InvalidAmount);
    }

    let category =
        Category::try_from(category_token).map_err(|_| ParseError::UnknownCategory)?;

    if amount > limits.max_amount {
        return Err(ParseError::AmountTooLarge {
            max: limits.max_amount,
        });
    }

    let description = tokens.collect::<Vec<_>>().join(" ");
    if description.chars().count() > limits.max_description {
        return Err(ParseError::DescriptionTooLong {
            max: limits.max_description,
        });
    }

    Ok(AddExpense {
        amount,
        category,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_full_command() {
        let parsed = parse_add("15.50 food lunch at cafe", &Limits::default()).unwrap();
        assert_eq!(parsed.amount, MoneyCents::new(15_50));
        assert_eq!(parsed.category, Category::Food);
        assert_eq!(parsed.description, "lunch at cafe");
    }

    #[test]
    fn description_is_optional() {
        let parsed = parse_add("50 transport", &Limits::default()).unwrap();
        assert_eq!(parsed.amount, MoneyCents::new(50_00));
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn collapses_description_whitespace() {
        let parsed = parse_add("12.50  food   coffee  and cake", &Limits::default()).unwrap();
        assert_eq!(parsed.description, "coffee and cake");
    }

    #[test]
    fn normalizes_category_case() {
        let parsed = parse_add("12.50 FOOD lunch", &Limits::default()).unwrap();
        assert_eq!(parsed.category, Category::Food);
    }

    #[test]
    fn rejects_missing_category() {
        let err = parse_add("15", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::MalformedInput);

        let err = parse_add("", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::MalformedInput);
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = parse_add("abc food lunch", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::InvalidAmount);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let err = parse_add("0 food lunch", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::InvalidAmount);

        let err = parse_add("-5 food lunch", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::InvalidAmount);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = parse_add("15 unknowncat", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::UnknownCategory);
    }

    #[test]
    fn amount_equal_to_max_is_accepted() {
        let parsed = parse_add("10000 food", &Limits::default()).unwrap();
        assert_eq!(parsed.amount, MoneyCents::new(10_000_00));

        let err = parse_add("10000.01 food", &Limits::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::AmountTooLarge {
                max: MoneyCents::new(10_000_00)
            }
        );
    }

    #[test]
    fn description_length_is_bounded_in_chars() {
        let limits = Limits {
            max_description: 10,
            ..Limits::default()
        };

        // 10 chars exactly, counting the inner space.
        assert!(parse_add("5 food ééééé éééé", &limits).is_ok());

        let err = parse_add("5 food ééééé ééééé", &limits).unwrap_err();
        assert_eq!(err, ParseError::DescriptionTooLong { max: 10 });
    }

    #[test]
    fn amount_check_runs_before_category_check() {
        // Validation order: a bad amount wins over a bad category.
        let err = parse_add("abc unknowncat", &Limits::default()).unwrap_err();
        assert_eq!(err, ParseError::InvalidAmount);
    }
}
