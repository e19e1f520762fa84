use {
    derive_more::{Display, Error},
    std::num::ParseIntError,
};

/// Rejected prime count, as supplied at the command line.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CountError {
    #[display("`{input}` is not an integer ({source})")]
    Parse { input: String, source: ParseIntError },
    #[display("count must not be negative, got {value}")]
    Negative { value: i64 },
    #[display("count {value} is too large for this platform")]
    TooLarge { value: i64 },
}

/// Parses a non-negative decimal prime count.
pub fn parse_count(text: &str) -> Result<usize, CountError> {
    let value: i64 = text.trim().parse().map_err(|source| CountError::Parse {
        input: text.to_owned(),
        source,
    })?;
    if value < 0 {
        return Err(CountError::Negative { value });
    }
    usize::try_from(value).map_err(|_| CountError::TooLarge { value })
}
