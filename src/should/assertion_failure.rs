use std::fmt::{self, Display};

/// Which surface raised a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Should,
    ShouldNot,
}

impl Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Polarity::Should => "should",
            Polarity::ShouldNot => "should not",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Response {polarity} {operation}: expected {expected} but was {actual}")]
pub struct AssertionFailure {
    pub polarity: Polarity,
    pub operation: &'static str,
    pub expected: String,
    pub actual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_operation_expected_and_actual() {
        let failure = AssertionFailure {
            polarity: Polarity::ShouldNot,
            operation: "have status",
            expected: "200 OK".to_string(),
            actual: "200 OK".to_string(),
        };

        assert_eq!(
            failure.to_string(),
            "Response should not have status: expected 200 OK but was 200 OK"
        );
    }
}
