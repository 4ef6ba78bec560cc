use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    ZeroId { field: &'static str },
    UnsupportedCurrency { input: String },
    InvalidAction { input: String },
    ReservedField { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::ZeroId { field } => write!(f, "{field} must be a positive id"),
            Self::UnsupportedCurrency { input } => write!(
                f,
                "unsupported currency: {input} (expected one of USD, EUR, GBP, RUR, RUB, UAH)"
            ),
            Self::InvalidAction { input } => {
                write!(f, "invalid action name: {input} (expected ASCII letters and digits)")
            }
            Self::ReservedField { field } => {
                write!(f, "{field} is set by the client and cannot be passed as a parameter")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
