use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorType {
    ReferenceError(String),
    TypeError(String),
    RangeError(String),
    SyntaxError(String),
    InvalidArgument(String),
}
impl ErrorType {
    pub fn kind(&self) -> &'static str {
        match self {
            ErrorType::ReferenceError(_) => "reference error",
            ErrorType::TypeError(_) => "type error",
            ErrorType::RangeError(_) => "range error",
            ErrorType::SyntaxError(_) => "syntax error",
            ErrorType::InvalidArgument(_) => "invalid argument",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorType::ReferenceError(m)
            | ErrorType::TypeError(m)
            | ErrorType::RangeError(m)
            | ErrorType::SyntaxError(m)
            | ErrorType::InvalidArgument(m) => m,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uncaught {}: {}.", self.kind(), self.message())
    }
}

impl std::error::Error for ErrorType {}
