/// An error in a flag declaration or in the shape of a flag table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    NoSpelling,
    InvalidSpelling(String),
    ReservedSpelling,
    MultipleValues,
    DuplicateSpelling(String),
    DuplicateName(String),
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSpelling => f.write_str("a flag needs at least one spelling"),
            Self::InvalidSpelling(s) => write!(f, "invalid flag spelling: {}", s),
            Self::ReservedSpelling => f.write_str("'--' ends flag scanning and cannot be a flag"),
            Self::MultipleValues => f.write_str("a flag can take at most one <value>"),
            Self::DuplicateSpelling(s) => write!(f, "duplicate flag spelling: {}", s),
            Self::DuplicateName(s) => write!(f, "duplicate flag name: {}", s),
        }
    }
}

impl std::error::Error for DefinitionError {}

/// A malformed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    // the flag as it was spelled on the command line
    MissingValue { flag: String },
    UnknownFlag { token: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue { flag } => write!(f, "missing value for '{}'", flag),
            Self::UnknownFlag { token } => write!(f, "unknown argument '{}'", token),
        }
    }
}

impl std::error::Error for ParseError {}
