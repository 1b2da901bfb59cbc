mod error;
pub use error::{DefinitionError, ParseError};

mod flag;
pub use flag::{Flag, Kind};

mod options;
pub use options::Options;

mod parse;
pub use parse::{ParseResult, Parsed};
