use std::collections::{BTreeMap, BTreeSet};

use crate::{Flag, Kind, Options, ParseError};

/// The flags and positional parameters of one command line
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
    switches: BTreeSet<String>,
    values: BTreeMap<String, String>,
    positional: Vec<String>,
}

impl Parsed {
    pub fn is_set(&self, name: &str) -> bool {
        self.switches.contains(name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn into_positional(self) -> Vec<String> {
        self.positional
    }

    pub fn switches(&self) -> impl Iterator<Item = &str> {
        self.switches.iter().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseResult {
    Found(Parsed),
    Help, // just print the usage
    Failed(ParseError),
}

impl ParseResult {
    /// `Ok(None)` when help was requested
    pub fn into_result(self) -> Result<Option<Parsed>, ParseError> {
        match self {
            Self::Found(parsed) => Ok(Some(parsed)),
            Self::Help => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    // entered after `--`, never left
    PositionalOnly,
}

impl Options {
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> ParseResult {
        use ParseResult::*;

        let mut parsed = Parsed::default();
        let mut state = State::Scanning;

        let mut index = 0;
        while index < args.len() {
            let arg = args[index].as_ref();

            if state == State::PositionalOnly {
                parsed.positional.push(arg.to_string());
                index += 1;
                continue;
            }

            if let Some(flag) = self.find(arg) {
                match flag.kind() {
                    Kind::Help => return Help,
                    Kind::Switch => {
                        parsed.switches.insert(flag.name().to_string());
                        index += 1;
                    }
                    Kind::Value(..) => match args.get(index + 1).map(|s| s.as_ref()) {
                        // the flag and its value are taken together or not at all
                        Some(value) if !value.starts_with('-') => {
                            parsed.values.insert(flag.name().to_string(), value.to_string());
                            index += 2;
                        }
                        _ => {
                            return Failed(ParseError::MissingValue {
                                flag: arg.to_string(),
                            })
                        }
                    },
                }
                continue;
            }

            if let Some((flag, value)) = self.split_inline(arg) {
                parsed.values.insert(flag.name().to_string(), value.to_string());
                index += 1;
                continue;
            }

            if arg == Flag::TERMINATOR {
                state = State::PositionalOnly;
                index += 1;
                continue;
            }

            if arg.starts_with('-') {
                return Failed(ParseError::UnknownFlag {
                    token: arg.to_string(),
                });
            }

            parsed.positional.push(arg.to_string());
            index += 1;
        }

        Found(parsed)
    }

    // `--name=value`, only for long value-bearing spellings
    fn split_inline<'a>(&self, arg: &'a str) -> Option<(&Flag, &'a str)> {
        if !arg.starts_with(Flag::TERMINATOR) {
            return None;
        }

        let (key, value) = arg.split_once('=')?;
        self.find(key)
            .filter(|flag| flag.takes_value())
            .map(|flag| (flag, value))
    }
}
