use std::collections::HashSet;

use crate::DefinitionError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Boolean, takes no value
    Switch,
    /// Takes exactly one value, named by the metavar
    Value(Box<str>),
    /// Short-circuits the scan with a request for usage text
    Help,
}

impl Default for Kind {
    fn default() -> Self {
        Self::Switch
    }
}

/// A single recognized flag: its exact spellings and what it consumes.
///
/// Flags are usually built from a declaration line, the same line that is
/// shown in the usage text:
///
/// ```text
/// -b, --b-param <value>  value for parameter b
/// ```
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Flag {
    name: Box<str>,
    spellings: Box<[Box<str>]>,
    kind: Kind,
    description: Box<str>,
    decl: Box<str>,
}

impl Flag {
    pub(crate) const TERMINATOR: &'static str = "--";
    const START: &'static str = "<";
    const END: &'static str = ">";

    pub fn example(input: &str) -> Self {
        Self {
            decl: input.into(),
            ..Self::default()
        }
    }

    pub fn build(self) -> Result<Self, DefinitionError> {
        self.parse()
    }

    pub fn switch(spellings: &[&str], description: &str) -> Result<Self, DefinitionError> {
        Self::assemble(spellings, Kind::Switch, description)
    }

    pub fn value(
        spellings: &[&str],
        metavar: &str,
        description: &str,
    ) -> Result<Self, DefinitionError> {
        Self::assemble(spellings, Kind::Value(metavar.into()), description)
    }

    /// `-h`, `-?` and `--help`
    pub fn help() -> Self {
        Self {
            name: "help".into(),
            spellings: vec!["-h".into(), "-?".into(), "--help".into()].into_boxed_slice(),
            kind: Kind::Help,
            description: "show this help and exit".into(),
            decl: Box::default(),
        }
    }

    /// The key the flag is recorded under: the first long spelling without
    /// its dashes, otherwise the short letter.
    pub fn name(&self) -> &str {
        &*self.name
    }

    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(|s| &**s)
    }

    pub const fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &*self.description
    }

    pub fn takes_value(&self) -> bool {
        matches!(self.kind, Kind::Value(..))
    }

    pub fn matches(&self, spelling: &str) -> bool {
        self.spellings().any(|s| s == spelling)
    }

    /// The left column of a usage row, e.g. `-b, --b-param <value>`
    pub fn synopsis(&self) -> String {
        let mut out = self.spellings.join(", ");
        if let Kind::Value(metavar) = &self.kind {
            out.push(' ');
            out.push_str(Self::START);
            out.push_str(metavar);
            out.push_str(Self::END);
        }
        out
    }

    fn parse(self) -> Result<Self, DefinitionError> {
        let mut spellings = vec![];
        let mut metavar = None;
        let mut description = vec![];

        for part in self.decl.split_whitespace() {
            // everything after the first word of the description belongs to it
            if !description.is_empty() {
                description.push(part);
                continue;
            }

            if part.starts_with('-') {
                spellings.push(part.trim_end_matches(','));
                continue;
            }

            if let Some(name) = Self::trim_metavar(part) {
                if metavar.replace(name).is_some() {
                    return Err(DefinitionError::MultipleValues);
                }
                continue;
            }

            description.push(part);
        }

        let kind = match metavar {
            Some(name) => Kind::Value(name.into()),
            None => Kind::Switch,
        };

        let mut flag = Self::assemble(&spellings, kind, &description.join(" "))?;
        flag.decl = self.decl;
        Ok(flag)
    }

    fn assemble(
        spellings: &[&str],
        kind: Kind,
        description: &str,
    ) -> Result<Self, DefinitionError> {
        let first = *spellings.first().ok_or(DefinitionError::NoSpelling)?;

        let mut seen = HashSet::new();
        for &spelling in spellings {
            Self::validate(spelling)?;
            if !seen.insert(spelling) {
                return Err(DefinitionError::DuplicateSpelling(spelling.to_string()));
            }
        }

        let name = spellings
            .iter()
            .find_map(|&s| s.strip_prefix(Self::TERMINATOR))
            .unwrap_or_else(|| first.trim_start_matches('-'));

        Ok(Self {
            name: name.into(),
            spellings: spellings.iter().map(|&s| s.into()).collect(),
            kind,
            description: description.into(),
            decl: Box::default(),
        })
    }

    fn validate(spelling: &str) -> Result<(), DefinitionError> {
        if spelling == Self::TERMINATOR {
            return Err(DefinitionError::ReservedSpelling);
        }

        let ok = match spelling.strip_prefix(Self::TERMINATOR) {
            Some(long) => {
                !long.starts_with('-') && long.chars().all(|c| c.is_alphanumeric() || c == '-')
            }
            None => {
                let mut chars = spelling.chars();
                chars.next() == Some('-')
                    && matches!(
                        (chars.next(), chars.next()),
                        (Some(c), None) if c.is_alphanumeric() || c == '?'
                    )
            }
        };

        if ok {
            Ok(())
        } else {
            Err(DefinitionError::InvalidSpelling(spelling.to_string()))
        }
    }

    fn trim_metavar(input: &str) -> Option<&str> {
        input
            .strip_prefix(Self::START)
            .and_then(|s| s.strip_suffix(Self::END))
            .filter(|s| !s.is_empty() && !s.contains(Self::START) && !s.contains(Self::END))
    }
}
