use crate::{DefinitionError, Flag};

/// The table of recognized flags. Always contains the help flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    flags: Vec<Flag>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            flags: vec![Flag::help()],
        }
    }

    pub fn with(mut self, flag: Flag) -> Result<Self, DefinitionError> {
        self.add(flag)?;
        Ok(self)
    }

    pub fn add(&mut self, flag: Flag) -> Result<&mut Self, DefinitionError> {
        if self.flags.iter().any(|f| f.name() == flag.name()) {
            return Err(DefinitionError::DuplicateName(flag.name().to_string()));
        }

        if let Some(spelling) = flag.spellings().find(|s| self.find(s).is_some()) {
            return Err(DefinitionError::DuplicateSpelling(spelling.to_string()));
        }

        self.flags.push(flag);
        Ok(self)
    }

    pub fn from_declarations<I, S>(decls: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        decls.into_iter().try_fold(Self::new(), |options, decl| {
            options.with(Flag::example(decl.as_ref()).build()?)
        })
    }

    /// Exact, case-sensitive lookup
    pub fn find(&self, spelling: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.matches(spelling))
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn usage(&self, program: &str) -> String {
        let rows = self
            .flags
            .iter()
            .map(|f| (f.synopsis(), f.description()))
            .collect::<Vec<_>>();

        let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);

        let mut text = format!("Usage: {} [options] [--] [args...]\n", program);
        text.push_str("\nOptions:\n");
        for (left, description) in rows {
            let row = format!("  {:width$}  {}", left, description, width = width);
            text.push_str(row.trim_end());
            text.push('\n');
        }
        text
    }
}
