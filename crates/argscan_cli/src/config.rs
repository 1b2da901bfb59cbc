use std::path::{Path, PathBuf};

use anyhow::Context;
use argscan::Options;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name used in the usage line and in diagnostics, defaults to argv[0]
    pub program: Option<String>,
    pub help_exit_code: i32,
    pub format: Format,
    /// One declaration per flag, e.g. `-b, --b-param <value>  description`
    pub flags: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

impl Default for Format {
    fn default() -> Self {
        Self::Text
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: None,
            help_exit_code: 0,
            format: Format::default(),
            flags: vec![
                "-a, --a-opt            enable option a".into(),
                "-b, --b-param <value>  value for parameter b".into(),
            ],
        }
    }
}

impl Config {
    pub const ENV_VAR: &'static str = "ARGSCAN_CONFIG";
    pub const DEFAULT_FILE: &'static str = "argscan.toml";

    pub fn path() -> PathBuf {
        std::env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::path())
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::warn!("cannot find '{}', using the built-in flags", path.display());
            return Ok(Self::default());
        }

        log::debug!("loading config from '{}'", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        toml::from_str(&data).with_context(|| format!("cannot parse '{}'", path.display()))
    }

    pub fn options(&self) -> anyhow::Result<Options> {
        Options::from_declarations(&self.flags).with_context(|| "invalid flag declaration")
    }

    pub fn program_name(&self) -> String {
        if let Some(program) = &self.program {
            return program.clone();
        }

        std::env::args_os()
            .next()
            .as_deref()
            .map(Path::new)
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("argscan.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.options().unwrap().flags().count(), 3);
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argscan.toml");
        std::fs::write(
            &path,
            r#"
program = "deploy"
help_exit_code = 1
format = "json"
flags = [
    "-n, --dry-run           print what would happen",
    "-t, --target <host>     where to deploy",
]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.program.as_deref(), Some("deploy"));
        assert_eq!(config.program_name(), "deploy");
        assert_eq!(config.help_exit_code, 1);
        assert_eq!(config.format, Format::Json);

        let options = config.options().unwrap();
        assert!(options.find("--dry-run").is_some());
        assert!(options.find("-t").unwrap().takes_value());
        assert!(options.find("-a").is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argscan.toml");
        std::fs::write(&path, "format = \"json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.help_exit_code, 0);
        assert_eq!(config.flags, Config::default().flags);
    }

    #[test]
    fn bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argscan.toml");

        std::fs::write(&path, "format = \"yaml\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "flags = [\"-a, -a\"]\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.options().is_err());
    }
}
