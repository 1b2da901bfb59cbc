use std::collections::BTreeMap;

use argscan::{Options, ParseResult, Parsed};

use crate::config::{Config, Format};

/// What the process should print and how it should exit
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, serde::Serialize)]
struct Report<'a> {
    switches: Vec<&'a str>,
    values: BTreeMap<&'a str, &'a str>,
    positional: &'a [String],
}

impl<'a> From<&'a Parsed> for Report<'a> {
    fn from(parsed: &'a Parsed) -> Self {
        Self {
            switches: parsed.switches().collect(),
            values: parsed.values().collect(),
            positional: parsed.positional(),
        }
    }
}

pub fn respond(
    config: &Config,
    options: &Options,
    program: &str,
    args: &[String],
) -> anyhow::Result<Response> {
    let response = match options.parse(args) {
        ParseResult::Found(parsed) => {
            log::debug!(
                "{} switch(es), {} value(s), {} positional",
                parsed.switches().count(),
                parsed.values().count(),
                parsed.positional().len()
            );
            Response {
                stdout: render(&parsed, config.format)?,
                ..Response::default()
            }
        }

        ParseResult::Help => {
            log::debug!("help requested");
            Response {
                code: config.help_exit_code,
                stdout: options.usage(program),
                ..Response::default()
            }
        }

        ParseResult::Failed(err) => {
            log::debug!("rejected command line: {:?}", err);
            Response {
                code: 1,
                stderr: format!("{}: {}\n", program, err),
                ..Response::default()
            }
        }
    };

    Ok(response)
}

pub fn render(parsed: &Parsed, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => Ok(text(parsed)),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(&Report::from(parsed))?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn text(parsed: &Parsed) -> String {
    let mut out = String::new();
    for name in parsed.switches() {
        out.push_str(&format!("{}: set\n", name));
    }
    for (name, value) in parsed.values() {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    for (i, arg) in parsed.positional().iter().enumerate() {
        out.push_str(&format!("positional[{}]: {}\n", i, arg));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    fn respond_to(config: &Config, input: &[&str]) -> Response {
        let options = config.options().unwrap();
        respond(config, &options, "example", &args(input)).unwrap()
    }

    #[test]
    fn found_as_text() {
        let config = Config::default();
        let response = respond_to(&config, &["-a", "-b", "10", "/tmp/target"]);
        assert_eq!(
            response,
            Response {
                code: 0,
                stdout: "a-opt: set\nb-param: 10\npositional[0]: /tmp/target\n".into(),
                stderr: String::new(),
            }
        );
    }

    #[test]
    fn found_as_json() {
        let config = Config {
            format: Format::Json,
            ..Config::default()
        };
        let response = respond_to(&config, &["file1", "-a", "--b-param=x", "file2"]);
        assert_eq!(response.code, 0);

        let value: serde_json::Value = serde_json::from_str(&response.stdout).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "switches": ["a-opt"],
                "values": { "b-param": "x" },
                "positional": ["file1", "file2"],
            })
        );
    }

    #[test]
    fn help_exit_code() {
        let config = Config::default();
        let response = respond_to(&config, &["-a", "--help"]);
        assert_eq!(response.code, 0);
        assert!(response.stdout.starts_with("Usage: example [options]"));
        assert!(response.stderr.is_empty());

        let config = Config {
            help_exit_code: 1,
            ..Config::default()
        };
        assert_eq!(respond_to(&config, &["-?"]).code, 1);
    }

    #[test]
    fn failures() {
        let config = Config::default();

        let response = respond_to(&config, &["-b"]);
        assert_eq!(response.code, 1);
        assert!(response.stdout.is_empty());
        assert_eq!(
            response.stderr,
            "example: missing value for '-b'\n"
        );
        assert_eq!(response.stderr.lines().count(), 1);

        let response = respond_to(&config, &["-z"]);
        assert_eq!(response.code, 1);
        assert_eq!(response.stderr, "example: unknown argument '-z'\n");
    }

    #[test]
    fn nothing_to_report() {
        let config = Config::default();
        assert_eq!(respond_to(&config, &[]), Response::default());
    }
}
