use std::{ffi::OsString, io::Write};

use anyhow::Context;

mod config;
use config::Config;

mod report;

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn collect_args<I>(args: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("argument is not valid UTF-8: {:?}", arg))
        })
        .collect()
}

fn emit(
    response: &report::Response,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> anyhow::Result<()> {
    stdout
        .write_all(response.stdout.as_bytes())
        .and_then(|_| stdout.flush())
        .with_context(|| "cannot write to stdout")?;
    stderr
        .write_all(response.stderr.as_bytes())
        .with_context(|| "cannot write to stderr")
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);
    init_logger()?;

    let config = Config::load()?;
    let options = config.options()?;
    let program = config.program_name();
    log::debug!("'{}' knows {} flag(s)", program, options.flags().count());

    let args = collect_args(std::env::args_os().skip(1))?;
    let response = report::respond(&config, &options, &program, &args)?;

    emit(
        &response,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;

    if response.code != 0 {
        std::process::exit(response.code)
    }
    Ok(())
}
