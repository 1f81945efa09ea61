// src/cli.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::{bail, Result};

use crate::config::Config;

pub enum Mode {
    /// One synchronous pipeline run, then exit.
    Check,
    /// Serve GET / and GET /check over HTTP.
    Serve,
}

/// Parse arguments on top of the environment-derived config.
/// Flags override what `Config::from_env` decided.
pub fn parse(config: &mut Config) -> Result<Mode> {
    let mut mode = Mode::Check;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "check" => mode = Mode::Check,
            "serve" => mode = Mode::Serve,
            "-p" | "--port" => {
                let v = args.next().ok_or_else(|| missing("--port"))?;
                config.port = v.parse()?;
            }
            "-s" | "--snapshot" => {
                let v = args.next().ok_or_else(|| missing("--snapshot"))?;
                config.snapshot_path = PathBuf::from(v);
            }
            "--timeout" => {
                let v: u64 = args.next().ok_or_else(|| missing("--timeout"))?.parse()?;
                if v == 0 {
                    bail!("--timeout must be at least 1 second");
                }
                config.timeout = Duration::from_secs(v);
            }
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => bail!("Unknown arg: {other}"),
        }
    }

    Ok(mode)
}

fn missing(flag: &str) -> color_eyre::eyre::Report {
    color_eyre::eyre::eyre!("Missing value for {flag}")
}
