//! Info command - binary, config location and credential environment

use std::env;
use std::io::Write;

use colored::Colorize;
use serde::Serialize;

use crate::cli::app::env_var;
use trello::config::{self, Config};
use trello::output::{OutputMode, mask};

use super::show;

#[derive(Debug, Serialize)]
struct Info {
    version: &'static str,
    binary: String,
    os: &'static str,
    arch: &'static str,
    config: String,
    key_source: &'static str,
    api_key_env: String,
    api_token_env: String,
}

/// Show tool info
pub fn info(mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let config_path = Config::path().ok();

    let key_source = if env_var(config::API_KEY_ENV).is_some_and(|k| !k.is_empty()) {
        "TRELLO_API_KEY env var"
    } else if config_path
        .as_deref()
        .and_then(|path| Config::load_from(path).ok())
        .is_some_and(|c| !c.api_key.is_empty())
    {
        "config file"
    } else {
        "(not set)"
    };

    let info = Info {
        version: trello::VERSION,
        binary: env::current_exe().map(|p| p.display().to_string()).unwrap_or_default(),
        os: env::consts::OS,
        arch: env::consts::ARCH,
        config: config_path.map(|p| p.display().to_string()).unwrap_or_default(),
        key_source,
        api_key_env: mask(&env_var(config::API_KEY_ENV).unwrap_or_default()),
        api_token_env: mask(&env_var(config::API_TOKEN_ENV).unwrap_or_default()),
    };

    show(out, mode, &info, |out| {
        writeln!(out, "{} v{}", "trello".bold(), info.version)?;
        writeln!(out)?;
        writeln!(out, "  binary:  {}", info.binary)?;
        writeln!(out, "  os/arch: {}/{}", info.os, info.arch)?;
        writeln!(out, "  config:  {}", info.config)?;
        writeln!(out)?;
        writeln!(out, "  key source: {}", info.key_source)?;
        writeln!(out)?;
        writeln!(out, "  env vars:")?;
        writeln!(out, "    {}   = {}", config::API_KEY_ENV, info.api_key_env)?;
        writeln!(out, "    {} = {}", config::API_TOKEN_ENV, info.api_token_env)?;
        writeln!(out)?;
        writeln!(out, "  credential resolution order:")?;
        writeln!(out, "    1. {} + {} env vars", config::API_KEY_ENV, config::API_TOKEN_ENV)?;
        writeln!(out, "    2. config file (trello auth setup)")
    })
}
