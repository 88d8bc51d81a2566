//! Auth command - manage saved API credentials

use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use crate::cli::app::{AuthAction, client_for, env_var};
use trello::config::{self, Config, CredentialSource};
use trello::output::{OutputMode, mask};
use trello::{Credentials, Error, Params};

use super::{confirm, show};

/// Shortest key or token accepted by `auth setup`
const MIN_SECRET_LEN: usize = 8;

/// Handle auth subcommands
pub fn auth(action: AuthAction, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    match action {
        AuthAction::Setup { api_key, api_token } => setup(&api_key, &api_token, mode, out),
        AuthAction::Status => status(mode, out),
        AuthAction::Logout => logout(mode, out),
    }
}

fn setup(api_key: &str, api_token: &str, mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    if api_key.chars().count() < MIN_SECRET_LEN {
        return Err(Error::validation(
            "API key looks too short; check your key at https://trello.com/power-ups/admin",
        )
        .into());
    }
    if api_token.chars().count() < MIN_SECRET_LEN {
        return Err(Error::validation(format!(
            "API token looks too short; re-generate it at \
             https://trello.com/1/authorize?expiration=never&scope=read,write&response_type=token&key={api_key}"
        ))
        .into());
    }

    let client = client_for(Credentials::new(api_key, api_token))?;
    let member = client
        .get_member("me", Params::new())
        .context("credentials validation failed")?;

    let saved = Config {
        api_key: api_key.to_string(),
        api_token: api_token.to_string(),
        member_id: Some(member.id.clone()),
        full_name: Some(member.full_name.clone()).filter(|n| !n.is_empty()),
        username: Some(member.username.clone()).filter(|n| !n.is_empty()),
    };
    let path = saved.save().context("saving config")?;

    let result = json!({
        "config": path.display().to_string(),
        "member_id": member.id,
        "full_name": member.full_name,
        "username": member.username,
    });
    show(out, mode, &result, |out| {
        writeln!(out, "Credentials saved to {}", path.display())?;
        writeln!(
            out,
            "Authenticated as: {} (@{})",
            member.full_name.green(),
            member.username
        )?;
        writeln!(out, "API key:          {}", mask(api_key))?;
        writeln!(out, "API token:        {}", mask(api_token))
    })
}

fn status(mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = Config::path()?;
    let saved = Config::load_from(&path).context("loading config")?;
    let resolved = config::resolve_credentials(env_var, &saved);

    let result = match &resolved {
        Some((creds, source)) => json!({
            "config": path.display().to_string(),
            "authenticated": true,
            "source": source.as_str(),
            "api_key": mask(creds.key()),
            "api_token": mask(creds.token()),
            "username": (*source == CredentialSource::ConfigFile).then(|| saved.username.clone()).flatten(),
        }),
        None => json!({
            "config": path.display().to_string(),
            "authenticated": false,
        }),
    };

    show(out, mode, &result, |out| {
        writeln!(out, "Config: {}", path.display())?;
        writeln!(out)?;
        match &resolved {
            Some((creds, CredentialSource::Env)) => {
                writeln!(out, "Credential source: {}", "env vars (take priority over config)".green())?;
                writeln!(out, "{}:   {}", config::API_KEY_ENV, mask(creds.key()))?;
                writeln!(out, "{}: {}", config::API_TOKEN_ENV, mask(creds.token()))
            },
            Some((creds, CredentialSource::ConfigFile)) => {
                writeln!(out, "Credential source: {}", "config file".green())?;
                writeln!(out, "API key:   {}", mask(creds.key()))?;
                writeln!(out, "API token: {}", mask(creds.token()))?;
                if let Some(name) = &saved.full_name {
                    writeln!(out, "User:      {name} (@{})", saved.username.as_deref().unwrap_or_default())?;
                }
                Ok(())
            },
            None => {
                writeln!(out, "Status: {}", "not authenticated".yellow())?;
                writeln!(out)?;
                writeln!(out, "Run: trello auth setup <api-key> <api-token>")?;
                writeln!(out, "Or set env vars:")?;
                writeln!(out, "  export {}=your-key", config::API_KEY_ENV)?;
                writeln!(out, "  export {}=your-token", config::API_TOKEN_ENV)
            },
        }
    })
}

fn logout(mode: OutputMode, out: &mut dyn Write) -> anyhow::Result<()> {
    let path = Config::clear().context("removing config")?;
    let result = json!({ "config": path.display().to_string(), "removed": true });
    confirm(
        out,
        mode,
        &result,
        &format!(
            "Credentials removed from config.\nSet {} and {} env vars if you still need access.",
            config::API_KEY_ENV,
            config::API_TOKEN_ENV
        ),
    )
}
