//! CLI configuration.
//!
//! A small TOML file supplies defaults for anything not given on the
//! command line; interactive prompting is the last resort and only
//! happens on a terminal. The library itself never prompts -- credential
//! acquisition lives entirely here.

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::Deserialize;

use sumoly_api::Credentials;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Contents of `config.toml`. All fields optional; flags and environment
/// variables win over the file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub access_id: Option<String>,
    pub access_key: Option<String>,
    pub endpoint: Option<String>,
}

/// Platform config path, e.g. `~/.config/sumoly/config.toml` on Linux.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "sumoly", "sumoly").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the config file if one exists; a missing file is an empty config.
pub fn load_file_config() -> Result<FileConfig, CliError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(FileConfig::default()),
    }
}

fn load_from(path: &Path) -> Result<FileConfig, CliError> {
    Figment::new()
        .merge(Toml::file(path))
        .extract()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve credentials: flag/env (clap) > config file > terminal prompt.
pub fn resolve_credentials(
    global: &GlobalOpts,
    file: &FileConfig,
) -> Result<Credentials, CliError> {
    let access_id = global
        .access_id
        .clone()
        .or_else(|| file.access_id.clone())
        .or_else(|| prompt_line("access id"))
        .ok_or(CliError::MissingCredential { what: "access id" })?;

    let access_key = global
        .access_key
        .clone()
        .or_else(|| file.access_key.clone())
        .or_else(|| prompt_secret("access key"))
        .ok_or(CliError::MissingCredential { what: "access key" })?;

    Ok(Credentials::new(access_id, access_key))
}

fn prompt_line(label: &str) -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }
    eprint!("{label}: ");
    std::io::stderr().flush().ok()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line).ok()?;
    let line = line.trim().to_owned();
    (!line.is_empty()).then_some(line)
}

fn prompt_secret(label: &str) -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }
    rpassword::prompt_password(format!("{label}: "))
        .ok()
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn loads_partial_config_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "access_id = \"suABC\"\nendpoint = \"https://api.eu.sumologic.com/api\""
        )
        .unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.access_id.as_deref(), Some("suABC"));
        assert_eq!(config.access_key, None);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://api.eu.sumologic.com/api")
        );
    }

    #[test]
    fn missing_file_is_empty_config() {
        let config = load_from(Path::new("/nonexistent/sumoly.toml")).unwrap();
        assert!(config.access_id.is_none());
        assert!(config.access_key.is_none());
    }
}
