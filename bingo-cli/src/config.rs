use crate::outbound::announcers::OutputFormat;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

const STATE_PATH_ENV: &str = "BINGO_STATE_PATH";
const DEFAULT_STATE_PATH: &str = "bingo_state.json";

/// Settings for one invocation, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub state_path: PathBuf,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Config {
    /// Resolves the state path from `state_path`, then `BINGO_STATE_PATH`, then the default.
    pub fn from_env(
        state_path: Option<PathBuf>,
        seed: Option<u64>,
        format: OutputFormat,
    ) -> Result<Self> {
        let state_path = match state_path {
            Some(path) => path,
            None => Self::state_path_from_env(env::var(STATE_PATH_ENV))?,
        };

        Ok(Self {
            state_path,
            seed,
            format,
        })
    }

    fn state_path_from_env(var: Result<String, env::VarError>) -> Result<PathBuf> {
        match var {
            Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            Ok(_) | Err(env::VarError::NotPresent) => Ok(PathBuf::from(DEFAULT_STATE_PATH)),
            Err(e) => Err(e).with_context(|| format!("invalid {STATE_PATH_ENV}")),
        }
    }
}
