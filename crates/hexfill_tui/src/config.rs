//! Startup configuration for the terminal client.
//!
//! Configuration problems are fatal: the client refuses to start rather than
//! limp along with a missing service URL or unusable cell geometry. Every
//! problem found is reported in one [`ConfigError`], so a bad start never
//! turns into a fix-one-rerun-find-the-next loop.

use std::path::PathBuf;

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Environment variable naming the game service URL.
pub const SERVER_URL_VAR: &str = "HEXFILL_SERVER_URL";
/// Environment variable overriding the rendered cell width.
pub const CELL_WIDTH_VAR: &str = "HEXFILL_CELL_WIDTH";
/// Environment variable overriding the rendered cell height.
pub const CELL_HEIGHT_VAR: &str = "HEXFILL_CELL_HEIGHT";

const DEFAULT_CELL_WIDTH: u16 = 8;
const DEFAULT_CELL_HEIGHT: u16 = 4;

// Cells narrower than this leave no room for the shaded edges.
const MIN_CELL_DIMENSION: u16 = 2;

/// A setting the client consults at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Setting {
    /// The game service URL.
    #[display("server url (--server-url or HEXFILL_SERVER_URL)")]
    ServerUrl,
    /// Rendered cell width in terminal columns.
    #[display("cell width (HEXFILL_CELL_WIDTH)")]
    CellWidth,
    /// Rendered cell height in terminal rows.
    #[display("cell height (HEXFILL_CELL_HEIGHT)")]
    CellHeight,
}

/// The client cannot start with the configuration it was given.
///
/// Lists every missing and every invalid setting, not just the first one
/// found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ConfigError {
    /// Settings with no value anywhere.
    pub missing: Vec<Setting>,
    /// Settings with an unusable value, paired with that value.
    pub invalid: Vec<(Setting, String)>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unusable configuration")?;
        if !self.missing.is_empty() {
            let list = self
                .missing
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "; missing: {list}")?;
        }
        if !self.invalid.is_empty() {
            let list = self
                .invalid
                .iter()
                .map(|(setting, value)| format!("{setting} = {value:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "; invalid: {list}")?;
        }
        Ok(())
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ClientConfig {
    /// Base URL of the game service.
    server_url: String,
    /// Where the current game id is stored.
    session_file: PathBuf,
    /// Width of one rendered cell in terminal columns.
    cell_width: u16,
    /// Height of one rendered cell in terminal rows.
    cell_height: u16,
}

impl ClientConfig {
    /// Resolves the configuration from CLI arguments and the environment.
    #[instrument(skip_all)]
    pub fn resolve(
        server_url: Option<String>,
        session_file: PathBuf,
    ) -> Result<Self, ConfigError> {
        let config = Self::build(
            server_url,
            session_file,
            std::env::var(SERVER_URL_VAR).ok(),
            std::env::var(CELL_WIDTH_VAR).ok(),
            std::env::var(CELL_HEIGHT_VAR).ok(),
        )?;
        debug!(
            server_url = %config.server_url,
            session_file = %config.session_file.display(),
            cell_width = config.cell_width,
            cell_height = config.cell_height,
            "Resolved configuration"
        );
        Ok(config)
    }

    fn build(
        server_url: Option<String>,
        session_file: PathBuf,
        env_server_url: Option<String>,
        env_cell_width: Option<String>,
        env_cell_height: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();

        let server_url = match server_url.or(env_server_url) {
            Some(url) => url,
            None => {
                missing.push(Setting::ServerUrl);
                String::new()
            }
        };

        let cell_width = parse_dimension(
            Setting::CellWidth,
            env_cell_width,
            DEFAULT_CELL_WIDTH,
            &mut invalid,
        );
        let cell_height = parse_dimension(
            Setting::CellHeight,
            env_cell_height,
            DEFAULT_CELL_HEIGHT,
            &mut invalid,
        );

        if !missing.is_empty() || !invalid.is_empty() {
            return Err(ConfigError { missing, invalid });
        }

        Ok(Self {
            server_url,
            session_file,
            cell_width,
            cell_height,
        })
    }
}

fn parse_dimension(
    setting: Setting,
    value: Option<String>,
    default: u16,
    invalid: &mut Vec<(Setting, String)>,
) -> u16 {
    match value {
        None => default,
        Some(raw) => match raw.trim().parse::<u16>() {
            Ok(parsed) if parsed >= MIN_CELL_DIMENSION => parsed,
            _ => {
                invalid.push((setting, raw));
                default
            }
        },
    }
}
