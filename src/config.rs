//! Runtime configuration
//!
//! The bunch directory is resolved once at startup and carried through the
//! program in a [`Config`] value. Resolution order:
//!
//! 1. `--bunch-dir` / `PACKBUNCH_DIR`
//! 2. `/home/$SUDO_USER/.packbunch/bunches` when running under sudo, so elevated
//!    runs still use the invoking user's bunches
//! 3. `~/.packbunch/bunches`

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PackbunchError, Result};

/// Environment variable overriding the bunch directory
pub const BUNCH_DIR_ENV: &str = "PACKBUNCH_DIR";

/// Environment variable overriding the package manager program
pub const PACKAGE_MANAGER_ENV: &str = "PACKBUNCH_PACKAGE_MANAGER";

/// Package manager used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "apt";

/// Bunch directory relative to a home directory
const BUNCHES_DIR: &str = ".packbunch/bunches";

/// Home directory root used for `SUDO_USER`
const HOME_ROOT: &str = "/home";

/// Process-wide settings, built once and never mutated
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one file per bunch
    pub bunch_dir: PathBuf,

    /// Invoking user when running under sudo
    pub sudo_user: Option<String>,

    /// Package manager program (`apt` unless overridden)
    pub package_manager: String,
}

impl Config {
    /// Build the configuration from CLI flags and the process environment
    pub fn resolve(bunch_dir: Option<PathBuf>, package_manager: String) -> Result<Self> {
        let sudo_user = std::env::var("SUDO_USER").ok().filter(|u| !u.is_empty());
        let bunch_dir = resolve_bunch_dir(bunch_dir, sudo_user.as_deref(), dirs::home_dir())?;

        log::debug!("Using bunch directory {}", bunch_dir.display());

        Ok(Self {
            bunch_dir,
            sudo_user,
            package_manager,
        })
    }

    /// Create the bunch directory if it doesn't exist yet
    pub fn ensure_bunch_dir(&self) -> Result<()> {
        ensure_dir(&self.bunch_dir)
    }

    /// Fail unless the process was started through sudo
    pub fn require_privilege(&self, command: &str) -> Result<()> {
        if self.sudo_user.is_some() {
            Ok(())
        } else {
            Err(PackbunchError::PrivilegeRequired {
                command: command.to_string(),
            })
        }
    }
}

/// Pick the bunch directory from the explicit override, sudo context or home directory
pub fn resolve_bunch_dir(
    explicit: Option<PathBuf>,
    sudo_user: Option<&str>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(user) = sudo_user {
        return Ok(Path::new(HOME_ROOT).join(user).join(BUNCHES_DIR));
    }

    home.map(|home| home.join(BUNCHES_DIR))
        .ok_or(PackbunchError::HomeDirNotFound)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir).map_err(|e| PackbunchError::BunchDirCreateFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;
    log::info!("Bunch directory didn't exist and was created.");

    Ok(())
}
