//! File-backed bunch storage
//!
//! Each bunch is a single file in the bunch directory, named after the bunch.
//! Every operation validates its inputs before touching the file system, so a
//! rejected call never leaves a partial change behind.
//!
//! ## Concurrency
//!
//! [`BunchStore::add_package`] and [`BunchStore::remove_package`] read the
//! whole file and then rewrite it. Nothing locks the file in between, so two
//! invocations editing the same bunch at once can lose one of the updates.
//! All overwrites go through [`BunchStore::rewrite`].

pub mod format;


use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use crate::config::Config;
use crate::error::{PackbunchError, Result, bunch, fs as fs_error, package as package_error};
use crate::validate::{valid_bunch_name, valid_package_name};

/// CRUD access to the bunches in one directory
#[derive(Debug, Clone)]
pub struct BunchStore {
    dir: PathBuf,
}

impl BunchStore {
    /// Open the store in the configured bunch directory
    pub fn new(config: &Config) -> Self {
        Self::at(&config.bunch_dir)
    }

    /// Open the store in an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names of all bunches, in directory iteration order
    pub fn list(&self) -> Result<impl Iterator<Item = Result<String>>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| fs_error::read_failed(&self.dir, &e))?;

        Ok(entries.map(|entry| {
            entry
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .map_err(PackbunchError::from)
        }))
    }

    /// Ordered package identifiers of a bunch
    pub fn view(&self, name: &str) -> Result<Vec<String>> {
        check_name(name)?;
        self.ensure_exists(name)?;
        self.read_entries(name)
    }

    /// Create a new, empty bunch
    pub fn create(&self, name: &str) -> Result<()> {
        check_name(name)?;

        let path = self.bunch_path(name);
        if path.exists() {
            return Err(bunch::already_exists(name));
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => bunch::already_exists(name),
                _ => fs_error::write_failed(&path, &e),
            })?;
        log::debug!("Created {}", path.display());

        Ok(())
    }

    /// Delete a bunch file. Installed packages are left alone.
    pub fn delete(&self, name: &str) -> Result<()> {
        check_name(name)?;
        self.ensure_exists(name)?;

        let path = self.bunch_path(name);
        fs::remove_file(&path).map_err(|e| fs_error::write_failed(&path, &e))?;
        log::debug!("Removed {}", path.display());

        Ok(())
    }

    /// Append a package to a bunch
    pub fn add_package(&self, name: &str, package: &str) -> Result<()> {
        check_name(name)?;
        // Empty entries don't survive serialization
        if package.is_empty() || !valid_package_name(package) {
            return Err(package_error::invalid_name(package));
        }
        self.ensure_exists(name)?;

        let mut entries = self.read_entries(name)?;
        if entries.iter().any(|entry| entry == package) {
            return Err(bunch::duplicate_package(name, package));
        }
        entries.push(package.to_string());

        self.rewrite(name, &entries)
    }

    /// Remove a package from a bunch, keeping the order of the others
    ///
    /// The package name isn't validated, so entries added by hand that would
    /// fail validation can still be removed.
    pub fn remove_package(&self, name: &str, package: &str) -> Result<()> {
        check_name(name)?;
        self.ensure_exists(name)?;

        let mut entries = self.read_entries(name)?;
        let before = entries.len();
        entries.retain(|entry| entry != package);
        if entries.len() == before {
            return Err(bunch::package_not_found(name, package));
        }

        self.rewrite(name, &entries)
    }

    /// Copy a bunch file into the store, named after its last path component
    ///
    /// Returns the name of the imported bunch.
    pub fn import_bunch(&self, source: &Path) -> Result<String> {
        if !source.exists() {
            return Err(PackbunchError::SourceNotFound {
                path: source.display().to_string(),
            });
        }

        let name = source
            .file_name()
            .and_then(OsStr::to_str)
            .ok_or_else(|| bunch::invalid_name(source.display().to_string()))?;
        check_name(name)?;

        let target = self.bunch_path(name);
        if target.exists() {
            return Err(bunch::already_exists(name));
        }

        let contents = fs::read(source).map_err(|e| fs_error::read_failed(source, &e))?;
        fs::write(&target, contents).map_err(|e| fs_error::write_failed(&target, &e))?;
        log::debug!("Copied {} to {}", source.display(), target.display());

        Ok(name.to_string())
    }

    /// Copy a bunch file to `<target_dir><name>`
    ///
    /// `target_dir` is joined to the bunch name as a plain string, without a
    /// separator, so it should end in one (`/tmp/out/`). Returns the path that
    /// was written.
    pub fn export_bunch(&self, name: &str, target_dir: &str) -> Result<PathBuf> {
        check_name(name)?;
        self.ensure_exists(name)?;

        let dir = Path::new(target_dir);
        if !dir.exists() {
            return Err(PackbunchError::TargetDirectoryNotFound {
                path: target_dir.to_string(),
            });
        }
        if !dir.is_dir() {
            return Err(PackbunchError::NotADirectory {
                path: target_dir.to_string(),
            });
        }
        if !target_dir.ends_with(MAIN_SEPARATOR) && !target_dir.ends_with('/') {
            log::warn!(
                "Export path \"{target_dir}\" has no trailing separator; writing to \"{target_dir}{name}\""
            );
        }

        let target = PathBuf::from(format!("{target_dir}{name}"));
        if target.exists() {
            return Err(PackbunchError::TargetAlreadyExists {
                path: target.display().to_string(),
            });
        }

        let source = self.bunch_path(name);
        fs::copy(&source, &target).map_err(|e| fs_error::write_failed(&target, &e))?;
        log::debug!("Copied {} to {}", source.display(), target.display());

        Ok(target)
    }

    /// Replace the whole contents of a bunch file
    ///
    /// Not atomic: the file is truncated and written in place.
    pub(crate) fn rewrite(&self, name: &str, entries: &[String]) -> Result<()> {
        let path = self.bunch_path(name);
        fs::write(&path, format::serialize(entries))
            .map_err(|e| fs_error::write_failed(&path, &e))?;
        log::debug!("Wrote {} package(s) to {}", entries.len(), path.display());

        Ok(())
    }

    fn read_entries(&self, name: &str) -> Result<Vec<String>> {
        let path = self.bunch_path(name);
        let contents = fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, &e))?;

        Ok(format::parse(&contents))
    }

    fn ensure_exists(&self, name: &str) -> Result<()> {
        if self.bunch_path(name).exists() {
            Ok(())
        } else {
            Err(bunch::not_found(name))
        }
    }

    fn bunch_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

fn check_name(name: &str) -> Result<()> {
    if valid_bunch_name(name) {
        Ok(())
    } else {
        Err(bunch::invalid_name(name))
    }
}
