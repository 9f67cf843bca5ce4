//! Registered programs and how they are started.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::LaunchConfig;

/// A program the launcher knows how to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    pub name: &'static str,
    /// Executable looked up on the search path.
    pub executable: &'static str,
}

pub const PROGRAMS: [Program; 1] = [Program {
    name: "icerisk",
    executable: "icerisk",
}];

impl Program {
    pub fn find(name: &str) -> Result<&'static Program, LaunchError> {
        PROGRAMS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| LaunchError::UnknownProgram {
                name: name.to_string(),
                available: PROGRAMS.iter().map(|p| p.name).collect::<Vec<_>>().join(", "),
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{0} is not installed")]
    NotInstalled(&'static str),

    #[error("Unknown program '{name}' (available: {available})")]
    UnknownProgram { name: String, available: String },

    #[error("{program}: {message}")]
    Runner {
        program: &'static str,
        message: String,
    },
}

/// What a launch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No section configured, nothing was started.
    Skipped,
    Completed,
}

#[derive(Debug, Clone, Default)]
pub struct Launcher {
    search_path: Option<OsString>,
}

impl Launcher {
    /// Look up executables on `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up executables on the given search path instead of `PATH`.
    pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
        self.search_path = Some(path.into());
        self
    }

    fn locate(&self, program: &Program) -> Result<PathBuf, LaunchError> {
        let found = match &self.search_path {
            Some(paths) => which::which_in(program.executable, Some(paths), "."),
            None => which::which(program.executable),
        };
        found.map_err(|err| {
            tracing::debug!("{} not found: {err}", program.executable);
            LaunchError::NotInstalled(program.name)
        })
    }

    pub fn launch(&self, program: &Program, config: &LaunchConfig) -> Result<Outcome, LaunchError> {
        let Some(section) = config.section() else {
            tracing::info!("No REBooT_section configured, not starting {}", program.name);
            return Ok(Outcome::Skipped);
        };

        let executable = self.locate(program)?;
        tracing::info!(path = %executable.display(), section, "starting {}", program.name);

        let mut command = Command::new(&executable);
        if let Some(reboot_config) = &config.reboot_config {
            command.arg("--config").arg(reboot_config);
        }
        command
            .arg("--section")
            .arg(section)
            .env("DATABASE_URL", &config.database_url);
        if let Some(redis_url) = &config.redis_url {
            command.env("REDIS_URL", redis_url);
        }

        let status = command.status().map_err(|err| LaunchError::Runner {
            program: program.name,
            message: err.to_string(),
        })?;
        if !status.success() {
            return Err(LaunchError::Runner {
                program: program.name,
                message: format!("exited with {status}"),
            });
        }

        Ok(Outcome::Completed)
    }
}
