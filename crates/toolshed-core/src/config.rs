use crate::constants::{dirs, env_vars, installers};
use std::env;
use std::path::PathBuf;

/// Settings shared by command runners and tool bindings for one build-script
/// invocation. Replaces ambient globals with an explicit value passed to
/// every call.
#[derive(Debug, Clone)]
pub struct ShellContext {
    /// Root directory for tool artifacts. Compiled binaries land in
    /// `<out_dir>/bin`.
    pub out_dir: PathBuf,
    /// Directory commands run in and `.env` files are read from. `None` uses
    /// the process working directory.
    pub work_dir: Option<PathBuf>,
    /// Echo fully constructed command strings before running them.
    pub verbose: bool,
    /// The dotenv-loading helper executable.
    pub dotenv: PathBuf,
    /// The source-ecosystem installer.
    pub cargo: PathBuf,
    /// The system package manager.
    pub brew: PathBuf,
}

impl ShellContext {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            work_dir: None,
            verbose: false,
            dotenv: PathBuf::from(installers::DOTENV),
            cargo: PathBuf::from(installers::CARGO),
            brew: PathBuf::from(installers::BREW),
        }
    }

    /// Context configured from `TOOLSHED_OUT` and `TOOLSHED_VERBOSE`.
    pub fn from_env() -> Self {
        let out_dir = env::var(env_vars::OUT)
            .map(|raw| PathBuf::from(shellexpand::tilde(&raw).into_owned()))
            .unwrap_or_else(|_| PathBuf::from(dirs::OUT));

        let mut ctx = Self::new(out_dir);
        ctx.verbose = env::var(env_vars::VERBOSE).is_ok_and(|v| !v.is_empty() && v != "0");
        ctx
    }

    /// Directory compiled tool binaries are installed into.
    pub fn bin_dir(&self) -> PathBuf {
        self.out_dir.join(dirs::BIN)
    }
}
