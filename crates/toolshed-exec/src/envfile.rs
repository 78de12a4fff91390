use crate::error::Result;
use std::path::Path;
use toolshed_core::constants::{env_files, profiles};
use toolshed_core::errors::ConfigError;

/// The two environment files a profile loads, highest priority first.
///
/// The per-developer `.local` variant is listed before the shared file so
/// its values win. An omitted profile behaves like the default `"local"`
/// profile.
pub fn env_file_chain(profile: Option<&str>) -> [String; 2] {
    let base = match profile {
        Some(p) if p != profiles::LOCAL => format!("{}.{}", env_files::BASE, p),
        _ => env_files::BASE.to_string(),
    };
    [format!("{}.{}", base, env_files::LOCAL_SUFFIX), base]
}

/// Create the per-developer override files if they are missing. Existing
/// files are never touched.
pub fn ensure_local_overrides(dir: &Path, profile: &str) -> Result<()> {
    let mut names = vec![format!(
        "{}.{}",
        env_files::BASE,
        env_files::LOCAL_SUFFIX
    )];
    if profile != profiles::LOCAL {
        names.push(format!(
            "{}.{}.{}",
            env_files::BASE,
            profile,
            env_files::LOCAL_SUFFIX
        ));
    }

    for name in names {
        fs_err::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(name))
            .map_err(ConfigError::Io)?;
    }
    Ok(())
}

/// Prefix that makes the dotenv helper load the profile's env files before
/// the wrapped command runs.
pub fn dotenv_prefix(dotenv: &Path, profile: &str) -> String {
    let [local, base] = env_file_chain(Some(profile));
    format!("{} -f {},{}", dotenv.display(), local, base)
}
