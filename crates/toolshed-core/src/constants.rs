pub mod dirs {
    pub const OUT: &str = "out";
    pub const BIN: &str = "bin";
}

pub mod env_files {
    pub const BASE: &str = ".env";
    pub const LOCAL_SUFFIX: &str = "local";
}

pub mod profiles {
    pub const LOCAL: &str = "local";
}

pub mod installers {
    pub const CARGO: &str = "cargo";
    pub const BREW: &str = "brew";
    pub const DOTENV: &str = "dotenv";
}

pub mod shells {
    pub const SH: &str = "sh";
}

pub mod env_vars {
    pub const OUT: &str = "TOOLSHED_OUT";
    pub const VERBOSE: &str = "TOOLSHED_VERBOSE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_constants() {
        assert_eq!(dirs::OUT, "out");
        assert_eq!(dirs::BIN, "bin");
    }

    #[test]
    fn test_env_file_constants() {
        assert_eq!(env_files::BASE, ".env");
        assert_eq!(env_files::LOCAL_SUFFIX, "local");
    }

    #[test]
    fn test_profile_constants() {
        assert_eq!(profiles::LOCAL, "local");
    }

    #[test]
    fn test_installer_constants() {
        assert_eq!(installers::CARGO, "cargo");
        assert_eq!(installers::BREW, "brew");
    }
}
