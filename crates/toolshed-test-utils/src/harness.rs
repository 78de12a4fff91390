use std::fs;
use std::path::PathBuf;
use toolshed_core::config::ShellContext;
use toolshed_core::constants::dirs;

/// Self-cleaning workspace for exercising runners and tool bindings.
pub struct TestContext {
    pub _temp_dir: tempfile::TempDir,
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::Builder::new()
            .prefix("toolshed-test-")
            .tempdir()
            .expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();

        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Context whose out dir and work dir both live under the temp root.
    pub fn shell_context(&self) -> ShellContext {
        let mut ctx = ShellContext::new(self.root.join(dirs::OUT));
        ctx.work_dir = Some(self.root.clone());
        ctx
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read '{}': {}", rel, e))
    }

    /// Create an empty file, including parent directories.
    pub fn touch(&self, rel: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "").expect("Failed to touch file");
        path
    }

    /// Write an executable stub script under the temp root and return its
    /// path. Stubs stand in for installer and dotenv helper programs.
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");

        let mut perms = fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
