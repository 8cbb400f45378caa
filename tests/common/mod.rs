use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

#[allow(dead_code)]
pub fn run_scribe(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    data: TempDir,
    work: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            data: tempfile::tempdir().expect("create temporary XDG data dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_scribe"))
            .args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("XDG_DATA_HOME", self.data.path())
            .output()
            .expect("failed to execute scribe binary")
    }

    /// Directory the binary runs in; reports land here.
    #[allow(dead_code)]
    pub fn work_path(&self) -> &Path {
        self.work.path()
    }

    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }

    /// Install an executable that answers `-version` with exit 0, so
    /// the decoder gate passes without a real ffmpeg.
    #[allow(dead_code)]
    #[cfg(unix)]
    pub fn install_stub_ffmpeg(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.data.path().join("ffmpeg");
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").expect("write stub ffmpeg");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("make stub ffmpeg executable");
        path
    }
}
