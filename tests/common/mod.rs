use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Isolated environment for running the `simscore` binary
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        // The binary resolves its config under XDG_CONFIG_HOME
        let config_dir = temp_dir.path().join("config");
        fs::create_dir_all(config_dir.join("simscore")).expect("Failed to create config dir");
        let config_path = config_dir.join("simscore").join("config.json");

        TestContext {
            temp_dir,
            config_path,
        }
    }

    /// Write `json` as the default config file
    pub fn write_config(&self, json: &str) {
        fs::write(&self.config_path, json).expect("Failed to write config");
    }

    /// Write a file inside the temp dir and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run the binary with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_simscore"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"))
            .env("HOME", self.temp_dir.path())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run simscore")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
