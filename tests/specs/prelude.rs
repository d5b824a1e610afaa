//! Shared harness for black-box CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const ADMIN: &str = "hunter2-admin";

/// A data directory the CLI runs against
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// No config file: built-in curriculum, admin mode unavailable
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Admin password configured and the premium tier granted
    pub fn configured() -> Self {
        let project = Self::empty();
        project.file(
            "config.toml",
            &format!("admin_password = \"{ADMIN}\"\npremium_entitlements = [\"premium\"]\n"),
        );
        project
    }

    pub fn file(&self, name: &str, contents: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn af(&self) -> CliBuilder {
        CliBuilder {
            dir: self.dir.path().to_path_buf(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    /// Issue one code through the CLI
    pub fn issue_code(&self) -> String {
        self.af()
            .args(&["code", "generate", "--admin-password", ADMIN])
            .passes()
            .stdout()
            .trim()
            .to_string()
    }
}

pub struct CliBuilder {
    dir: std::path::PathBuf,
    args: Vec<String>,
    env: Vec<(String, String)>,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    fn run(self) -> RunAssert {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("af").unwrap();
        cmd.arg("--data-dir")
            .arg(&self.dir)
            .env_remove("AF_DATA_DIR")
            .env_remove("AF_ADMIN_PASSWORD")
            .env_remove("RUST_LOG")
            .args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        let output = cmd.output().unwrap();
        RunAssert {
            args: self.args,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Run and require exit code 0
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert_eq!(
            run.code,
            Some(0),
            "af {:?} failed\nstdout:\n{}\nstderr:\n{}",
            run.args,
            run.stdout,
            run.stderr
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert_ne!(
            run.code,
            Some(0),
            "af {:?} unexpectedly passed\nstdout:\n{}",
            run.args,
            run.stdout
        );
        run
    }
}

pub struct RunAssert {
    args: Vec<String>,
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(
            self.stdout.contains(expected),
            "stdout missing {:?}:\n{}",
            expected,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.stdout.contains(unexpected),
            "stdout unexpectedly has {:?}:\n{}",
            unexpected,
            self.stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(
            self.stderr.contains(expected),
            "stderr missing {:?}:\n{}",
            expected,
            self.stderr
        );
        self
    }
}
