//! Shared helpers for the CLI tests.
//!
//! `TestEnv` runs the kvseed binary from an empty temp directory with an
//! isolated HOME, so neither a local `kvseed.toml` nor the user config of
//! the machine running the tests leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const KVSEED_ENV: &[&str] = &[
    "KVSEED_STORE_HOST",
    "KVSEED_STORE_PORT",
    "KVSEED_TIMEOUT_SECS",
    "KVSEED_HOSTNAME",
    "KVSEED_LOG",
];

#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// stdout parsed as NDJSON, one value per line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?} ({e})"))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("work dir"),
            home_dir: TempDir::new().expect("home dir"),
        }
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.work_dir.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_kvseed"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1");

        for key in KVSEED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute kvseed");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Port of a running mock server, as a CLI argument
pub fn port_of(server: &mockito::ServerGuard) -> String {
    server.socket_address().port().to_string()
}

/// A port nothing listens on
pub fn closed_port() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    port.to_string()
}

/// `--store-host 127.0.0.1 --store-port PORT --hostname node1` followed by `rest`
pub fn store_args<'a>(port: &'a str, rest: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec![
        "--store-host",
        "127.0.0.1",
        "--store-port",
        port,
        "--hostname",
        "node1",
    ];
    args.extend_from_slice(rest);
    args
}
