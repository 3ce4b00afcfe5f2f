use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

pub const LEDGER_HEADER: &str = "id,date,name,amount,category,notes";

pub struct CliOutput {
    pub stdout: String,
    #[allow(dead_code)]
    pub stderr: String,
}

/// Runs the tracker binary in script mode inside a private working directory
/// that also serves as the tracker home.
pub struct CliHarness {
    home: TempDir,
}

impl CliHarness {
    pub fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp dir"),
        }
    }

    #[allow(dead_code)]
    pub fn home(&self) -> &TempDir {
        &self.home
    }

    #[allow(dead_code)]
    pub fn ledger_path(&self) -> PathBuf {
        self.home.path().join("expenses.csv")
    }

    #[allow(dead_code)]
    pub fn write_ledger(&self, contents: &str) {
        self.home
            .child("expenses.csv")
            .write_str(contents)
            .expect("write ledger fixture");
    }

    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.home.path().join(name)).expect("read file")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("expense_tracker_cli").expect("binary exists");
        cmd.current_dir(self.home.path())
            .env("EXPENSE_TRACKER_HOME", self.home.path())
            .env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
            .env_remove("EXPENSE_TRACKER_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Feeds `script` to stdin and requires a successful exit.
    pub fn run_script(&self, script: &str) -> CliOutput {
        let output = self
            .command()
            .write_stdin(script.to_string())
            .output()
            .expect("run script CLI");
        if !output.status.success() {
            panic!(
                "script CLI failed: status={}\nstdout:\n{}\nstderr:\n{}",
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Script answers for the add form: name, amount, category, date, notes.
#[allow(dead_code)]
pub fn add_script(name: &str, amount: &str, category: &str, date: &str, notes: &str) -> String {
    format!("1\n{name}\n{amount}\n{category}\n{date}\n{notes}\n")
}
