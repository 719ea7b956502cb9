//! Output abstraction for testable printing
//!
//! Command handlers print through [`Output`] so tests can capture verdict
//! reports instead of writing to the terminal.

use crate::error::CliResult;

/// Sink for verdict reports and failures
pub trait Output: Send + Sync {
    /// Print one report line
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Print a JSON report, pretty-printed
    fn print_json(&self, data: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(data)?)
    }

    /// Print a failure
    fn error(&self, msg: &str) -> CliResult<()>;

    /// Print an underlined section title
    fn header(&self, title: &str) -> CliResult<()> {
        self.print(&format!("\n{}\n{}", title, "=".repeat(title.len())))
    }
}

/// Reports go to stdout, failures to stderr
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> CliResult<()> {
        eprintln!("❌ {}", msg);
        Ok(())
    }
}
