use std::path::PathBuf;

use clap::Parser;

/// quadbar — four percentage channels in one 10-cell Braille bar.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
pub struct Cli {
    /// Four percentage values (0-100) to render directly.
    /// Omit to sample system metrics (CPU, RAM, GPU, VRAM) instead.
    #[arg(value_name = "PERCENT", num_args = 0..=4)]
    pub values: Vec<i64>,

    /// TOML config file (delimiters, watch interval).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Re-sample and re-print the bar continuously.
    #[arg(long, default_value_t = false)]
    pub watch: bool,

    /// Refresh period in milliseconds (overrides the config file).
    #[arg(long)]
    pub interval: Option<u64>,

    /// Print the bar without surrounding delimiters.
    #[arg(long, default_value_t = false)]
    pub bare: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that either zero or exactly four values were given.
    ///
    /// # Errors
    /// Returns an error for any other count.
    pub fn validate_values(&self) -> anyhow::Result<()> {
        if !self.values.is_empty() && self.values.len() != 4 {
            anyhow::bail!(
                "expected 4 percentage values (p1 p2 p3 p4), got {}",
                self.values.len()
            );
        }
        Ok(())
    }
}
