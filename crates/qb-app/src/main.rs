use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use qb_core::config::BarConfig;
use qb_core::render_progress_bar;

pub mod cli;
pub mod metrics;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialise logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Validate arguments
    cli.validate_values()?;

    // 4. Load config, CLI overrides on top
    let mut config = match cli.config.as_deref() {
        Some(path) => qb_core::config::load_config(path)?,
        None => BarConfig::default(),
    };
    if let Some(interval) = cli.interval {
        config.interval_ms = interval.max(1);
    }
    if cli.bare {
        config.left_delimiter.clear();
        config.right_delimiter.clear();
    }

    // 5. Explicit values render once; sampling mode may loop
    if let [p1, p2, p3, p4] = cli.values[..] {
        if cli.watch {
            log::warn!("--watch has no effect with explicit values");
        }
        print_bar(&config, &render_progress_bar(p1, p2, p3, p4));
        return Ok(());
    }

    let interval = Duration::from_millis(config.interval_ms);
    loop {
        let m = metrics::sample();
        log::debug!(
            "cpu={:.1} ram={:.1} gpu={:.1} vram={:.1}",
            m.cpu,
            m.ram,
            m.gpu,
            m.vram
        );
        let bar = render_progress_bar(
            m.cpu.round() as i64,
            m.ram.round() as i64,
            m.gpu.round() as i64,
            m.vram.round() as i64,
        );
        print_bar(&config, &bar);
        if !cli.watch {
            break;
        }
        std::thread::sleep(interval);
    }
    Ok(())
}

/// Print one bar line wrapped in the configured delimiters.
fn print_bar(config: &BarConfig, bar: &str) {
    println!(
        "{}{}{}",
        config.left_delimiter, bar, config.right_delimiter
    );
}
