//! CLI command implementations

pub mod completions;
pub mod dataset;
pub mod failures;
pub mod fleet;
pub mod metrics;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::core::calendar::timestamped_path;

/// Apply the optional timestamp suffix to an output path
pub(crate) fn stamp_output(path: &Path, timestamp: bool) -> PathBuf {
    if timestamp {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        timestamped_path(path, &stamp)
    } else {
        path.to_path_buf()
    }
}

/// Refuse to clobber an existing file unless forced or confirmed
pub(crate) fn confirm_overwrite(path: &Path, force: bool) -> Result<()> {
    if force || !path.exists() {
        return Ok(());
    }

    if console::user_attended() {
        let overwrite = dialoguer::Confirm::new()
            .with_prompt(format!("{} exists, overwrite?", path.display()))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if overwrite {
            return Ok(());
        }
    }

    Err(miette::miette!(
        "refusing to overwrite {}; pass --force to replace it",
        path.display()
    ))
}

/// Serialize rows to CSV at the given path, creating parent directories
/// ahead of the write
pub(crate) fn write_csv<S: Serialize>(rows: &[S], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).into_diagnostic()?;
        }
    }

    let file = File::create(path).into_diagnostic()?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));
    for row in rows {
        wtr.serialize(row).into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}

/// Print a rendered listing to stdout, or write it to a file
pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Success line echoing the seed so the run can be reproduced
pub(crate) fn report_written(rows: usize, path: &Path, seed: u64, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "{} Wrote {} rows to {} (seed {})",
        style("✓").green(),
        rows,
        style(path.display()).cyan(),
        seed
    );
}
