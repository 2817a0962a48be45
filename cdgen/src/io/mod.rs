use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;

pub mod cli;

/// Rejects output paths without a `.json` extension, before any generation work is done.
pub fn check_json_path(path: &Path) -> Result<()> {
    ensure!(
        path.extension().is_some_and(|ext| ext == "json"),
        "output file must have a .json extension: {path:?}"
    );
    Ok(())
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("could not create output file: {path:?}"))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("could not write output file: {path:?}"))?;
    // Drop would swallow a failed flush
    writer
        .flush()
        .with_context(|| format!("could not flush output file: {path:?}"))?;
    info!(
        "instance written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{:<27}{}", prefix, message))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("epoch: {}", jiff::Zoned::now());
    Ok(())
}
