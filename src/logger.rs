use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;

/// Install the global logger described by `config`.
///
/// Does nothing when logging is disabled, so `log` macros stay no-ops.
/// Records are written as `[timestamp LEVEL target] message` to the
/// configured file, or to stderr when no file is set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?);

    let dispatch = match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    log::debug!("logging initialized at level {}", config.level);
    Ok(())
}
