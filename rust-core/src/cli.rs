// Shared plumbing of the command line filters

use std::path::PathBuf;

use anyhow::{Error, Result};
use env_logger::Env;
#[cfg(feature = "parallel")]
use log::info;
#[cfg(not(feature = "parallel"))]
use log::warn;

/// Initialize logging to stderr; `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
}

/// Set thread pool size if specified
pub fn configure_threads(threads: Option<usize>) -> Result<()> {
    if let Some(threads) = threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| Error::msg(format!("Failed to set thread pool size: {}", e)))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }
    Ok(())
}

/// Files to process, or a single `None` standing for stdin/stdout.
pub fn targets(files: Vec<PathBuf>) -> Vec<Option<PathBuf>> {
    if files.is_empty() {
        vec![None]
    } else {
        files.into_iter().map(Some).collect()
    }
}

/// Display name of a target for progress reports.
pub fn target_name(target: Option<&PathBuf>) -> String {
    target.map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
}

/// Arguments of the current invocation, without the program name.
pub fn invocation_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Exactly `N` values of a multi-valued option.
pub fn fixed<T: Copy, const N: usize>(values: &[T], option: &str) -> Result<[T; N]> {
    <[T; N]>::try_from(values).map_err(|_| {
        Error::msg(format!(
            "Improper {} specification: expected {} values, got {}.",
            option,
            N,
            values.len()
        ))
    })
}
