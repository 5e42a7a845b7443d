use std::ffi::OsString;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::interfaces::Sink;

/// Read a whole file, or standard input when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Write `text` to standard output or replace the target file.
///
/// Files are written to a sibling `<name>_tmp` first and renamed over the
/// target, so an interrupted run leaves the original intact.
pub fn write_output(sink: &Sink, text: &str) -> Result<()> {
    match sink {
        Sink::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write standard output")
        }
        Sink::File(path) => {
            let tmp = temporary_path(path);
            fs::write(&tmp, text)
                .with_context(|| format!("Failed to write {}", tmp.display()))?;
            fs::rename(&tmp, path)
                .with_context(|| format!("Failed to replace {}", path.display()))
        }
    }
}

/// Comment line recording which filter produced a file and how it was called.
pub fn execution_stamp(script: &str, args: &[String]) -> String {
    format!("{} v{}\t{}", script, crate::VERSION, args.join(" "))
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push("_tmp");
    PathBuf::from(name)
}
