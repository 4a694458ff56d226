//! Shared utilities for commands

use anyhow::{Context, Result};
use fs_extra::dir::{self, CopyOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Format bytes as human-readable size
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Strip Windows extended-length path prefix (\\?\)
///
/// On Windows, `canonicalize()` returns paths like `\\?\C:\path` which
/// display poorly in summaries. This strips the prefix.
pub fn strip_windows_prefix(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    if let Some(stripped) = path_str.strip_prefix(r"\\?\") {
        PathBuf::from(stripped)
    } else {
        path.to_path_buf()
    }
}

/// Copy directory contents into an existing directory (merge, overwrite)
pub fn copy_dir_contents(src: &Path, dst: &Path) -> Result<()> {
    let options = CopyOptions::new().content_only(true).overwrite(true);
    dir::copy(src, dst, &options).with_context(|| {
        format!(
            "Failed to copy contents of {} to {}",
            src.display(),
            dst.display()
        )
    })?;
    Ok(())
}

/// Resolve a destination argument to an absolute path, best-effort
///
/// Canonicalizes the path if it exists, or the parent if only the parent
/// exists. A path whose parent does not exist yet is returned as given.
pub fn resolve_destination(raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);

    if let Ok(resolved) = path.canonicalize() {
        return strip_windows_prefix(&resolved);
    }

    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };
        if let Ok(parent) = parent.canonicalize() {
            return strip_windows_prefix(&parent.join(name));
        }
    }

    path
}

/// Prompt `(y/N)` and return whether the user confirmed
///
/// Anything other than `y`/`Y` (including EOF) counts as no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} (y/N) ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
