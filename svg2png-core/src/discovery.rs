//! Input resolution for file names and glob patterns.
//!
//! This module expands a user-supplied input token into the set of existing
//! files it names. A token that is already an existing file is returned
//! as-is; anything else is treated as a glob pattern.

use crate::error::CoreResult;

use log::debug;
use std::path::{Path, PathBuf};

/// Resolves an input token into concrete file paths.
///
/// A token naming an existing file resolves to exactly that file without any
/// glob machinery, so file names containing glob metacharacters still work.
/// Otherwise the token is expanded as a glob pattern and every matching
/// file is returned; matching directories are skipped. Match order follows
/// the file system scan and is not guaranteed.
///
/// # Arguments
///
/// * `token` - A file name or glob pattern, as typed by the user
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The matched files; empty when nothing matched.
///   Deciding whether an empty match is an error is left to the caller.
/// * `Err(CoreError::Pattern)` - If the token is not a valid glob pattern
/// * `Err(CoreError::Scan)` - If the file system scan fails mid-walk
///
/// # Examples
///
/// ```rust,no_run
/// use svg2png_core::resolve_input_token;
///
/// match resolve_input_token("icons/*.svg") {
///     Ok(files) => println!("Matched {} file(s)", files.len()),
///     Err(e) => eprintln!("Could not expand pattern: {e}"),
/// }
/// ```
pub fn resolve_input_token(token: &str) -> CoreResult<Vec<PathBuf>> {
    let literal = Path::new(token);
    if literal.is_file() {
        debug!("'{token}' is an existing file, skipping glob expansion");
        return Ok(vec![literal.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in glob::glob(token)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    debug!("'{}' expanded to {} file(s)", token, files.len());
    Ok(files)
}
