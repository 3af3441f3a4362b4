//! File path validation.

use std::path::Path;

use anyhow::{Result, bail};

use crate::config::EXCLUDED_PATTERNS;
use crate::file::operations::get_file_info;

/// Checks if a path matches any exclusion pattern.
pub fn is_excluded(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    let path_str = path_str.replace('\\', "/");
    let path_str = path_str.strip_prefix("./").unwrap_or(&path_str);

    EXCLUDED_PATTERNS.iter().any(|pattern| fast_glob::glob_match(pattern, path_str))
}

/// Validates an input file path.
///
/// # Arguments
/// * `path` - The file path
/// * `must_exist` - Whether the file must exist
pub fn validate_path(path: &Path, must_exist: bool) -> Result<()> {
    let info = get_file_info(path)?;

    if must_exist {
        match info {
            None => bail!("file not found: {}", path.display()),
            Some(info) if info.size == 0 => bail!("file is empty: {}", path.display()),
            _ => {}
        }

        if path.is_dir() {
            bail!("path is a directory: {}", path.display());
        }
    } else if info.is_some() {
        bail!("output file already exists: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_excluded_unix_paths() {
        assert!(is_excluded(Path::new("node_modules/package.json")));
        assert!(is_excluded(Path::new(".git/config")));
        assert!(is_excluded(Path::new("target/debug/binary")));
        assert!(is_excluded(Path::new(".vscode/settings.json")));
        assert!(is_excluded(Path::new("vendor/lib/file.rs")));

        assert!(is_excluded(Path::new("./.git/config")));
        assert!(is_excluded(Path::new("./node_modules/package.json")));
        assert!(is_excluded(Path::new("./target/release/app")));
    }

    #[test]
    fn test_is_excluded_windows_paths() {
        assert!(is_excluded(Path::new(r".git\config")));
        assert!(is_excluded(Path::new(r"node_modules\package.json")));
        assert!(is_excluded(Path::new(r"target\debug\binary")));
        assert!(is_excluded(Path::new(r".vscode\settings.json")));

        assert!(is_excluded(Path::new(r".\.git\config")));
        assert!(is_excluded(Path::new(r".\node_modules\package.json")));
        assert!(is_excluded(Path::new(r".\target\release\app")));
    }

    #[test]
    fn test_is_excluded_rust_sources() {
        assert!(is_excluded(Path::new("main.rs")));
        assert!(is_excluded(Path::new("src/lib.rs")));
    }

    #[test]
    fn test_is_not_excluded() {
        assert!(!is_excluded(Path::new("document.txt")));
        assert!(!is_excluded(Path::new("image.png")));
        assert!(!is_excluded(Path::new("data.json")));
        assert!(!is_excluded(Path::new("photo.jpg")));
        assert!(!is_excluded(Path::new("spreadsheet.xlsx")));
    }

    #[test]
    fn test_validate_path_not_found() {
        let path = PathBuf::from("/nonexistent/path/file.txt");
        assert!(validate_path(&path, true).is_err());
    }
}
