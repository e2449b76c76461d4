//! Reading protocol specs from text files.

use std::{fs, path::Path};

use log::debug;

use crate::error::CliError;

const COMMENT_PREFIX: char = '#';

/// Returns every spec (or protocol name) listed in `path`, one per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn read_specs(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let specs = specs_from_str(&content);

    if specs.is_empty() {
        return Err(CliError::NoSpecs(path.to_path_buf()));
    }

    debug!("read {} spec(s) from {}", specs.len(), path.display());
    Ok(specs)
}

fn specs_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# transport headers").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  udp  ").unwrap();
        writeln!(file, "\t").unwrap();
        writeln!(file, "Type:8,Code:8,Checksum:16?numbers=n").unwrap();
        writeln!(file, "   # indented comment").unwrap();

        let specs = read_specs(file.path()).unwrap();
        assert_eq!(specs, vec!["udp", "Type:8,Code:8,Checksum:16?numbers=n"]);
    }

    #[test]
    fn test_file_without_specs() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        writeln!(file, "   ").unwrap();

        let err = read_specs(file.path()).unwrap_err();
        assert!(matches!(err, CliError::NoSpecs(p) if p == file.path()));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = read_specs(&path).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(specs_from_str("tcp\r\nudp\r\n"), vec!["tcp", "udp"]);
    }
}
