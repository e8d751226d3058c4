//! Input file resolution and decode.
//!
//! Patterns come in as one comma-separated string of globs. Every pattern
//! must match something, and the combined match list is sorted so document
//! order never depends on filesystem enumeration order.

use super::ProgSpec;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One decoded specification file, paired with the path it was read from.
///
/// The path is kept because screen images resolve relative to the file that
/// references them.
#[derive(Debug, Clone)]
pub struct SpecFile {
    pub path: PathBuf,
    pub spec: ProgSpec,
}

impl SpecFile {
    /// Directory that relative image paths in this file resolve against.
    pub fn image_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Expand a comma-separated list of glob patterns into a sorted file list.
///
/// A pattern with zero matches is an error: a silently empty document is
/// worse than a failed run. Matches are concatenated across patterns and
/// then sorted lexicographically as one list.
pub fn resolve_patterns(patterns: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns.split(',') {
        let matches: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern {pattern:?}"))?
            .collect::<Result<_, _>>()
            .with_context(|| format!("expand glob pattern {pattern:?}"))?;
        if matches.is_empty() {
            return Err(anyhow!("no files match {pattern:?}"));
        }
        files.extend(matches);
    }
    files.sort();
    Ok(files)
}

/// Decode one specification file. Any decode failure is fatal to the whole
/// run; partial documents are never produced.
pub fn load_file(path: &Path) -> Result<SpecFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read specification file {}", path.display()))?;
    let spec: ProgSpec = serde_yaml::from_str(&text)
        .with_context(|| format!("parse specification file {}", path.display()))?;
    Ok(SpecFile {
        path: path.to_path_buf(),
        spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "modules: []\n").expect("write fixture");
        path
    }

    #[test]
    fn matches_are_sorted_lexicographically() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "b.yaml");
        touch(dir.path(), "a.yaml");
        touch(dir.path(), "c.yaml");

        let pattern = dir.path().join("*.yaml").display().to_string();
        let files = resolve_patterns(&pattern).expect("resolve");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.yaml", "b.yaml", "c.yaml"]);
    }

    #[test]
    fn comma_separated_patterns_combine_and_sort() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(dir.path(), "z.yaml");
        touch(dir.path(), "a.yml");

        let pattern = format!(
            "{},{}",
            dir.path().join("*.yaml").display(),
            dir.path().join("*.yml").display()
        );
        let files = resolve_patterns(&pattern).expect("resolve");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.yml", "z.yaml"]);
    }

    #[test]
    fn unmatched_pattern_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pattern = dir.path().join("*.yaml").display().to_string();
        let err = resolve_patterns(&pattern).unwrap_err();
        assert!(err.to_string().contains("no files match"));
    }

    #[test]
    fn load_reports_the_failing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "modules: [unterminated\n").expect("write fixture");
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.yaml"));
    }

    #[test]
    fn load_accepts_unknown_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("extra.yaml");
        fs::write(&path, "modules: []\nfuture_field: 1\n").expect("write fixture");
        let loaded = load_file(&path).expect("load");
        assert!(loaded.spec.modules.is_empty());
        assert_eq!(loaded.image_dir(), dir.path());
    }
}
