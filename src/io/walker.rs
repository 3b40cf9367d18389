use crate::errors::Result;
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Extensions treated as C sources
pub const C_EXTENSIONS: &[&str] = &["c", "h"];

pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    ignore_patterns: Vec<Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: C_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore_patterns: vec![],
        }
    }

    /// Glob patterns matched against paths relative to the walk root.
    /// A trailing `/` is dropped, so `build/` skips everything below `build`.
    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|raw| {
                let trimmed = raw.trim_end_matches('/');
                match Pattern::new(trimmed) {
                    Ok(pattern) => Some(pattern),
                    Err(e) => {
                        log::warn!("Skipping invalid ignore pattern '{raw}': {e}");
                        None
                    }
                }
            })
            .collect();
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        if !self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
            return false;
        }

        !self.is_ignored(path)
    }

    /// The file itself or any directory between it and the root may match.
    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .any(|candidate| {
                self.ignore_patterns
                    .iter()
                    .any(|pattern| pattern.matches_path(candidate))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_c_sources_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.c"), "int main() {}").unwrap();
        fs::write(dir.path().join("util.h"), "int util(void);").unwrap();
        fs::write(dir.path().join("notes.txt"), "if").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.C"), "").unwrap();

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names.len(), 3);
        assert!(names.contains(&"main.c".to_string()));
        assert!(names.contains(&"util.h".to_string()));
        assert!(names.contains(&"deep.C".to_string()));
    }

    #[test]
    fn test_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.c"), "").unwrap();
        fs::write(dir.path().join("app.c"), "").unwrap();

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["vendor".to_string()])
            .walk()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.c"));
    }

    #[test]
    fn test_root_below_ignored_directory_name() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("build/proj");
        fs::create_dir_all(root.join("build")).unwrap();
        fs::write(root.join("main.c"), "int main() {}").unwrap();
        fs::write(root.join("build/gen.c"), "").unwrap();

        let patterns = crate::config::parse_and_validate_config(crate::config::DEFAULT_CONFIG_TOML)
            .unwrap()
            .ignore_patterns();
        let files = FileWalker::new(root.clone())
            .with_ignore_patterns(patterns)
            .walk()
            .unwrap();

        assert_eq!(files, vec![root.join("main.c")]);
    }

    #[test]
    fn test_glob_pattern_on_file_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("x.gen.c"), "").unwrap();
        fs::write(dir.path().join("sub/y.gen.c"), "").unwrap();
        fs::write(dir.path().join("x.c"), "").unwrap();

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["*.gen.c".to_string()])
            .walk()
            .unwrap();

        assert_eq!(files, vec![dir.path().join("x.c")]);
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.c"), "").unwrap();

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["[".to_string()])
            .walk()
            .unwrap();

        assert_eq!(files.len(), 1);
    }
}
