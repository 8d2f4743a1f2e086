use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;
use crate::core::extract::SUPPORTED_EXTENSIONS;

/// Patterns without `*` or `?` are literal paths, so `app/[locale]` needs no escaping.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Scannable files in lexicographic order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    if ignore_test_files {
        glob_patterns.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    let roots = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        resolve_includes(base_dir, includes, verbose)
    };

    for root in roots {
        for entry in WalkDir::new(root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file() && is_scannable_file(path) {
                files.insert(path_str.into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn resolve_includes(base_dir: &str, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for inc in includes {
        let full = Path::new(base_dir).join(inc);
        if is_glob_pattern(inc) {
            match glob(&full.to_string_lossy()) {
                Ok(entries) => paths.extend(entries.flatten()),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else if full.exists() {
            paths.push(full);
        } else if verbose {
            eprintln!(
                "{} Include path does not exist: {}",
                "warning:".bold().yellow(),
                full.display()
            );
        }
    }
    paths
}

pub fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn names(result: &ScanResult) -> Vec<String> {
        result
            .files
            .iter()
            .filter_map(|f| Path::new(f).file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_scan_component_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("App.vue")).unwrap();
        File::create(dir_path.join("Nav.svelte")).unwrap();
        File::create(dir_path.join("index.html")).unwrap();
        File::create(dir_path.join("main.ts")).unwrap();
        File::create(dir_path.join("styles.css")).unwrap();
        File::create(dir_path.join("README.md")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false, false);

        assert_eq!(
            names(&result),
            vec!["App.vue", "Nav.svelte", "index.html", "main.ts"]
        );
        assert_eq!(result.skipped_count, 0);
    }

    #[test]
    fn test_scan_ignores_node_modules() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let node_modules = dir_path.join("node_modules");
        fs::create_dir(&node_modules).unwrap();
        File::create(node_modules.join("lib.js")).unwrap();
        File::create(dir_path.join("app.vue")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["**/node_modules/**".to_owned()],
            false,
            false,
        );

        assert_eq!(names(&result), vec!["app.vue"]);
    }

    #[test]
    fn test_is_scannable_file() {
        assert!(is_scannable_file(Path::new("Card.vue")));
        assert!(is_scannable_file(Path::new("page.HTML")));
        assert!(is_scannable_file(Path::new("layout.hbs")));
        assert!(is_scannable_file(Path::new("config.mjs")));
        assert!(!is_scannable_file(Path::new("style.scss")));
        assert!(!is_scannable_file(Path::new("Makefile")));
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let src = dir_path.join("src");
        let scripts = dir_path.join("scripts");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&scripts).unwrap();
        File::create(src.join("Page.vue")).unwrap();
        File::create(scripts.join("build.js")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["src".to_owned(), "missing".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(names(&result), vec!["Page.vue"]);
    }

    #[test]
    fn test_scan_ignores_test_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("Button.vue")).unwrap();
        File::create(dir_path.join("Button.spec.ts")).unwrap();
        File::create(dir_path.join("Button.test.js")).unwrap();

        let root = dir_path.to_str().unwrap();
        let ignored = scan_files(root, &[], &[], true, false);
        assert_eq!(names(&ignored), vec!["Button.vue"]);

        let kept = scan_files(root, &[], &[], false, false);
        assert_eq!(kept.files.len(), 3);
    }

    #[test]
    fn test_scan_deduplicates_overlapping_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let nested = dir_path.join("src").join("components");
        fs::create_dir_all(&nested).unwrap();
        File::create(nested.join("Card.svelte")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["src".to_owned(), "src/components".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_with_glob_include_and_literal_bracket_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let locale = dir_path.join("app").join("[locale]");
        let packages = dir_path.join("packages").join("ui");
        fs::create_dir_all(&locale).unwrap();
        fs::create_dir_all(&packages).unwrap();
        File::create(locale.join("page.tsx")).unwrap();
        File::create(packages.join("Menu.vue")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["app/[locale]".to_owned(), "packages/*".to_owned()],
            &[],
            false,
            false,
        );

        assert_eq!(names(&result), vec!["page.tsx", "Menu.vue"]);
    }

    #[test]
    fn test_scan_ignores_literal_directory_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let generated = dir_path.join("src").join("generated");
        fs::create_dir_all(&generated).unwrap();
        File::create(generated.join("routes.ts")).unwrap();
        File::create(dir_path.join("src").join("App.vue")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["src/generated".to_owned()],
            false,
            false,
        );

        assert_eq!(names(&result), vec!["App.vue"]);
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("**/*.vue"));
        assert!(is_glob_pattern("src/?"));
        assert!(!is_glob_pattern("app/[locale]"));
        assert!(!is_glob_pattern("src/components"));
    }
}
