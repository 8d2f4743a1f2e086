//! Locale files on disk.
//!
//! Two layouts are supported:
//!
//! - `file`: one `messages/<locale>.json` per locale
//! - `directory`: `messages/<locale>/<Top>.json` per top-level key, with
//!   top-level string leaves kept in `messages/<locale>/index.json`

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{LocaleNode, LocaleTree, StoreError};

const INDEX_FILE: &str = "index.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocaleLayout {
    #[default]
    File,
    Directory,
}

/// A file that should hold `content` after the batch is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub content: String,
}

impl PendingWrite {
    /// True when the file is missing or holds different content.
    pub fn is_change(&self) -> bool {
        !fs::read_to_string(&self.path).is_ok_and(|current| current == self.content)
    }
}

#[derive(Debug, Clone)]
pub struct LocaleStore {
    root: PathBuf,
    layout: LocaleLayout,
}

impl LocaleStore {
    pub fn new(root: impl Into<PathBuf>, layout: LocaleLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// `<root>/<locale>.json` or `<root>/<locale>/`, depending on the layout.
    pub fn locale_path(&self, locale: &str) -> PathBuf {
        match self.layout {
            LocaleLayout::File => self.root.join(format!("{locale}.json")),
            LocaleLayout::Directory => self.root.join(locale),
        }
    }

    /// Locales present under the messages root, sorted. A missing root has none.
    pub fn discover_locales(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut locales = Vec::new();
        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read messages directory: {:?}", self.root))?
        {
            let path = entry?.path();
            let locale = match self.layout {
                LocaleLayout::File if is_json_file(&path) => file_stem(&path),
                LocaleLayout::Directory if path.is_dir() => path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(str::to_string),
                _ => None,
            };
            locales.extend(locale);
        }
        locales.sort();
        Ok(locales)
    }

    /// Loads a locale. A locale with no files yet is an empty tree.
    pub fn load(&self, locale: &str) -> Result<LocaleTree, StoreError> {
        let path = self.locale_path(locale);
        match self.layout {
            LocaleLayout::File => {
                if !path.exists() {
                    return Ok(LocaleTree::new());
                }
                LocaleTree::parse(&read(&path)?, &path)
            }
            LocaleLayout::Directory => load_directory(&path),
        }
    }

    /// The files needed to persist `tree` as `locale`, changed or not.
    pub fn render(&self, locale: &str, tree: &LocaleTree) -> Vec<PendingWrite> {
        let path = self.locale_path(locale);
        match self.layout {
            LocaleLayout::File => vec![PendingWrite {
                path,
                content: tree.to_json_string(),
            }],
            LocaleLayout::Directory => {
                let mut writes = Vec::new();
                let mut index = LocaleTree::new();
                for (key, node) in tree.entries() {
                    match node {
                        LocaleNode::Leaf(_) => {
                            index.insert(key.clone(), node.clone());
                        }
                        LocaleNode::Branch(child) => writes.push(PendingWrite {
                            path: path.join(format!("{key}.json")),
                            content: child.to_json_string(),
                        }),
                    }
                }
                if !index.is_empty() {
                    writes.push(PendingWrite {
                        path: path.join(INDEX_FILE),
                        content: index.to_json_string(),
                    });
                }
                writes
            }
        }
    }
}

/// Writes every pending file whose content differs from disk.
///
/// All contents are first written to temporary siblings and only then renamed
/// into place, so a failed write leaves every locale file as it was. Returns the
/// number of files written.
pub fn commit(writes: &[PendingWrite]) -> Result<usize> {
    let changed: Vec<&PendingWrite> = writes.iter().filter(|w| w.is_change()).collect();

    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(changed.len());
    for write in &changed {
        match stage(write) {
            Ok(temp) => staged.push((temp, write.path.as_path())),
            Err(err) => {
                for (temp, _) in &staged {
                    let _ = fs::remove_file(temp);
                }
                return Err(err);
            }
        }
    }

    for (temp, path) in &staged {
        fs::rename(temp, path)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    Ok(staged.len())
}

fn stage(write: &PendingWrite) -> Result<PathBuf> {
    if let Some(parent) = write.path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let temp = temp_path(&write.path);
    fs::write(&temp, &write.content)
        .with_context(|| format!("Failed to write file: {}", write.path.display()))?;
    Ok(temp)
}

/// `messages/en.json` stages as `messages/.en.json.harvest-tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.harvest-tmp"))
}

fn load_directory(dir: &Path) -> Result<LocaleTree, StoreError> {
    if !dir.is_dir() {
        return Ok(LocaleTree::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| StoreError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_json_file(path))
        .collect();
    files.sort();

    let mut tree = LocaleTree::new();
    for path in files {
        let Some(stem) = file_stem(&path) else {
            continue;
        };
        let parsed = LocaleTree::parse(&read(&path)?, &path)?;
        if stem == "index" {
            for (key, node) in parsed.entries() {
                insert_unique(&mut tree, key, node.clone(), &path)?;
            }
        } else {
            insert_unique(&mut tree, &stem, LocaleNode::Branch(parsed), &path)?;
        }
    }
    Ok(tree)
}

fn insert_unique(
    tree: &mut LocaleTree,
    key: &str,
    node: LocaleNode,
    origin: &Path,
) -> Result<(), StoreError> {
    if tree.get(key).is_some() {
        return Err(StoreError::Parse {
            path: origin.to_path_buf(),
            message: format!("`{key}` is defined in more than one file"),
        });
    }
    tree.insert(key.to_string(), node);
    Ok(())
}

fn read(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn is_json_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json")
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
}
