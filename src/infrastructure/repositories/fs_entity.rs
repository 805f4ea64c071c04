//! Filesystem Entity Repository
//!
//! Reads entity documents from a directory tree:
//!
//! ```text
//! <root>/servers/<id>.{json,yaml,yml}
//! <root>/clusters/<id>.{json,yaml,yml}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Entity, EntityKind};
use crate::domain::ports::{EntityRepository, StoreError, UnreadableEntity};

use super::documents::{ClusterDocument, ServerDocument};

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

pub struct FsEntityRepository {
    root: PathBuf,
}

impl FsEntityRepository {
    pub fn with_path(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, kind: EntityKind) -> Result<PathBuf, StoreError> {
        if !self.root.is_dir() {
            return Err(StoreError::AccessError {
                message: format!("record store not found: {}", self.root.display()),
            });
        }
        Ok(self.root.join(kind.collection()))
    }

    /// Document files of a collection, sorted by file name
    fn document_paths(&self, kind: EntityKind) -> Result<Vec<PathBuf>, StoreError> {
        let dir = self.collection_dir(kind)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| StoreError::AccessError {
            message: format!("{}: {}", dir.display(), e),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| StoreError::AccessError {
                    message: e.to_string(),
                })?
                .path();
            if path.is_file() && has_document_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(paths)
    }

    fn load_document(&self, kind: EntityKind, path: &Path) -> Result<Entity, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::AccessError {
            message: format!("{}: {}", path.display(), e),
        })?;

        let corrupted = |message: String| StoreError::Corrupted {
            path: path.to_path_buf(),
            message,
        };

        let entity = match kind {
            EntityKind::Server => Entity::from(
                parse_document::<ServerDocument>(path, &content).map_err(corrupted)?,
            ),
            EntityKind::Cluster => {
                let doc = parse_document::<ClusterDocument>(path, &content).map_err(corrupted)?;
                Entity::try_from(doc).map_err(corrupted)?
            }
        };

        tracing::trace!(path = %path.display(), id = %entity.id, "loaded entity document");
        Ok(entity)
    }
}

impl EntityRepository for FsEntityRepository {
    fn get(&self, kind: EntityKind, id: &str) -> Result<Entity, StoreError> {
        let dir = self.collection_dir(kind)?;
        let not_found = || StoreError::NotFound {
            kind,
            id: id.to_string(),
        };

        // An id containing a separator can never name a document
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(not_found());
        }

        let path = EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{id}.{ext}")))
            .find(|p| p.is_file())
            .ok_or_else(not_found)?;

        let entity = self.load_document(kind, &path)?;
        if entity.id != id {
            return Err(StoreError::Corrupted {
                path,
                message: format!("document id '{}' does not match file name '{}'", entity.id, id),
            });
        }
        Ok(entity)
    }

    fn list(&self, kind: EntityKind) -> Result<Vec<Result<Entity, UnreadableEntity>>, StoreError> {
        let listed = self
            .document_paths(kind)?
            .iter()
            .map(|path| {
                self.load_document(kind, path).map_err(|error| {
                    tracing::warn!(path = %path.display(), %error, "skipping unreadable document");
                    UnreadableEntity {
                        id: document_stem(path),
                        error,
                    }
                })
            })
            .collect();
        Ok(listed)
    }
}

fn has_document_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| EXTENSIONS.contains(&e))
}

fn document_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parse_document<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> Result<T, String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| e.to_string()),
        _ => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
    }
}
