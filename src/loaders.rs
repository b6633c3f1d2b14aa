use crate::error::{Error, json_type};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, trace};

/// Reads the JSON document mapping student names to their attributes.
pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Map<String, Value>, Error> {
        let content = fs::read(&self.path).map_err(|source| Error::FileNotFound {
            path: self.path.clone(),
            source,
        })?;
        trace!(path = %self.path.display(), bytes = content.len(), "input read");
        let students = self.parse(&content)?;
        info!(
            path = %self.path.display(),
            students = students.len(),
            "students loaded",
        );
        Ok(students)
    }

    fn parse(&self, content: &[u8]) -> Result<Map<String, Value>, Error> {
        let document: Value =
            serde_json::from_slice(content).map_err(|source| Error::ParseFailure {
                path: self.path.clone(),
                source,
            })?;
        match document {
            Value::Object(students) => Ok(students),
            other => Err(Error::NotAnObject {
                path: self.path.clone(),
                found: json_type(&other),
            }),
        }
    }
}
