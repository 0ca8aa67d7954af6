use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    codegen::EmittedType,
    error::{GenerateError, GenerateResult},
};

/// Persists rendered units. Called once per table.
pub trait OutputWriter {
    fn write_unit(&mut self, unit: &EmittedType) -> GenerateResult<PathBuf>;
}

/// Writes `<directory>/<file_name>`, creating the directory on first use and
/// overwriting any existing file.
pub struct FsWriter {
    directory: PathBuf,
}

impl FsWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl OutputWriter for FsWriter {
    fn write_unit(&mut self, unit: &EmittedType) -> GenerateResult<PathBuf> {
        fs::create_dir_all(&self.directory).map_err(|source| GenerateError::Write {
            path: self.directory.clone(),
            source,
        })?;

        let path = self.directory.join(&unit.file_name);
        let write = |path: &Path| -> std::io::Result<()> {
            let mut file = fs::File::create(path)?;
            file.write_all(unit.source.as_bytes())?;
            file.flush()
        };
        write(&path).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Keeps rendered units in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub files: BTreeMap<String, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputWriter for MemoryWriter {
    fn write_unit(&mut self, unit: &EmittedType) -> GenerateResult<PathBuf> {
        self.files.insert(unit.file_name.clone(), unit.source.clone());
        Ok(PathBuf::from(&unit.file_name))
    }
}
