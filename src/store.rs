//! Project persistence
//!
//! Building a project from a shot directory, loading it from a project
//! file and saving it back. Saves go through a temporary file in the
//! target directory that is renamed over the destination, so a reader
//! never sees a half-written project.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info, warn};
use serde_json::Value;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::codec::{self, Decoder};
use crate::error::{RenderboyError, Result};
use crate::model::Project;
use crate::registry::TypeRegistry;

/// File name used when a project file location is not given.
pub const DEFAULT_PROJECT_FILE: &str = "renderboy.json";

/// Build a project with one shot per immediate subdirectory of `path`.
///
/// Shots follow directory-listing order and have default fields. Plain
/// files are skipped, and so are folders whose name is not valid UTF-8.
pub fn new_project_from_directory(path: &Path) -> Result<Project> {
    if !path.is_dir() {
        return Err(RenderboyError::InvalidProjectPath {
            path: path.to_path_buf(),
        });
    }

    let mut project = Project::default();

    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| RenderboyError::io(path, e.into()))?;

        if !entry.path().is_dir() {
            debug!("Skipping non-directory entry {}", entry.path().display());
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => {
                project.add_shot(name);
            }
            None => warn!(
                "Skipping shot folder with a non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    info!(
        "Scanned {} shot(s) from {}",
        project.shots.len(),
        path.display()
    );
    Ok(project)
}

/// Load a project file. Shots come back sorted by name.
pub fn load_project_from_file(path: &Path) -> Result<Project> {
    let content = fs::read(path).map_err(|e| RenderboyError::io(path, e))?;

    let doc: Value = serde_json::from_slice(&content)?;
    let mut project: Project = Decoder::new(TypeRegistry::global()).decode_as(&doc)?;
    project.sort_shots();

    info!(
        "Loaded project '{}' ({} shot(s)) from {}",
        project.name,
        project.shots.len(),
        path.display()
    );
    Ok(project)
}

/// Save a project file, replacing whatever was at `path`.
pub fn save_project_to_file(project: &Project, path: &Path) -> Result<()> {
    let content = codec::to_pretty_vec(&codec::encode(project))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| RenderboyError::io(path, e))?;
    temp.write_all(&content).map_err(|e| RenderboyError::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| RenderboyError::io(path, e))?;

    // Temp files are created owner-only; keep the mode of the file we replace.
    if let Ok(existing) = fs::metadata(path) {
        fs::set_permissions(temp.path(), existing.permissions())
            .map_err(|e| RenderboyError::io(path, e))?;
    }

    temp.persist(path).map_err(|e| RenderboyError::io(path, e.error))?;

    info!("Saved project '{}' to {}", project.name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_scan_skips_files() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sh010")).unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();

        let project = new_project_from_directory(temp.path()).unwrap();
        assert_eq!(project.shots.len(), 1);
        assert_eq!(project.shots[0].name, "sh010");
    }

    #[test]
    fn test_scan_does_not_descend() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("sh010").join("plates")).unwrap();

        let project = new_project_from_directory(temp.path()).unwrap();
        assert_eq!(project.shots.len(), 1);
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp = tempdir().unwrap();
        let err = new_project_from_directory(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, RenderboyError::InvalidProjectPath { .. }));
        assert!(err.is_io_error());
    }

    #[test]
    fn test_scan_file_is_not_a_project() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("shots.txt");
        fs::write(&file, "").unwrap();

        assert!(new_project_from_directory(&file).is_err());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_PROJECT_FILE);

        save_project_to_file(&Project::new("show"), &path).unwrap();
        save_project_to_file(&Project::new("show v2"), &path).unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(load_project_from_file(&path).unwrap().name, "show v2");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let path = temp.path().join(DEFAULT_PROJECT_FILE);
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_project_to_file(&Project::new("show"), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_non_utf8_folder_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sh010")).unwrap();
        // Some filesystems (e.g. APFS) refuse non UTF-8 names.
        if fs::create_dir(temp.path().join(OsStr::from_bytes(b"sh\xff020"))).is_err() {
            return;
        }

        let project = new_project_from_directory(temp.path()).unwrap();
        assert_eq!(project.shots.len(), 1);
        assert_eq!(project.shots[0].name, "sh010");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing").join(DEFAULT_PROJECT_FILE);

        let err = save_project_to_file(&Project::default(), &path).unwrap_err();
        assert!(err.is_io_error());
    }
}
