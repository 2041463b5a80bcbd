//! Schema migration framework.

use crate::ProjectError;
use crate::schema::ProjectFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut project: ProjectFile) -> Result<ProjectFile, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: ProjectFile) -> Result<ProjectFile, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// v0 files predate the version field; nothing else changed.
fn migrate_v0_to_v1(mut project: ProjectFile) -> Result<ProjectFile, ProjectError> {
    project.version = 1;
    Ok(project)
}
