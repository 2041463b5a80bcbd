//! Result storage API.

use crate::types::{ImpedanceAndScData, ResultManifest};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk result cache: one directory per result ID holding
/// `manifest.json` and `data.json`.
#[derive(Clone)]
pub struct ResultStore {
    root_dir: PathBuf,
}

impl ResultStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    /// Store rooted next to a project file, under `.coilstack/results`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        let project_dir = project_path
            .parent()
            .ok_or_else(|| ResultsError::InvalidPath {
                message: "project path has no parent directory".to_string(),
            })?;
        let results_dir = project_dir.join(".coilstack").join("results");
        Self::new(results_dir)
    }

    fn result_dir(&self, result_id: &str) -> PathBuf {
        self.root_dir.join(result_id)
    }

    pub fn has_result(&self, result_id: &str) -> bool {
        self.result_dir(result_id).join("manifest.json").exists()
    }

    pub fn save_result(
        &self,
        manifest: &ResultManifest,
        data: &ImpedanceAndScData,
    ) -> ResultsResult<()> {
        let result_dir = self.result_dir(&manifest.result_id);
        fs::create_dir_all(&result_dir)?;

        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(result_dir.join("manifest.json"), manifest_json)?;

        let data_json = serde_json::to_string_pretty(data)?;
        fs::write(result_dir.join("data.json"), data_json)?;

        Ok(())
    }

    pub fn load_manifest(&self, result_id: &str) -> ResultsResult<ResultManifest> {
        let manifest_path = self.result_dir(result_id).join("manifest.json");

        if !manifest_path.exists() {
            return Err(ResultsError::ResultNotFound {
                result_id: result_id.to_string(),
            });
        }

        let content = fs::read_to_string(manifest_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn load_data(&self, result_id: &str) -> ResultsResult<ImpedanceAndScData> {
        let data_path = self.result_dir(result_id).join("data.json");

        if !data_path.exists() {
            return Err(ResultsError::ResultNotFound {
                result_id: result_id.to_string(),
            });
        }

        let content = fs::read_to_string(data_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Manifests of every stored result for the named project.
    pub fn list_results(&self, project_name: &str) -> ResultsResult<Vec<ResultManifest>> {
        let mut results = Vec::new();

        if !self.root_dir.exists() {
            return Ok(results);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let result_id = entry.file_name().to_string_lossy().to_string();
                if let Ok(manifest) = self.load_manifest(&result_id)
                    && manifest.project_name == project_name
                {
                    results.push(manifest);
                }
            }
        }

        Ok(results)
    }

    pub fn delete_result(&self, result_id: &str) -> ResultsResult<()> {
        let result_dir = self.result_dir(result_id);
        if result_dir.exists() {
            fs::remove_dir_all(result_dir)?;
        }
        Ok(())
    }
}
