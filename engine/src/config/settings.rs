// Export settings, potentially loaded from a config file or CLI flags
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    /// Directory the generated CSV is written into.
    pub output_dir: PathBuf,
    /// Fixed output filename; when unset the batch-derived
    /// `DJ1866_<YYYY><MM>.csv` suggestion is used.
    pub file_name_override: Option<String>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings { output_dir: PathBuf::from("."), file_name_override: None }
    }
}

impl ExportSettings {
    pub fn resolve_output_path(&self, suggested_name: &str) -> PathBuf {
        let name: &Path = self
            .file_name_override
            .as_deref()
            .map_or_else(|| Path::new(suggested_name), Path::new);
        self.output_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_uses_suggestion_by_default() {
        let settings = ExportSettings::default();
        assert_eq!(
            settings.resolve_output_path("DJ1866_202401.csv"),
            PathBuf::from("./DJ1866_202401.csv")
        );
    }

    #[test]
    fn test_resolve_output_path_honors_override() {
        let settings = ExportSettings {
            output_dir: PathBuf::from("/tmp/out"),
            file_name_override: Some("custom.csv".to_string()),
        };
        assert_eq!(
            settings.resolve_output_path("DJ1866_202401.csv"),
            PathBuf::from("/tmp/out/custom.csv")
        );
    }
}
