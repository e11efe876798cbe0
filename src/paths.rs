use std::path::{Path, PathBuf};

use anyhow::anyhow;

pub const DEFAULT_SOURCE_EXTENSIONS: [&str; 2] = ["dava", "djava"];
pub const DEFAULT_TARGET_EXTENSION: &str = "java";

pub const DIALECT_MODULE_STEM: &str = "modul-info";
pub const HOST_MODULE_STEM: &str = "module-info";

/// Maps dialect file names to host file names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRules {
    pub source_extensions: Vec<String>,
    pub target_extension: String,
}

impl Default for PathRules {
    fn default() -> Self {
        Self {
            source_extensions: DEFAULT_SOURCE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
        }
    }
}

impl PathRules {
    fn is_source_extension(&self, ext: &str) -> bool {
        self.source_extensions.iter().any(|e| e == ext)
    }

    #[must_use]
    pub fn host_module_file_name(&self) -> String {
        format!("{HOST_MODULE_STEM}.{}", self.target_extension)
    }

    /// `modul-info.dava` becomes `module-info.java`; `Foo.djava` becomes `Foo.java`.
    pub fn default_output_for(&self, input: &Path) -> anyhow::Result<PathBuf> {
        let stem = match (
            input.file_stem().and_then(|s| s.to_str()),
            input.extension().and_then(|s| s.to_str()),
        ) {
            (Some(stem), Some(ext)) if self.is_source_extension(ext) => stem,
            _ => {
                return Err(anyhow!(
                    "cannot derive output name for {} (expected extension: {}); pass -o/--output",
                    input.display(),
                    self.source_extensions.join(", ")
                ))
            }
        };
        if stem == DIALECT_MODULE_STEM {
            return Ok(input.with_file_name(self.host_module_file_name()));
        }
        Ok(input.with_extension(&self.target_extension))
    }

    /// True when `output` is named exactly like the host module declaration file.
    #[must_use]
    pub fn is_module_output(&self, output: &Path) -> bool {
        output
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name == self.host_module_file_name())
    }
}

pub fn default_output_for(input: &Path) -> anyhow::Result<PathBuf> {
    PathRules::default().default_output_for(input)
}

pub fn is_module_output(output: &Path) -> bool {
    PathRules::default().is_module_output(output)
}
