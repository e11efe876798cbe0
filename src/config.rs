use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

use crate::paths::PathRules;

pub const DEFAULT_CONFIG_FILENAME: &str = "dava.toml";
pub const CONFIG_ENV_VAR: &str = "DAVA_CONFIG";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct PathsSection {
    /// Extensions accepted as dialect sources when deriving the output name.
    #[serde(default)]
    pub source_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub target_extension: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub quiet: Option<bool>,
}

impl AppConfig {
    pub fn path_rules(&self) -> PathRules {
        let mut rules = PathRules::default();
        if let Some(exts) = self.paths.source_extensions.as_ref() {
            let exts: Vec<String> = exts
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect();
            if !exts.is_empty() {
                rules.source_extensions = exts;
            }
        }
        if let Some(ext) = self
            .paths
            .target_extension
            .as_deref()
            .map(|e| e.trim().trim_start_matches('.'))
            .filter(|e| !e.is_empty())
        {
            rules.target_extension = ext.to_string();
        }
        rules
    }

    pub fn quiet(&self) -> bool {
        self.output.quiet.unwrap_or(false)
    }
}

pub fn find_file_upwards(start_dir: &Path, filename: &str, max_levels: usize) -> Option<PathBuf> {
    let mut dir = start_dir;
    for _ in 0..=max_levels {
        let candidate = dir.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
    None
}

pub fn find_default_config(workdir: &Path, filename: &str) -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(p) = find_file_upwards(&cwd, filename, 8) {
            return Some(p);
        }
    }
    find_file_upwards(workdir, filename, 8)
}

pub fn load_config(path: &Path) -> anyhow::Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: AppConfig = toml::from_str(&text)
        .with_context(|| format!("parse config toml: {}", path.display()))?;
    Ok(cfg)
}

/// Explicit path, then `DAVA_CONFIG`, then `dava.toml` upwards from cwd and `workdir`.
/// Explicit and env paths must exist; a missing default file just means built-in defaults.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    workdir: &Path,
) -> anyhow::Result<(Option<PathBuf>, AppConfig)> {
    let requested = explicit.or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from));
    if let Some(p) = requested {
        if !p.is_file() {
            return Err(anyhow!("config not found: {}", p.display()));
        }
        let cfg = load_config(&p)?;
        return Ok((Some(p), cfg));
    }
    match find_default_config(workdir, DEFAULT_CONFIG_FILENAME) {
        Some(p) => {
            let cfg = load_config(&p)?;
            Ok((Some(p), cfg))
        }
        None => Ok((None, AppConfig::default())),
    }
}

const DEFAULT_CONFIG_TOML: &str = r#"[paths]
# File extensions treated as Deutsches Java sources when no -o/--output is given.
source_extensions = ["dava", "djava"]
# Extension of the generated files. `modul-info.<src>` always becomes `module-info.<target>`.
target_extension = "java"

[output]
# Suppress progress lines on stderr.
quiet = false
"#;

pub fn init_default_config(dir: &Path, force: bool) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create config dir: {}", dir.display()))?;
    let cfg_path = dir.join(DEFAULT_CONFIG_FILENAME);
    if cfg_path.exists() && !force {
        return Ok(cfg_path);
    }
    std::fs::write(&cfg_path, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("write config: {}", cfg_path.display()))?;
    Ok(cfg_path)
}

#[cfg(test)]
mod tests {
    use super::{init_default_config, load_config, resolve_config, AppConfig, PathsSection};
    use crate::paths::PathRules;

    #[test]
    fn default_config_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = init_default_config(dir.path(), false).expect("init");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.path_rules(), PathRules::default());
        assert!(!cfg.quiet());
    }

    #[test]
    fn init_keeps_existing_file_unless_forced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dava.toml");
        std::fs::write(&path, "[output]\nquiet = true\n").expect("write");
        init_default_config(dir.path(), false).expect("init");
        assert!(load_config(&path).expect("load").quiet());
        init_default_config(dir.path(), true).expect("init force");
        assert!(!load_config(&path).expect("load").quiet());
    }

    #[test]
    fn extensions_are_normalized() {
        let cfg = AppConfig {
            paths: PathsSection {
                source_extensions: Some(vec![".dj".to_string(), " ".to_string()]),
                target_extension: Some(".jav".to_string()),
            },
            ..AppConfig::default()
        };
        let rules = cfg.path_rules();
        assert_eq!(rules.source_extensions, vec!["dj".to_string()]);
        assert_eq!(rules.target_extension, "jav");
    }

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let cfg: AppConfig = toml::from_str("[paths]\n").expect("parse");
        assert_eq!(cfg.path_rules(), PathRules::default());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        assert!(resolve_config(Some(missing), dir.path()).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[paths]\ntarget_extension = \"jv\"\n").expect("write");
        let (found, cfg) = resolve_config(Some(path.clone()), dir.path()).expect("resolve");
        assert_eq!(found, Some(path));
        assert_eq!(cfg.path_rules().target_extension, "jv");
    }
}
