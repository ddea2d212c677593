//! 规则加载管理器
//! 负责从本地单文件或拆分目录读取 Wappalyzer 数据集

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rswappalyzer_lint_engine::{RuleLibrary, WappalyzerParser};
use serde_json::{Map, Value};
use walkdir::WalkDir;

use crate::config::{DatasetSource, LintConfig};
use crate::error::{RswLintError, RswLintResult};

/// 拆分布局中排在最前的文件（非字母开头的技术）
const LEADING_SPLIT_FILE: &str = "_.json";

/// 规则加载管理器
pub struct RuleLoader;

impl RuleLoader {
    /// 按配置加载规则库
    pub fn load(config: &LintConfig) -> RswLintResult<RuleLibrary> {
        let library = match &config.source {
            DatasetSource::SingleFile(path) => Self::load_single_file(path)?,
            DatasetSource::SplitDirectory {
                technologies_dir,
                categories_file,
            } => Self::load_split_directory(technologies_dir, categories_file)?,
        };

        debug!(
            "Loaded {} technologies and {} categories",
            library.technologies.len(),
            library.category_rules.len()
        );
        Ok(library)
    }

    /// 加载单文件数据集（apps.json）
    pub fn load_single_file(path: &Path) -> RswLintResult<RuleLibrary> {
        debug!("Loading dataset from {}", path.display());
        let content = Self::read_to_string(path)?;
        WappalyzerParser::new()
            .parse_from_str(&content)
            .map_err(|e| RswLintError::RuleLoadError(format!("{}: {}", path.display(), e)))
    }

    /// 加载拆分布局：技术目录下每个 JSON 文件是一个 `技术名 → 规则` 对象
    pub fn load_split_directory(
        technologies_dir: &Path,
        categories_file: &Path,
    ) -> RswLintResult<RuleLibrary> {
        let parser = WappalyzerParser::new();
        let mut merged = Map::new();

        for path in Self::list_technology_files(technologies_dir)? {
            let Value::Object(technologies) = Self::read_json(&path)? else {
                return Err(RswLintError::RuleLoadError(format!(
                    "{}: technologies file must contain a JSON object",
                    path.display()
                )));
            };
            debug!("Merging {} technologies from {}", technologies.len(), path.display());

            for (name, rule) in technologies {
                if merged.contains_key(&name) {
                    return Err(RswLintError::RuleLoadError(format!(
                        "{}: duplicate technology {}",
                        path.display(),
                        name
                    )));
                }
                merged.insert(name, rule);
            }
        }

        let technologies = parser
            .parse_technologies_value(Value::Object(merged))
            .map_err(|e| RswLintError::RuleLoadError(format!("{}: {}", technologies_dir.display(), e)))?;
        let category_rules = parser
            .parse_categories_value(Self::read_json(categories_file)?)
            .map_err(|e| RswLintError::RuleLoadError(format!("{}: {}", categories_file.display(), e)))?;

        Ok(RuleLibrary {
            technologies,
            category_rules,
        })
    }

    /// 列出技术目录下的 JSON 文件（`_.json` 优先，其余按文件名排序）
    fn list_technology_files(dir: &Path) -> RswLintResult<Vec<PathBuf>> {
        fn split_file_order(name: &OsStr) -> (bool, &OsStr) {
            (name != LEADING_SPLIT_FILE, name)
        }

        if !dir.is_dir() {
            return Err(RswLintError::RuleLoadError(format!(
                "Technologies directory not found: {}",
                dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by(|a, b| split_file_order(a.file_name()).cmp(&split_file_order(b.file_name())))
        {
            let entry = entry.map_err(std::io::Error::from)?;
            let is_json = entry.path().extension().is_some_and(|ext| ext == "json");
            if entry.file_type().is_file() && is_json {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_to_string(path: &Path) -> RswLintResult<String> {
        fs::read_to_string(path).map_err(|e| {
            RswLintError::RuleLoadError(format!("Failed to read {}: {}", path.display(), e))
        })
    }

    fn read_json(path: &Path) -> RswLintResult<Value> {
        let content = Self::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RswLintError::RuleLoadError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use std::fs;
    use tempfile::TempDir;

    const APPS_JSON: &str = r#"{
        "apps": {
            "WordPress": {
                "cats": [1],
                "html": "<link rel=[\"']stylesheet[\"'] [^>]+wp-(?:content|includes)",
                "implies": ["PHP"],
                "website": "https://wordpress.org"
            },
            "PHP": { "cats": [27], "website": "http://php.net" }
        },
        "categories": { "1": { "name": "CMS" }, "27": { "name": "Programming Languages" } }
    }"#;

    #[test]
    fn test_load_single_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apps.json");
        fs::write(&path, APPS_JSON).unwrap();

        let config = ConfigManager::custom().single_file(&path).build();
        let library = RuleLoader::load(&config).unwrap();
        let names: Vec<_> = library.technologies.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["WordPress", "PHP"]);
        assert!(library.has_category("27"));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = RuleLoader::load_single_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, RswLintError::RuleLoadError(_)));
    }

    #[test]
    fn test_malformed_json_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("apps.json");
        fs::write(&path, "{ \"apps\": ").unwrap();
        let err = RuleLoader::load_single_file(&path).unwrap_err();
        assert!(err.to_string().contains("apps.json"));
    }

    #[test]
    fn test_load_split_directory_order() {
        let dir = TempDir::new().unwrap();
        let tech_dir = dir.path().join("technologies");
        fs::create_dir(&tech_dir).unwrap();
        fs::write(tech_dir.join("b.json"), r#"{ "Bootstrap": { "cats": [1] } }"#).unwrap();
        fs::write(tech_dir.join("a.json"), r#"{ "Zurb": { "cats": [1] }, "Angular": { "cats": [1] } }"#).unwrap();
        fs::write(tech_dir.join("_.json"), r#"{ "1C-Bitrix": { "cats": [1] } }"#).unwrap();
        fs::write(tech_dir.join("README.md"), "ignored").unwrap();
        let categories = dir.path().join("categories.json");
        fs::write(&categories, r#"{ "1": { "name": "CMS", "priority": 1 } }"#).unwrap();

        let library = RuleLoader::load_split_directory(&tech_dir, &categories).unwrap();
        let names: Vec<_> = library.technologies.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["1C-Bitrix", "Zurb", "Angular", "Bootstrap"]);
        assert_eq!(library.category_rules["1"].name, "CMS");
    }

    #[test]
    fn test_split_directory_duplicate_technology() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.json"), r#"{ "Foo": { "cats": [1] } }"#).unwrap();
        fs::write(dir.path().join("b.json"), r#"{ "Foo": { "cats": [2] } }"#).unwrap();
        let categories = dir.path().join("categories.json");
        fs::write(&categories, "{}").unwrap();

        // categories.json 本身也在目录中，但内容为空对象，不影响结果
        let err = RuleLoader::load_split_directory(dir.path(), &categories).unwrap_err();
        assert!(err.to_string().contains("duplicate technology Foo"));
    }
}
