//! 全局配置管理，存储所有可配置项

use std::path::PathBuf;

use rswappalyzer_lint_engine::{CheckMode, CheckOptions};

/// Wappalyzer 仓库默认的数据集路径
pub const DEFAULT_APPS_PATH: &str = "./src/apps.json";
/// Wappalyzer 仓库默认的图标目录
pub const DEFAULT_ICON_DIR: &str = "./src/drivers/webextension/images/icons";

/// 数据集来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// 单文件 `{ "apps": {...}, "categories": {...} }`
    SingleFile(PathBuf),
    /// 拆分布局：技术目录（多个 JSON 文件）+ 独立分类文件
    SplitDirectory {
        technologies_dir: PathBuf,
        categories_file: PathBuf,
    },
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::SingleFile(PathBuf::from(DEFAULT_APPS_PATH))
    }
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct LintConfig {
    // 数据集来源
    pub source: DatasetSource,
    // 图标目录
    pub icon_dir: PathBuf,
    // 校验选项（FailFast / FailSlow）
    pub options: CheckOptions,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::default(),
            icon_dir: PathBuf::from(DEFAULT_ICON_DIR),
            options: CheckOptions::default(),
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> LintConfig {
        LintConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: LintConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LintConfig::default(),
        }
    }

    pub fn single_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source = DatasetSource::SingleFile(path.into());
        self
    }

    pub fn split_directory(
        mut self,
        technologies_dir: impl Into<PathBuf>,
        categories_file: impl Into<PathBuf>,
    ) -> Self {
        self.config.source = DatasetSource::SplitDirectory {
            technologies_dir: technologies_dir.into(),
            categories_file: categories_file.into(),
        };
        self
    }

    pub fn icon_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.icon_dir = path.into();
        self
    }

    pub fn mode(mut self, mode: CheckMode) -> Self {
        self.config.options.mode = mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> LintConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.source, DatasetSource::SingleFile(PathBuf::from(DEFAULT_APPS_PATH)));
        assert_eq!(config.icon_dir, PathBuf::from(DEFAULT_ICON_DIR));
        assert_eq!(config.options.mode, CheckMode::FailFast);
    }

    #[test]
    fn test_builder() {
        let config = ConfigManager::custom()
            .split_directory("src/technologies", "src/categories.json")
            .icon_dir("src/images/icons")
            .mode(CheckMode::FailSlow)
            .verbose(true)
            .build();

        assert_eq!(
            config.source,
            DatasetSource::SplitDirectory {
                technologies_dir: PathBuf::from("src/technologies"),
                categories_file: PathBuf::from("src/categories.json"),
            }
        );
        assert_eq!(config.icon_dir, PathBuf::from("src/images/icons"));
        assert_eq!(config.options.mode, CheckMode::FailSlow);
        assert!(config.verbose);
    }
}
