//! rswappalyzer-lint - Wappalyzer 格式指纹数据集校验工具

// 导出全局错误类型
pub use self::error::{RswLintError, RswLintResult};

// 导出配置模块
pub use self::config::{
    ConfigManager, CustomConfigBuilder, DatasetSource, LintConfig, DEFAULT_APPS_PATH,
    DEFAULT_ICON_DIR,
};

// 导出规则加载/图标扫描接口
pub use self::rule::{IconScanner, RuleLoader};

// 导出校验入口
pub use self::validator::DatasetValidator;

// 导出内核常用类型
pub use rswappalyzer_lint_engine::{
    CheckMode, CheckOptions, FailureKind, IconAssetSet, LintError, LintReport, RuleChecker,
    RuleLibrary, TechnologyRule,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod validator;
