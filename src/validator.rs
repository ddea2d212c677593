//! 数据集校验入口：加载规则 → 扫描图标目录 → 执行内核校验

use log::info;
use rswappalyzer_lint_engine::{IconAssetSet, LintReport, RuleChecker, RuleLibrary};

use crate::config::LintConfig;
use crate::error::{RswLintError, RswLintResult};
use crate::rule::{IconScanner, RuleLoader};

/// 数据集校验器
#[derive(Debug, Clone)]
pub struct DatasetValidator {
    config: LintConfig,
}

impl DatasetValidator {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// 完整流程
    pub fn run(&self) -> RswLintResult<LintReport> {
        let library = RuleLoader::load(&self.config)?;
        let icons = IconScanner::scan(&self.config.icon_dir)?;
        self.validate(&library, &icons)
    }

    /// 对已加载的数据执行校验
    /// FailFast：首个错误以 `RswLintError::Lint` 返回；FailSlow：全部错误以 `RswLintError::Failures` 返回
    pub fn validate(&self, library: &RuleLibrary, icons: &IconAssetSet) -> RswLintResult<LintReport> {
        let checker = RuleChecker::new(self.config.options.clone());
        let report = checker.check(library, icons)?;

        if !report.is_ok() {
            return Err(RswLintError::Failures(report.failures));
        }

        info!(
            "Validated {} technologies ({} patterns), no problems found",
            report.technologies, report.patterns
        );
        Ok(report)
    }
}
