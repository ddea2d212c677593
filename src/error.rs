//! 全局错误类型定义

use rswappalyzer_lint_engine::LintError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RswLintError {
    // 规则相关错误
    #[error("Rule load failed: {0}")]
    RuleLoadError(String),

    // 校验错误（FailFast 模式下的首个错误）
    #[error(transparent)]
    Lint(#[from] LintError),

    // FailSlow 模式下收集到的全部错误
    #[error("{} validation failure(s)", .0.len())]
    Failures(Vec<LintError>),

    // 基础错误
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
}

impl RswLintError {
    /// 面向用户的错误行，FailSlow 下每个错误一行
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            RswLintError::Failures(failures) => failures.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

// 全局Result类型
pub type RswLintResult<T> = Result<T, RswLintError>;
