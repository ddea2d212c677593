//! rswappalyzer-lint-engine 内核错误定义
//! 每个变体对应一种规则库校验失败，Display 输出即最终上报给用户的单行信息
use thiserror::Error;

use crate::core::RuleLocation;

/// 校验失败类别（便于测试与程序化处理，无需匹配完整错误文本）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidFlag,
    InvalidConfidence,
    InvalidRegex,
    TooManyGroups,
    MissingMarkupAnchor,
    UnknownCategory,
    MissingIconFile,
    InvalidWebsiteUrl,
    UnknownImpliedTechnology,
    UnknownExcludedTechnology,
    UnsupportedIconType,
    OrphanIconFile,
    RuleParse,
}

/// 内核校验错误枚举
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    // ===================== 模式标记错误 =====================
    /// 未知标记键（仅支持 confidence / version）
    #[error("Invalid flag: {key} ({location})")]
    InvalidFlag { key: String, location: RuleLocation },

    /// 置信度非 0-99 的整数
    #[error("Confidence value must be a number between 0 and 99: {value} ({location})")]
    InvalidConfidence { value: String, location: RuleLocation },

    // ===================== 正则语义错误 =====================
    /// 正则编译失败，message 为正则引擎原始报错
    #[error("Invalid regular expression: {message} ({location})")]
    InvalidRegex { message: String, location: RuleLocation },

    /// 捕获组数量超过 version 标记引用的最大序号
    #[error("Too many capturing groups, expected {expected}, found {actual}: {regex} ({location})")]
    TooManyGroups {
        expected: usize,
        actual: usize,
        regex: String,
        location: RuleLocation,
    },

    /// HTML 规则未包含 < 或 >
    #[error("HTML pattern must include < or >: {regex} ({location})")]
    MissingMarkupAnchor { regex: String, location: RuleLocation },

    // ===================== 技术条目错误 =====================
    #[error("No such category: {category} ({technology})")]
    UnknownCategory { category: String, technology: String },

    #[error("No such icon: {icon} ({technology})")]
    MissingIconFile { icon: String, technology: String },

    #[error("Invalid website URL: {website} ({technology})")]
    InvalidWebsiteUrl { website: String, technology: String },

    #[error("Implied technology does not exist: {name} ({location})")]
    UnknownImpliedTechnology { name: String, location: RuleLocation },

    #[error("Excluded technology does not exist: {name} ({location})")]
    UnknownExcludedTechnology { name: String, location: RuleLocation },

    // ===================== 图标目录错误 =====================
    #[error("Incorrect file type, expected PNG or SVG: {path}")]
    UnsupportedIconType { path: String },

    #[error("Extraneous file: {path}")]
    OrphanIconFile { path: String },

    // ===================== 规则解析错误 =====================
    /// 规则库结构不符合预期（非校验类错误，发生在入库阶段）
    #[error("Rule parse failed: {0}")]
    RuleParse(String),
}

impl LintError {
    /// 获取错误类别
    pub fn kind(&self) -> FailureKind {
        match self {
            LintError::InvalidFlag { .. } => FailureKind::InvalidFlag,
            LintError::InvalidConfidence { .. } => FailureKind::InvalidConfidence,
            LintError::InvalidRegex { .. } => FailureKind::InvalidRegex,
            LintError::TooManyGroups { .. } => FailureKind::TooManyGroups,
            LintError::MissingMarkupAnchor { .. } => FailureKind::MissingMarkupAnchor,
            LintError::UnknownCategory { .. } => FailureKind::UnknownCategory,
            LintError::MissingIconFile { .. } => FailureKind::MissingIconFile,
            LintError::InvalidWebsiteUrl { .. } => FailureKind::InvalidWebsiteUrl,
            LintError::UnknownImpliedTechnology { .. } => FailureKind::UnknownImpliedTechnology,
            LintError::UnknownExcludedTechnology { .. } => FailureKind::UnknownExcludedTechnology,
            LintError::UnsupportedIconType { .. } => FailureKind::UnsupportedIconType,
            LintError::OrphanIconFile { .. } => FailureKind::OrphanIconFile,
            LintError::RuleParse(_) => FailureKind::RuleParse,
        }
    }
}

/// 内核层全局Result类型别名
pub type LintResult<T> = Result<T, LintError>;
