//! 模式标记校验：confidence 取值范围 + version 反向引用序号

use once_cell::sync::Lazy;
use regex::Regex;

use super::decomposer::Flag;
use super::failures::Failures;
use crate::core::RuleLocation;
use crate::error::{LintError, LintResult};

// 仅 ASCII 数字（Rust regex 的 \d 默认匹配 Unicode 数字）
static CONFIDENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static VERSION_REF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([0-9]+)").unwrap());

/// 置信度上限（含）
pub const MAX_CONFIDENCE: u32 = 99;

/// 标记作用范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagScope {
    /// 检测模式：支持 confidence + version
    Pattern,
    /// implies 关联边：仅支持 confidence
    Implies,
}

impl FlagScope {
    fn allows_version(&self) -> bool {
        matches!(self, FlagScope::Pattern)
    }
}

/// 校验置信度取值
pub fn validate_confidence(value: &str, location: &RuleLocation) -> LintResult<u32> {
    let parsed = CONFIDENCE_REGEX
        .is_match(value)
        .then(|| value.parse::<u32>().ok())
        .flatten()
        .filter(|confidence| *confidence <= MAX_CONFIDENCE);

    parsed.ok_or_else(|| LintError::InvalidConfidence {
        value: value.to_string(),
        location: location.clone(),
    })
}

/// 提取 version 模板中最大的反向引用序号（无引用时为 0）
pub fn max_version_reference(value: &str) -> usize {
    VERSION_REF_REGEX
        .captures_iter(value)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<usize>().unwrap_or(usize::MAX))
        .max()
        .unwrap_or(0)
}

/// 校验单个标记，version 标记返回其引用的最大分组序号
pub fn validate_flag(
    flag: &Flag<'_>,
    scope: FlagScope,
    location: &RuleLocation,
) -> LintResult<Option<usize>> {
    match flag.key {
        "confidence" => validate_confidence(flag.value, location).map(|_| None),
        "version" if scope.allows_version() => Ok(Some(max_version_reference(flag.value))),
        other => Err(LintError::InvalidFlag {
            key: other.to_string(),
            location: location.clone(),
        }),
    }
}

/// 校验模式的全部标记，返回所有 version 标记中最大的分组引用序号
pub fn validate_flags(
    flags: &[Flag<'_>],
    scope: FlagScope,
    location: &RuleLocation,
    failures: &mut Failures,
) -> LintResult<usize> {
    let mut max_groups = 0;
    for flag in flags {
        if let Some(Some(refs)) = failures.record(validate_flag(flag, scope, location))? {
            max_groups = max_groups.max(refs);
        }
    }
    Ok(max_groups)
}
