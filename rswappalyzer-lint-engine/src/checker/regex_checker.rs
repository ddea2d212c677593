//! 正则语义检查：可编译性、捕获组预算、HTML 标签定界符

use fancy_regex::Regex;

use crate::core::{PatternField, RuleLocation};
use crate::error::{LintError, LintResult};
use crate::utils::preview_compact;

/// 正则语义检查器
/// 使用回溯引擎编译，支持数据集中常见的环视与反向引用
#[derive(Debug, Clone, Default)]
pub struct RegexChecker;

impl RegexChecker {
    pub fn new() -> Self {
        Self
    }

    /// 编译正则并返回捕获组数量（不含隐式的第 0 组，环视内的分组同样计数）
    pub fn count_groups(&self, source: &str, location: &RuleLocation) -> LintResult<usize> {
        let regex = Regex::new(source).map_err(|e| {
            log::trace!("Regex compile failed: {} ({})", preview_compact(source, 80), location);
            LintError::InvalidRegex {
                message: single_line_message(&e.to_string()),
                location: location.clone(),
            }
        })?;
        Ok(regex.captures_len().saturating_sub(1))
    }

    /// 每个捕获组都必须被 version 标记引用
    pub fn check_group_budget(
        &self,
        source: &str,
        groups: usize,
        max_groups: usize,
        location: &RuleLocation,
    ) -> LintResult<()> {
        if groups > max_groups {
            return Err(LintError::TooManyGroups {
                expected: max_groups,
                actual: groups,
                regex: source.to_string(),
                location: location.clone(),
            });
        }
        Ok(())
    }

    /// HTML 规则至少包含 < 或 >
    pub fn check_markup_anchor(
        &self,
        source: &str,
        field: PatternField,
        location: &RuleLocation,
    ) -> LintResult<()> {
        if field.requires_markup_anchor() && !source.contains(['<', '>']) {
            return Err(LintError::MissingMarkupAnchor {
                regex: source.to_string(),
                location: location.clone(),
            });
        }
        Ok(())
    }

    /// 依次执行全部检查，返回第一个错误
    pub fn check(
        &self,
        source: &str,
        max_groups: usize,
        field: PatternField,
        location: &RuleLocation,
    ) -> LintResult<()> {
        let groups = self.count_groups(source, location)?;
        self.check_group_budget(source, groups, max_groups, location)?;
        self.check_markup_anchor(source, field, location)
    }
}

/// 编译器错误信息可能跨多行（含定位示意图），压缩为单行
fn single_line_message(message: &str) -> String {
    message
        .lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix("error:"))
        .map(|detail| detail.trim().to_string())
        .unwrap_or_else(|| message.split_whitespace().collect::<Vec<_>>().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PatternSlot;
    use crate::error::FailureKind;

    fn location(field: PatternField) -> RuleLocation {
        RuleLocation::pattern("Foo", field, &PatternSlot::Index(0))
    }

    #[test]
    fn test_group_count_ignores_non_capturing() {
        let checker = RegexChecker::default();
        let loc = location(PatternField::Url);
        assert_eq!(checker.count_groups("foo", &loc).unwrap(), 0);
        assert_eq!(checker.count_groups("foo(bar)", &loc).unwrap(), 1);
        assert_eq!(checker.count_groups(r"foo(?:bar)(baz)", &loc).unwrap(), 1);
        assert_eq!(checker.count_groups(r"(?P<v>[\d.]+)(a(b))", &loc).unwrap(), 3);
        // 转义括号与字符集内括号不是分组
        assert_eq!(checker.count_groups(r"\(x\)[()]", &loc).unwrap(), 0);
    }

    #[test]
    fn test_invalid_regex_reports_compiler_message() {
        let checker = RegexChecker::default();
        let err = checker
            .count_groups("foo(", &location(PatternField::Script))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidRegex);
        let message = err.to_string();
        assert!(message.starts_with("Invalid regular expression: "));
        assert!(message.ends_with("(Foo: script[0])"));
        assert!(!message.contains('\n'));
    }

    #[test]
    fn test_too_many_groups() {
        let checker = RegexChecker::default();
        let loc = location(PatternField::Html);
        assert!(checker.check("<foo(bar)", 1, PatternField::Html, &loc).is_ok());

        let err = checker
            .check("<foo(bar)(baz)", 1, PatternField::Html, &loc)
            .unwrap_err();
        assert_eq!(
            err,
            LintError::TooManyGroups {
                expected: 1,
                actual: 2,
                regex: "<foo(bar)(baz)".to_string(),
                location: loc.clone(),
            }
        );
    }

    #[test]
    fn test_unreferenced_group_is_rejected() {
        let checker = RegexChecker::default();
        let err = checker
            .check("jquery-([0-9.]+)", 0, PatternField::Script, &location(PatternField::Script))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::TooManyGroups);
    }

    #[test]
    fn test_markup_anchor_only_for_html() {
        let checker = RegexChecker::default();
        let html = location(PatternField::Html);
        assert!(checker.check("<div", 0, PatternField::Html, &html).is_ok());
        assert!(checker.check("data-foo=\"x\">", 0, PatternField::Html, &html).is_ok());

        let err = checker.check("foo", 0, PatternField::Html, &html).unwrap_err();
        assert_eq!(err.to_string(), "HTML pattern must include < or >: foo (Foo: html[0])");

        let url = location(PatternField::Url);
        assert!(checker.check("foo", 0, PatternField::Url, &url).is_ok());
    }

    #[test]
    fn test_look_around_and_backreferences_compile() {
        let checker = RegexChecker::default();
        let loc = location(PatternField::Script);
        assert_eq!(checker.count_groups(r"jquery(?!\.min)", &loc).unwrap(), 0);
        assert_eq!(checker.count_groups(r"(?<=v)(\d+)", &loc).unwrap(), 1);
        assert_eq!(checker.count_groups(r"<a (x)\1", &loc).unwrap(), 1);
    }

    #[test]
    fn test_look_around_captures_are_counted() {
        let checker = RegexChecker::default();
        let loc = location(PatternField::Url);
        assert_eq!(checker.count_groups(r"foo(?=(\d+))", &loc).unwrap(), 1);

        let err = checker
            .check(r"foo(?=(\d+))", 0, PatternField::Url, &loc)
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::TooManyGroups);
    }

    #[test]
    fn test_single_line_message() {
        let multi = "regex parse error:\n    foo(\n       ^\nerror: unclosed group";
        assert_eq!(single_line_message(multi), "unclosed group");
        assert_eq!(single_line_message("Parsing error\n  at  position 3"), "Parsing error at position 3");
    }
}
