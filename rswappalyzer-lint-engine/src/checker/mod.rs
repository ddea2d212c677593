//! 规则校验模块
//! 单条模式：拆分 → 标记校验 → 正则语义检查
//! 单个技术：全部模式字段 → 分类 → 图标 → 官网 → implies → excludes
//! 全部技术之后：图标目录对账

pub mod check_stats;
pub mod decomposer;
pub mod failures;
pub mod flag_validator;
pub mod graph_validator;
pub mod icon_validator;
pub mod regex_checker;

use std::time::Instant;

use rustc_hash::FxHashSet;

pub use check_stats::CheckStats;
pub use decomposer::{decompose, DecomposedPattern, Flag, FLAG_DELIMITER};
pub use failures::{CheckMode, Failures};
pub use flag_validator::FlagScope;
pub use regex_checker::RegexChecker;

use crate::core::{FieldPatterns, IconAssetSet, PatternEntry, RuleLibrary, RuleLocation, TechnologyRule};
use crate::error::{LintError, LintResult};
use crate::utils::preview_compact;

/// 校验选项
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub mode: CheckMode,
}

/// 校验结果汇总
/// FailFast 模式下 failures 恒为空（首个错误以 Err 返回）
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub technologies: usize,
    pub patterns: usize,
    pub failures: Vec<LintError>,
}

impl LintReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 规则库校验器
#[derive(Debug, Clone, Default)]
pub struct RuleChecker {
    options: CheckOptions,
    regex_checker: RegexChecker,
}

impl RuleChecker {
    pub fn new(options: CheckOptions) -> Self {
        Self {
            options,
            regex_checker: RegexChecker::new(),
        }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// 校验整个规则库
    pub fn check(&self, library: &RuleLibrary, icons: &IconAssetSet) -> LintResult<LintReport> {
        let start = Instant::now();
        let mut failures = Failures::new(self.options.mode);
        let mut stats = CheckStats::default();
        let names = library.technology_names();

        log::debug!(
            "Checking {} technologies against {} categories and {} icon entries ({:?})",
            library.technologies.len(),
            library.category_rules.len(),
            icons.len(),
            self.options.mode
        );

        for tech in &library.technologies {
            self.check_technology(tech, library, &names, icons, &mut failures, &mut stats)?;
        }

        icon_validator::check_icon_assets(library, icons, &mut failures)?;

        stats.print_stats(start.elapsed());

        Ok(LintReport {
            technologies: stats.technologies,
            patterns: stats.patterns,
            failures: failures.into_inner(),
        })
    }

    /// 校验单个技术规则
    pub fn check_technology(
        &self,
        tech: &TechnologyRule,
        library: &RuleLibrary,
        names: &FxHashSet<&str>,
        icons: &IconAssetSet,
        failures: &mut Failures,
        stats: &mut CheckStats,
    ) -> LintResult<()> {
        stats.technologies += 1;

        for field_patterns in &tech.patterns {
            self.check_field(tech, field_patterns, failures, stats)?;
        }

        stats.category_refs += tech.category_ids.len();
        graph_validator::check_categories(tech, library, failures)?;
        failures.record(graph_validator::check_icon_reference(tech, icons))?;
        failures.record(graph_validator::check_website(tech))?;

        stats.implies_edges += tech.implies.len();
        graph_validator::check_implies(tech, names, failures)?;
        stats.excludes_edges += tech.excludes.len();
        graph_validator::check_excludes(tech, names, failures)?;

        Ok(())
    }

    fn check_field(
        &self,
        tech: &TechnologyRule,
        field_patterns: &FieldPatterns,
        failures: &mut Failures,
        stats: &mut CheckStats,
    ) -> LintResult<()> {
        stats.update_pattern_stats(field_patterns.field, field_patterns.entries.len());

        for entry in &field_patterns.entries {
            let location = RuleLocation::pattern(&tech.name, field_patterns.field, &entry.slot);
            self.check_pattern(entry, field_patterns, &location, failures, stats)?;
        }
        Ok(())
    }

    /// 单条模式：标记 → 编译 → 捕获组预算 → 标签定界符
    fn check_pattern(
        &self,
        entry: &PatternEntry,
        field_patterns: &FieldPatterns,
        location: &RuleLocation,
        failures: &mut Failures,
        stats: &mut CheckStats,
    ) -> LintResult<()> {
        let decomposed = decompose(&entry.pattern);
        if decomposed.flags.iter().any(|f| f.key == "version") {
            stats.versioned_patterns += 1;
        }

        log::trace!(
            "Checking {} => {}",
            location,
            preview_compact(decomposed.regex, 80)
        );

        let max_groups =
            flag_validator::validate_flags(&decomposed.flags, FlagScope::Pattern, location, failures)?;

        let checker = &self.regex_checker;
        if let Some(groups) = failures.record(checker.count_groups(decomposed.regex, location))? {
            failures.record(checker.check_group_budget(decomposed.regex, groups, max_groups, location))?;
        }
        failures.record(checker.check_markup_anchor(decomposed.regex, field_patterns.field, location))?;

        Ok(())
    }
}
