//! 负责校验统计数据的定义、更新与格式化输出

use crate::core::PatternField;

/// 规则校验统计信息
/// 1. 技术规则数 / 模式总数
/// 2. 各字段的模式数量
/// 3. 关联边与分类引用数量
#[derive(Debug, Default, Clone)]
pub struct CheckStats {
    // ========== 技术规则统计 ==========
    pub technologies: usize,
    pub patterns: usize,

    // ========== 字段模式统计 ==========
    pub url_patterns: usize,
    pub html_patterns: usize,
    pub meta_patterns: usize,
    pub header_patterns: usize,
    pub cookie_patterns: usize,
    pub script_patterns: usize,
    pub script_src_patterns: usize,
    pub js_patterns: usize,

    /// 带 version 标记的模式数
    pub versioned_patterns: usize,

    // ========== 关联统计 ==========
    pub implies_edges: usize,
    pub excludes_edges: usize,
    pub category_refs: usize,
}

impl CheckStats {
    /// 更新字段模式数量
    pub fn update_pattern_stats(&mut self, field: PatternField, count: usize) {
        self.patterns += count;
        match field {
            PatternField::Url => self.url_patterns += count,
            PatternField::Html => self.html_patterns += count,
            PatternField::Meta => self.meta_patterns += count,
            PatternField::Headers => self.header_patterns += count,
            PatternField::Cookies => self.cookie_patterns += count,
            PatternField::Script => self.script_patterns += count,
            PatternField::ScriptSrc => self.script_src_patterns += count,
            PatternField::Js => self.js_patterns += count,
        }
    }

    /// 格式化输出统计信息（结构化日志）
    pub fn print_stats(&self, total_time: std::time::Duration) {
        log::debug!(
            "Rule check completed | Time: {:?} | Technologies: {} | Patterns: {} (versioned {})",
            total_time,
            self.technologies,
            self.patterns,
            self.versioned_patterns
        );

        log::debug!(
            "Pattern stats: URL {} | HTML {} | Meta {} | Header {} | Cookie {} | Script {} | ScriptSrc {} | JS {}",
            self.url_patterns,
            self.html_patterns,
            self.meta_patterns,
            self.header_patterns,
            self.cookie_patterns,
            self.script_patterns,
            self.script_src_patterns,
            self.js_patterns
        );

        log::debug!(
            "Reference stats: Categories {} | Implies {} | Excludes {}",
            self.category_refs,
            self.implies_edges,
            self.excludes_edges
        );
    }
}
