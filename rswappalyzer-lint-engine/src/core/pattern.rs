use std::fmt::{Display, Formatter};

use super::enums::{PatternField, PatternSlot};

/// 单条原始模式（入库时已归一化，pattern 保留 `\;` 标记原文）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub slot: PatternSlot,
    pub pattern: String,
}

impl PatternEntry {
    pub fn new(slot: PatternSlot, pattern: impl Into<String>) -> Self {
        Self {
            slot,
            pattern: pattern.into(),
        }
    }
}

/// 单个字段下的全部模式，按声明顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPatterns {
    pub field: PatternField,
    pub entries: Vec<PatternEntry>,
}

/// 错误定位信息，渲染为 `技术名: 字段[子键或下标]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLocation {
    pub technology: String,
    pub field: String,
    pub slot: PatternSlot,
}

impl RuleLocation {
    pub fn new(technology: &str, field: impl Into<String>, slot: PatternSlot) -> Self {
        Self {
            technology: technology.to_string(),
            field: field.into(),
            slot,
        }
    }

    /// 模式字段定位
    pub fn pattern(technology: &str, field: PatternField, slot: &PatternSlot) -> Self {
        Self::new(technology, field.as_str(), slot.clone())
    }

    /// implies / excludes 关联边定位（子键为原始引用串）
    pub fn edge(technology: &str, edge: &str, raw: &str) -> Self {
        Self::new(technology, edge, PatternSlot::Key(raw.to_string()))
    }
}

impl Display for RuleLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}[{}]", self.technology, self.field, self.slot)
    }
}
