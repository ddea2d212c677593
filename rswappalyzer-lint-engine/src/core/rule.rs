use rustc_hash::{FxHashMap, FxHashSet};

use super::enums::PatternField;
use super::pattern::FieldPatterns;

/// 分类规则定义（仅 ID 参与校验，名称/优先级用于日志）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryRule {
    pub id: String,
    pub name: String,
    pub priority: Option<u32>,
}

/// 解析后的标准化技术规则
/// 1. patterns 按 PatternField::ALL 顺序排列，仅包含声明了的字段
/// 2. implies / excludes 已统一为列表
/// 3. category_ids 统一为字符串形式，与分类表键一致
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyRule {
    pub name: String,
    pub patterns: Vec<FieldPatterns>,
    pub category_ids: Vec<String>,
    pub icon: Option<String>,
    pub website: Option<String>,
    pub implies: Vec<String>,
    pub excludes: Vec<String>,
}

impl TechnologyRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 获取指定字段的模式
    pub fn field(&self, field: PatternField) -> Option<&FieldPatterns> {
        self.patterns.iter().find(|p| p.field == field)
    }

    /// 模式总数
    pub fn pattern_count(&self) -> usize {
        self.patterns.iter().map(|p| p.entries.len()).sum()
    }
}

/// 核心规则库结构体
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleLibrary {
    /// 技术规则（保留数据集声明顺序）
    pub technologies: Vec<TechnologyRule>,
    /// 分类规则（ID → 分类信息）
    pub category_rules: FxHashMap<String, CategoryRule>,
}

impl RuleLibrary {
    /// 技术名称集合，供 implies / excludes 引用校验
    pub fn technology_names(&self) -> FxHashSet<&str> {
        self.technologies.iter().map(|t| t.name.as_str()).collect()
    }

    /// 被任一技术引用的图标文件名集合
    pub fn referenced_icons(&self) -> FxHashSet<&str> {
        self.technologies
            .iter()
            .filter_map(|t| t.icon.as_deref())
            .collect()
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.category_rules.contains_key(id)
    }
}
