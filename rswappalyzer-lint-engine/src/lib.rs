// 核心公共结构体+枚举
pub mod core;
// 内核错误定义
pub mod error;
// 规则源解析 (Wappalyzer JSON)
pub mod source;
// 模式拆分+标记校验+正则语义+关联/图标校验
pub mod checker;
// 日志格式化工具
pub mod utils;

// 顶层导出常用类型
pub use crate::core::{
    CategoryRule, FieldPatterns, IconAssetSet, IconEntry, IconEntryKind, PatternEntry,
    PatternField, PatternSlot, RuleLibrary, RuleLocation, TechnologyRule,
};
pub use checker::{CheckMode, CheckOptions, CheckStats, LintReport, RuleChecker};
pub use error::{FailureKind, LintError, LintResult};
pub use source::WappalyzerParser;
