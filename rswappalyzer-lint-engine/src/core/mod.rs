mod enums;
mod icon;
mod pattern;
mod rule;

// 导出常用项
pub use enums::{PatternField, PatternSlot};
pub use icon::{IconAssetSet, IconEntry, IconEntryKind};
pub use pattern::{FieldPatterns, PatternEntry, RuleLocation};
pub use rule::{CategoryRule, RuleLibrary, TechnologyRule};
