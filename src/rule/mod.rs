//! 规则模块：负责数据集与图标目录的加载
pub mod icon_scanner;
pub mod loader;

// 导出核心接口
pub use self::icon_scanner::IconScanner;
pub use self::loader::RuleLoader;
