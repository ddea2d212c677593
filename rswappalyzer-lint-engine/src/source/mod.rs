//! 规则源解析模块
pub mod wappalyzer;

pub use wappalyzer::{WappalyzerOriginalTechRule, WappalyzerParser};
