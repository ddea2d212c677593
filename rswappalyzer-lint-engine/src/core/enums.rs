use std::fmt::{Display, Formatter};

/// 模式字段枚举，定义规则可声明检测模式的所有维度
/// 声明顺序即校验顺序
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum PatternField {
    Url,
    Html,
    Meta,
    Headers,
    Cookies,
    Script,
    ScriptSrc,
    Js,
}

impl PatternField {
    /// 固定校验顺序
    pub const ALL: [PatternField; 8] = [
        PatternField::Url,
        PatternField::Html,
        PatternField::Meta,
        PatternField::Headers,
        PatternField::Cookies,
        PatternField::Script,
        PatternField::ScriptSrc,
        PatternField::Js,
    ];

    /// 规则 JSON 中的字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternField::Url => "url",
            PatternField::Html => "html",
            PatternField::Meta => "meta",
            PatternField::Headers => "headers",
            PatternField::Cookies => "cookies",
            PatternField::Script => "script",
            PatternField::ScriptSrc => "scriptSrc",
            PatternField::Js => "js",
        }
    }

    /// HTML 规则必须出现标签定界符
    pub fn requires_markup_anchor(&self) -> bool {
        matches!(self, PatternField::Html)
    }
}

impl Display for PatternField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 模式在字段内的定位：列表下标，或 KV 字段的子键（Header 名 / Meta 名等）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternSlot {
    Index(usize),
    Key(String),
}

impl Display for PatternSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternSlot::Index(idx) => write!(f, "{}", idx),
            PatternSlot::Key(key) => f.write_str(key),
        }
    }
}
