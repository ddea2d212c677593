//! 模式拆分：`正则\;key:value\;key:value` → 正则源 + 有序标记列表

/// 模式标记分隔符（字面量反斜杠+分号）
pub const FLAG_DELIMITER: &str = r"\;";

/// 单个模式标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Flag<'a> {
    /// 按第一个冒号拆分键值，无冒号时整段为键、值为空
    pub fn parse(segment: &'a str) -> Self {
        match segment.split_once(':') {
            Some((key, value)) => Flag { key, value },
            None => Flag {
                key: segment,
                value: "",
            },
        }
    }
}

/// 拆分后的模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedPattern<'a> {
    pub regex: &'a str,
    pub flags: Vec<Flag<'a>>,
}

/// 拆分模式串，不做任何合法性判断
pub fn decompose(raw: &str) -> DecomposedPattern<'_> {
    let mut segments = raw.split(FLAG_DELIMITER);
    let regex = segments.next().unwrap_or_default();

    DecomposedPattern {
        regex,
        flags: segments.map(Flag::parse).collect(),
    }
}
