use serde::Deserialize;
use serde_json::{Map, Value};
use rustc_hash::FxHashMap as HashMap;

use crate::core::{
    CategoryRule, FieldPatterns, PatternEntry, PatternField, PatternSlot, RuleLibrary,
    TechnologyRule,
};
use crate::error::{LintError, LintResult};

/// Wappalyzer 原始技术规则
/// 模式字段保留原始 JSON 值，由解析器统一归一化
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WappalyzerOriginalTechRule {
    #[serde(default)]
    pub website: Option<String>,
    /// 必填且非空
    #[serde(rename = "cats")]
    pub category_ids: Vec<Value>,
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub html: Option<Value>,
    #[serde(default)]
    pub meta: Option<Value>,
    #[serde(default)]
    pub headers: Option<Value>,
    #[serde(default)]
    pub cookies: Option<Value>,
    #[serde(default)]
    pub script: Option<Value>,
    #[serde(rename = "scriptSrc", default)]
    pub script_src: Option<Value>,
    #[serde(default)]
    pub js: Option<Value>,

    #[serde(default)]
    pub implies: Option<Value>,
    #[serde(default)]
    pub excludes: Option<Value>,
}

impl WappalyzerOriginalTechRule {
    fn field_value(&self, field: PatternField) -> Option<&Value> {
        match field {
            PatternField::Url => self.url.as_ref(),
            PatternField::Html => self.html.as_ref(),
            PatternField::Meta => self.meta.as_ref(),
            PatternField::Headers => self.headers.as_ref(),
            PatternField::Cookies => self.cookies.as_ref(),
            PatternField::Script => self.script.as_ref(),
            PatternField::ScriptSrc => self.script_src.as_ref(),
            PatternField::Js => self.js.as_ref(),
        }
    }
}

/// 空值（null / 空字符串）视为未声明
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn parse_error(technology: &str, field: &str, detail: impl std::fmt::Display) -> LintError {
    LintError::RuleParse(format!("{} ({}: {})", detail, technology, field))
}

/// Wappalyzer 规则解析器
/// 兼容 `apps` / `technologies` 两种根键；技术声明顺序依赖 serde_json 的 preserve_order
#[derive(Debug, Clone, Default)]
pub struct WappalyzerParser;

impl WappalyzerParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_from_str(&self, content: &str) -> LintResult<RuleLibrary> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| LintError::RuleParse(format!("Wappalyzer JSON parse failed: {}", e)))?;
        self.parse_from_value(value)
    }

    /// 解析完整规则库 `{ "apps": {...}, "categories": {...} }`
    pub fn parse_from_value(&self, value: Value) -> LintResult<RuleLibrary> {
        let Value::Object(mut root) = value else {
            return Err(LintError::RuleParse(
                "Dataset root must be a JSON object".to_string(),
            ));
        };

        let technologies = root
            .remove("technologies")
            .or_else(|| root.remove("apps"))
            .ok_or_else(|| {
                LintError::RuleParse("Dataset has no `apps` or `technologies` object".to_string())
            })?;
        let categories = root.remove("categories").unwrap_or(Value::Object(Map::new()));

        Ok(RuleLibrary {
            technologies: self.parse_technologies_value(technologies)?,
            category_rules: self.parse_categories_value(categories)?,
        })
    }

    /// 解析技术规则对象（技术名 → 规则），保留声明顺序
    pub fn parse_technologies_value(&self, value: Value) -> LintResult<Vec<TechnologyRule>> {
        let Value::Object(map) = value else {
            return Err(LintError::RuleParse(
                "Technologies must be a JSON object".to_string(),
            ));
        };

        map.into_iter()
            .map(|(name, raw)| {
                let original: WappalyzerOriginalTechRule = serde_json::from_value(raw)
                    .map_err(|e| LintError::RuleParse(format!("{} ({})", e, name)))?;
                self.convert_original_tech_rule(name, original)
            })
            .collect()
    }

    /// 解析分类对象，仅要求键存在，元信息宽松读取
    pub fn parse_categories_value(&self, value: Value) -> LintResult<HashMap<String, CategoryRule>> {
        let Value::Object(map) = value else {
            return Err(LintError::RuleParse(
                "Categories must be a JSON object".to_string(),
            ));
        };

        Ok(map
            .into_iter()
            .map(|(id, meta)| {
                let name = meta
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let priority = meta
                    .get("priority")
                    .and_then(Value::as_u64)
                    .and_then(|p| u32::try_from(p).ok());
                (id.clone(), CategoryRule { id, name, priority })
            })
            .collect())
    }

    /// 原始规则 → 标准化规则
    pub fn convert_original_tech_rule(
        &self,
        name: String,
        original: WappalyzerOriginalTechRule,
    ) -> LintResult<TechnologyRule> {
        let mut patterns = Vec::new();
        for field in PatternField::ALL {
            let Some(value) = original.field_value(field) else {
                continue;
            };
            let entries = normalize_pattern_value(&name, field.as_str(), value)?;
            if !entries.is_empty() {
                patterns.push(FieldPatterns { field, entries });
            }
        }

        if original.category_ids.is_empty() {
            return Err(parse_error(&name, "cats", "Technology must declare at least one category"));
        }
        let category_ids = original
            .category_ids
            .iter()
            .map(|cat| match cat {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(parse_error(&name, "cats", format!("Invalid category id {}", other))),
            })
            .collect::<LintResult<Vec<_>>>()?;

        let implies = normalize_reference_value(&name, "implies", original.implies.as_ref())?;
        let excludes = normalize_reference_value(&name, "excludes", original.excludes.as_ref())?;

        Ok(TechnologyRule {
            name,
            patterns,
            category_ids,
            icon: original.icon.filter(|icon| !icon.is_empty()),
            website: original.website,
            implies,
            excludes,
        })
    }
}

/// 兼容：单字符串 / 字符串数组 / KV 对象（值为字符串或字符串数组）
/// 统一展开为 (子键或下标, 模式串) 序列
pub fn normalize_pattern_value(
    technology: &str,
    field: &str,
    value: &Value,
) -> LintResult<Vec<PatternEntry>> {
    if is_blank(value) {
        return Ok(Vec::new());
    }

    match value {
        Value::String(s) => Ok(vec![PatternEntry::new(PatternSlot::Index(0), s.as_str())]),
        Value::Array(arr) => arr
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::String(s) => Ok(PatternEntry::new(PatternSlot::Index(idx), s.as_str())),
                other => Err(parse_error(technology, field, format!("Pattern must be a string, got {}", other))),
            })
            .collect(),
        Value::Object(map) => {
            let mut entries = Vec::new();
            for (key, item) in map {
                let leaves: Vec<&Value> = match item {
                    Value::Array(arr) => arr.iter().collect(),
                    single => vec![single],
                };
                for leaf in leaves {
                    let Value::String(s) = leaf else {
                        return Err(parse_error(
                            technology,
                            &format!("{}[{}]", field, key),
                            format!("Pattern must be a string, got {}", leaf),
                        ));
                    };
                    entries.push(PatternEntry::new(PatternSlot::Key(key.clone()), s.as_str()));
                }
            }
            Ok(entries)
        }
        other => Err(parse_error(technology, field, format!("Unsupported pattern value {}", other))),
    }
}

/// implies / excludes：单值统一为单元素列表
pub fn normalize_reference_value(
    technology: &str,
    field: &str,
    value: Option<&Value>,
) -> LintResult<Vec<String>> {
    let Some(value) = value.filter(|v| !is_blank(v)) else {
        return Ok(Vec::new());
    };

    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(arr) => arr
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(parse_error(technology, field, format!("Reference must be a string, got {}", other))),
            })
            .collect(),
        other => Err(parse_error(technology, field, format!("Unsupported reference value {}", other))),
    }
}
