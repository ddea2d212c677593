//! 技术条目级检查：分类引用、图标引用、官网地址、implies / excludes 关联边

use rustc_hash::FxHashSet;
use url::Url;

use super::decomposer::decompose;
use super::failures::Failures;
use super::flag_validator::{validate_flags, FlagScope};
use crate::core::{IconAssetSet, RuleLibrary, RuleLocation, TechnologyRule};
use crate::error::{LintError, LintResult};

/// 每个分类 ID 都必须存在于分类表
pub fn check_categories(
    tech: &TechnologyRule,
    library: &RuleLibrary,
    failures: &mut Failures,
) -> LintResult<()> {
    for category in &tech.category_ids {
        if !library.has_category(category) {
            failures.record::<()>(Err(LintError::UnknownCategory {
                category: category.clone(),
                technology: tech.name.clone(),
            }))?;
        }
    }
    Ok(())
}

/// 声明的图标必须存在于图标目录
pub fn check_icon_reference(tech: &TechnologyRule, icons: &IconAssetSet) -> LintResult<()> {
    match tech.icon.as_deref() {
        Some(icon) if !icons.contains(icon) => Err(LintError::MissingIconFile {
            icon: icon.to_string(),
            technology: tech.name.clone(),
        }),
        _ => Ok(()),
    }
}

/// 官网必须是 http / https 绝对地址
pub fn check_website(tech: &TechnologyRule) -> LintResult<()> {
    let website = tech.website.as_deref().unwrap_or_default();
    let valid = Url::parse(website)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(LintError::InvalidWebsiteUrl {
            website: website.to_string(),
            technology: tech.name.clone(),
        })
    }
}

/// implies 引用的技术必须存在，附带的标记仅允许 confidence
pub fn check_implies(
    tech: &TechnologyRule,
    names: &FxHashSet<&str>,
    failures: &mut Failures,
) -> LintResult<()> {
    for implied in &tech.implies {
        let decomposed = decompose(implied);
        let location = RuleLocation::edge(&tech.name, "implies", implied);

        if !names.contains(decomposed.regex) {
            failures.record::<()>(Err(LintError::UnknownImpliedTechnology {
                name: decomposed.regex.to_string(),
                location: location.clone(),
            }))?;
        }

        validate_flags(&decomposed.flags, FlagScope::Implies, &location, failures)?;
    }
    Ok(())
}

/// excludes 整串即技术名，不解析标记
pub fn check_excludes(
    tech: &TechnologyRule,
    names: &FxHashSet<&str>,
    failures: &mut Failures,
) -> LintResult<()> {
    for excluded in &tech.excludes {
        if !names.contains(excluded.as_str()) {
            failures.record::<()>(Err(LintError::UnknownExcludedTechnology {
                name: excluded.clone(),
                location: RuleLocation::edge(&tech.name, "excludes", excluded),
            }))?;
        }
    }
    Ok(())
}
