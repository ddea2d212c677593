//! 图标目录全局检查：文件类型 + 孤儿文件

use super::failures::Failures;
use crate::core::{IconAssetSet, IconEntryKind, RuleLibrary};
use crate::error::{LintError, LintResult};

/// 支持的图标扩展名（不区分大小写）
pub const ICON_EXTENSIONS: [&str; 2] = ["png", "svg"];

/// 取最后一个点之后的部分；无点时为整个文件名
fn extension_of(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

pub fn is_supported_icon(file_name: &str) -> bool {
    let ext = extension_of(file_name);
    ICON_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// 对账图标目录与技术规则引用的图标
/// 跳过隐藏文件与非普通文件
pub fn check_icon_assets(
    library: &RuleLibrary,
    icons: &IconAssetSet,
    failures: &mut Failures,
) -> LintResult<()> {
    let referenced = library.referenced_icons();
    let mut checked = 0usize;

    for entry in &icons.entries {
        if entry.kind != IconEntryKind::File || entry.is_hidden() {
            continue;
        }
        checked += 1;

        if !is_supported_icon(&entry.file_name) {
            failures.record::<()>(Err(LintError::UnsupportedIconType {
                path: icons.path_of(&entry.file_name),
            }))?;
        }

        if !referenced.contains(entry.file_name.as_str()) {
            failures.record::<()>(Err(LintError::OrphanIconFile {
                path: icons.path_of(&entry.file_name),
            }))?;
        }
    }

    log::debug!(
        "Icon reconciliation: {} entries, {} files checked, {} referenced by rules",
        icons.len(),
        checked,
        referenced.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::failures::CheckMode;
    use crate::core::{IconEntry, TechnologyRule};
    use crate::error::FailureKind;

    fn library_with_icons(icons: &[&str]) -> RuleLibrary {
        RuleLibrary {
            technologies: icons
                .iter()
                .enumerate()
                .map(|(idx, icon)| {
                    let mut tech = TechnologyRule::new(format!("Tech{}", idx));
                    tech.icon = Some(icon.to_string());
                    tech
                })
                .collect(),
            ..RuleLibrary::default()
        }
    }

    #[test]
    fn test_extension_detection() {
        assert!(is_supported_icon("Foo.png"));
        assert!(is_supported_icon("Foo.SVG"));
        assert!(is_supported_icon("a.b.Png"));
        assert!(!is_supported_icon("logo.jpg"));
        assert!(!is_supported_icon("logo"));
        // 无扩展名时整个文件名参与判断
        assert!(is_supported_icon("svg"));
        assert!(!is_supported_icon("Foo.png.bak"));
    }

    #[test]
    fn test_unsupported_type_even_when_referenced() {
        let library = library_with_icons(&["logo.jpg"]);
        let icons = IconAssetSet::from_file_names("icons", ["logo.jpg"]);
        let mut failures = Failures::new(CheckMode::FailFast);
        let err = check_icon_assets(&library, &icons, &mut failures).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnsupportedIconType);
        assert_eq!(
            err.to_string(),
            "Incorrect file type, expected PNG or SVG: icons/logo.jpg"
        );
    }

    #[test]
    fn test_orphan_icon() {
        let library = library_with_icons(&["Foo.svg"]);
        let icons = IconAssetSet::from_file_names("icons/", ["Foo.svg", "Bar.png"]);
        let mut failures = Failures::new(CheckMode::FailFast);
        let err = check_icon_assets(&library, &icons, &mut failures).unwrap_err();
        assert_eq!(err.to_string(), "Extraneous file: icons/Bar.png");
    }

    #[test]
    fn test_hidden_and_directories_skipped() {
        let library = library_with_icons(&["Foo.svg"]);
        let icons = IconAssetSet::new(
            "icons",
            vec![
                IconEntry::file("Foo.svg"),
                IconEntry::file(".DS_Store"),
                IconEntry {
                    file_name: "converted".to_string(),
                    kind: IconEntryKind::Directory,
                },
            ],
        );
        let mut failures = Failures::new(CheckMode::FailFast);
        assert!(check_icon_assets(&library, &icons, &mut failures).is_ok());
    }

    #[test]
    fn test_fail_slow_reports_type_and_orphan() {
        let library = library_with_icons(&[]);
        let icons = IconAssetSet::from_file_names("icons", ["a.gif"]);
        let mut failures = Failures::new(CheckMode::FailSlow);
        check_icon_assets(&library, &icons, &mut failures).unwrap();
        let kinds: Vec<_> = failures.into_inner().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![FailureKind::UnsupportedIconType, FailureKind::OrphanIconFile]);
    }
}
