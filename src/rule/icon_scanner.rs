//! 图标目录扫描
//! 一次性读取目录快照，校验阶段不再访问文件系统

use std::io::{Error as IoError, ErrorKind};
use std::path::Path;

use log::debug;
use rswappalyzer_lint_engine::{IconAssetSet, IconEntry, IconEntryKind};
use walkdir::WalkDir;

use crate::error::RswLintResult;

pub struct IconScanner;

impl IconScanner {
    /// 扫描图标目录（仅一层，跟随符号链接判断条目类型）
    pub fn scan(dir: &Path) -> RswLintResult<IconAssetSet> {
        if !dir.is_dir() {
            return Err(IoError::new(
                ErrorKind::NotFound,
                format!("Icon directory not found: {}", dir.display()),
            )
            .into());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(IoError::from)?;
            let file_type = entry.file_type();
            let kind = if file_type.is_file() {
                IconEntryKind::File
            } else if file_type.is_dir() {
                IconEntryKind::Directory
            } else {
                IconEntryKind::Other
            };

            entries.push(IconEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        debug!("Scanned {} icon entries in {}", entries.len(), dir.display());
        Ok(IconAssetSet::new(dir.display().to_string(), entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RswLintError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_classifies_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("WordPress.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join(".gitkeep"), "").unwrap();
        fs::create_dir(dir.path().join("converted")).unwrap();
        fs::write(dir.path().join("converted").join("nested.png"), "").unwrap();

        let icons = IconScanner::scan(dir.path()).unwrap();
        assert_eq!(icons.len(), 3);
        assert!(icons.contains("WordPress.svg"));
        assert!(icons.contains("converted"));
        assert!(!icons.contains("nested.png"));

        let converted = icons.entries.iter().find(|e| e.file_name == "converted").unwrap();
        assert_eq!(converted.kind, IconEntryKind::Directory);
        let hidden = icons.entries.iter().find(|e| e.file_name == ".gitkeep").unwrap();
        assert!(hidden.is_hidden());
        assert_eq!(
            icons.path_of("WordPress.svg"),
            format!("{}/WordPress.svg", dir.path().display())
        );
    }

    #[test]
    fn test_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = IconScanner::scan(&dir.path().join("icons")).unwrap_err();
        assert!(matches!(err, RswLintError::IoError(_)));
    }
}
