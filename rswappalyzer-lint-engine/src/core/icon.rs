use rustc_hash::FxHashSet;

/// 图标目录条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEntryKind {
    File,
    Directory,
    Other,
}

/// 图标目录中的单个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub file_name: String,
    pub kind: IconEntryKind,
}

impl IconEntry {
    pub fn file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: IconEntryKind::File,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.file_name.starts_with('.')
    }
}

/// 预加载的图标目录快照
/// 校验阶段只查询内存集合，不再访问文件系统
#[derive(Debug, Clone, Default)]
pub struct IconAssetSet {
    /// 目录展示路径，用于拼接错误信息
    pub dir: String,
    pub entries: Vec<IconEntry>,
    names: FxHashSet<String>,
}

impl IconAssetSet {
    pub fn new(dir: impl Into<String>, entries: Vec<IconEntry>) -> Self {
        let names = entries.iter().map(|e| e.file_name.clone()).collect();
        Self {
            dir: dir.into(),
            entries,
            names,
        }
    }

    /// 仅由普通文件构成的快照
    pub fn from_file_names<I, S>(dir: impl Into<String>, file_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = file_names.into_iter().map(IconEntry::file).collect();
        Self::new(dir, entries)
    }

    /// 目录下是否存在该名称的条目
    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    /// 条目完整展示路径
    pub fn path_of(&self, file_name: &str) -> String {
        if self.dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.dir.trim_end_matches('/'), file_name)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
