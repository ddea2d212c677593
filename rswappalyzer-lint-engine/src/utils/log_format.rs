use std::fmt::{self, Write};

/// 空白字符折叠 + 截断，用于日志中预览超长正则
/// 不创建中间 String，遍历到最大长度立即终止
#[inline(always)]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl<'a> fmt::Display for CompactView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut last_was_whitespace = false;

            for ch in self.source.chars() {
                if char_count >= self.max_length {
                    f.write_str("…")?;
                    break;
                }

                if ch.is_whitespace() {
                    if !last_was_whitespace {
                        f.write_char(' ')?;
                        char_count += 1;
                        last_was_whitespace = true;
                    }
                } else {
                    f.write_char(ch)?;
                    char_count += 1;
                    last_was_whitespace = false;
                }
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_compact() {
        assert_eq!(preview_compact("abc", 10).to_string(), "abc");
        assert_eq!(preview_compact("a  \n\t b", 10).to_string(), "a b");
        assert_eq!(preview_compact("abcdef", 3).to_string(), "abc…");
        assert_eq!(preview_compact("", 3).to_string(), "");
    }
}
