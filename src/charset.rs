//! 字符集定义
//!
//! USI 的 32 字符字母表：数字 2-9 + 大写 A-Z（去掉 I, O）。
//! 0/1/I/O 因易混淆而被排除。字符在表中的位置即其 code point (0-31)。

/// 字符集：2-9 + A-Z (去掉 I, O)
pub const CHARSET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// 字符转索引 (0-31)，无效字符返回 None
///
/// 大小写敏感：调用方需先转大写（与参考实现一致，小写直接视为无效）。
#[inline]
#[must_use]
pub fn char_to_index(c: u8) -> Option<u8> {
    #[allow(clippy::cast_possible_truncation)]
    CHARSET.iter().position(|&x| x == c).map(|i| i as u8)
}

/// 索引转字符
#[inline]
#[must_use]
pub fn index_to_char(i: u8) -> Option<u8> {
    CHARSET.get(i as usize).copied()
}

/// 验证字符是否在字符集内
#[inline]
#[must_use]
pub fn is_valid_char(c: u8) -> bool {
    char_to_index(c).is_some()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_length() {
        assert_eq!(CHARSET.len(), 32);
    }

    #[test]
    fn test_excluded_chars() {
        // 0, 1, I, O 应被排除
        assert!(char_to_index(b'0').is_none());
        assert!(char_to_index(b'1').is_none());
        assert!(char_to_index(b'I').is_none());
        assert!(char_to_index(b'O').is_none());
    }

    #[test]
    fn test_valid_chars() {
        assert_eq!(char_to_index(b'2'), Some(0));
        assert_eq!(char_to_index(b'9'), Some(7));
        assert_eq!(char_to_index(b'A'), Some(8));
        assert_eq!(char_to_index(b'X'), Some(29));
        assert_eq!(char_to_index(b'Z'), Some(31));
    }

    #[test]
    fn test_case_sensitive() {
        // 小写不做归一化，直接无效
        assert!(char_to_index(b'a').is_none());
        assert!(char_to_index(b'z').is_none());
    }

    #[test]
    fn test_punctuation_not_found() {
        assert!(char_to_index(b'@').is_none());
        assert!(char_to_index(b'$').is_none());
    }

    #[test]
    fn test_round_trip() {
        for i in 0..32u8 {
            let c = index_to_char(i).unwrap();
            assert_eq!(char_to_index(c), Some(i));
        }
    }
}
