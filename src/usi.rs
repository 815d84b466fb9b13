//! USI 类型封装.
//!
//! USI 结构: 9 字符 payload + 1 校验位 = 10 字符。
//! `Usi` 在构造时即保证字符集与校验位不变式，与宽松的
//! [`verify_key`](crate::verify_key) 不同，解析失败会返回具体错误。

use crate::charset::is_valid_char;
use crate::error::{Error, Result};
use crate::luhn::{generate_check_character, KEY_LEN, PREFIX_LEN};

/// 10 字符 USI，包含 9 字符 payload + 1 校验位.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Usi {
    /// 10 字符 ASCII (大写).
    chars: [u8; KEY_LEN],
}

impl Usi {
    /// 从 9 字符前缀创建 USI（自动计算校验位）.
    ///
    /// # Example
    /// ```
    /// use usikit::Usi;
    /// let usi = Usi::new("BNGH7C75F").unwrap();
    /// assert_eq!(usi.as_str(), "BNGH7C75FN");
    /// assert_eq!(usi.check_character(), 'N');
    /// ```
    ///
    /// # Errors
    /// 当前缀长度不是 9 或包含非法字符时返回错误。
    pub fn new(prefix: &str) -> Result<Self> {
        let prefix = prefix.to_ascii_uppercase();

        if prefix.len() != PREFIX_LEN {
            return Err(Error::InvalidPrefixLength(prefix.len()));
        }

        let check = generate_check_character(&prefix)?;

        let mut chars = [0u8; KEY_LEN];
        chars[..PREFIX_LEN].copy_from_slice(prefix.as_bytes());
        chars[PREFIX_LEN] = check as u8;

        Ok(Self { chars })
    }

    /// 解析 10 字符 USI 字符串（验证字符集与校验位）.
    ///
    /// # Errors
    /// 当长度不是 10、包含非法字符或校验位不匹配时返回错误。
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.to_ascii_uppercase();

        if s.len() != KEY_LEN {
            return Err(Error::InvalidKeyLength(s.len()));
        }

        let bytes = s.as_bytes();

        // 验证所有字符（含校验位本身）
        for &c in bytes {
            if !is_valid_char(c) {
                return Err(Error::InvalidChar(c as char));
            }
        }

        let expected = generate_check_character(&s[..PREFIX_LEN])?;
        if bytes[PREFIX_LEN] != expected as u8 {
            return Err(Error::ChecksumMismatch {
                expected,
                got: bytes[PREFIX_LEN] as char,
            });
        }

        let mut chars = [0u8; KEY_LEN];
        chars.copy_from_slice(bytes);

        Ok(Self { chars })
    }

    /// 获取 payload 部分（前 9 字符）.
    ///
    /// # Panics
    /// 不会主动 panic；内部 `from_utf8(...).unwrap()` 依赖 `Usi` 仅包含 ASCII 字符。.
    #[must_use]
    pub fn prefix(&self) -> &str {
        // 所有字符都是 ASCII，from_utf8 必定成功
        #[allow(clippy::unwrap_used)]
        std::str::from_utf8(&self.chars[..PREFIX_LEN]).unwrap()
    }

    /// 获取校验位.
    #[must_use]
    pub const fn check_character(&self) -> char {
        self.chars[PREFIX_LEN] as char
    }

    /// 获取完整 10 字符 USI.
    ///
    /// # Panics
    /// 不会主动 panic；内部 `from_utf8(...).unwrap()` 依赖 `Usi` 仅包含 ASCII 字符。.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // 所有字符都是 ASCII，from_utf8 必定成功
        #[allow(clippy::unwrap_used)]
        std::str::from_utf8(&self.chars).unwrap()
    }

    /// 获取字节数组.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.chars
    }
}

impl std::fmt::Display for Usi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Usi {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == PREFIX_LEN {
            Self::new(s)
        } else {
            Self::parse(s)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Usi {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Usi {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
