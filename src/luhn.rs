//! Luhn Mod N 校验算法 (N = 32).
//!
//! 从右向左扫描，权重因子在 2/1 之间交替，加数折叠回 [0, N) 后累加，
//! 校验字符是使全串校验和归零的唯一字符。

use crate::charset::{char_to_index, CHARSET};
use crate::error::{Error, Result};

/// USI 总长度（含校验位）
pub const KEY_LEN: usize = 10;

/// USI 前缀长度（payload，不含校验位）
pub const PREFIX_LEN: usize = 9;

/// 权重因子交替：2 -> 1，其余一律 -> 2
///
/// 对所有输入有定义；正常运行中只会出现 2,1,2,1,... 序列，
/// 默认分支仅在因子被破坏时兜底。
#[inline]
#[must_use]
pub const fn alternate_factor(factor: u32) -> u32 {
    if factor == 2 {
        1
    } else {
        2
    }
}

/// 核心计算：对 9 字节前缀求校验字符（不做长度与大小写归一化）.
fn check_character(prefix: &[u8]) -> Result<u8> {
    #[allow(clippy::cast_possible_truncation)]
    let n = CHARSET.len() as u32;
    let mut factor = 2u32;
    let mut sum = 0u32;

    for &c in prefix.iter().rev() {
        let code_point =
            u32::from(char_to_index(c).ok_or(Error::InvalidChar(c as char))?);

        let mut addend = factor * code_point;
        factor = alternate_factor(factor);
        // factor <= 2 且 code_point < n，一次折叠即可回到 [0, n)
        addend = (addend / n) + (addend % n);
        sum += addend;
    }

    let remainder = sum % n;
    let check = (n - remainder) % n;
    Ok(CHARSET[check as usize])
}

/// 计算 9 字符 USI 前缀的校验字符.
///
/// # Example
/// ```
/// use usikit::generate_check_character;
/// let check = generate_check_character("BNGH7C75F").unwrap();
/// assert_eq!(check, 'N');
/// ```
///
/// # Errors
/// 当长度不是 9 或包含字符集之外的字符时返回错误。
/// 不做大小写归一化：小写输入按无效字符处理，调用方需先转大写。
pub fn generate_check_character(prefix: &str) -> Result<char> {
    if prefix.len() != PREFIX_LEN {
        return Err(Error::InvalidPrefixLength(prefix.len()));
    }

    check_character(prefix.as_bytes()).map(char::from)
}

/// 验证 10 字符 USI 的校验位.
///
/// 输入先归一化为大写，再对前 9 字符重算校验字符并与第 10 字符比较。
///
/// # Example
/// ```
/// use usikit::verify_key;
/// assert!(verify_key("BNGH7C75FN").unwrap());
/// assert!(!verify_key("BNGH7C75FX").unwrap());
/// ```
///
/// # Errors
/// 当长度不是 10 或前 9 字符含字符集之外的字符时返回错误。
/// 第 10 字符只参与比较、不做字符集验证：字符集之外的校验位
/// 返回 `Ok(false)` 而非错误（与参考实现保持一致）。
pub fn verify_key(key: &str) -> Result<bool> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidKeyLength(key.len()));
    }

    let key = key.to_ascii_uppercase();
    let bytes = key.as_bytes();
    let check = check_character(&bytes[..PREFIX_LEN])?;

    Ok(bytes[PREFIX_LEN] == check)
}
