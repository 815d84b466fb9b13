//! USIKit - USI Validation Kit
//!
//! 澳大利亚 Unique Student Identifier (USI) 的校验位生成与验证库，
//! 基于 Luhn Mod N 算法 (N = 32)。
//!
//! # USI 格式
//!
//! ```text
//! ┌───────────────────┬─────────────┐
//! │      Payload      │  CheckChar  │
//! │    9 characters   │ 1 character │
//! └───────────────────┴─────────────┘
//!        总计: 10 字符，字符集 2-9 + A-Z (去掉 I, O)
//! ```
//!
//! # Example
//!
//! ```
//! use usikit::{generate_check_character, verify_key, Usi};
//!
//! // 验证完整 USI
//! assert!(verify_key("BNGH7C75FN").unwrap());
//!
//! // 为 9 字符前缀计算校验位
//! let check = generate_check_character("BNGH7C75F").unwrap();
//! assert_eq!(check, 'N');
//!
//! // 类型化封装（构造即校验）
//! let usi = Usi::new("BNGH7C75F").unwrap();
//! println!("USI: {usi}"); // BNGH7C75FN
//! ```
//!
//! 所有操作都是纯函数：无共享可变状态、无 I/O，可在任意线程并发调用。

pub mod charset;
pub mod error;
pub mod luhn;
pub mod usi;

// Re-exports
pub use charset::CHARSET;
pub use error::{Error, Result};
pub use luhn::{alternate_factor, generate_check_character, verify_key, KEY_LEN, PREFIX_LEN};
pub use usi::Usi;
