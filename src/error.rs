//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid character '{0}' in input")]
    InvalidChar(char),

    #[error("USI must be exactly 10 characters, got {0}")]
    InvalidKeyLength(usize),

    #[error("Prefix must be exactly 9 characters, got {0}")]
    InvalidPrefixLength(usize),

    #[error("Check character mismatch: expected '{expected}', got '{got}'")]
    ChecksumMismatch { expected: char, got: char },
}

pub type Result<T> = std::result::Result<T, Error>;
