//! 协作者错误定义
//!
//! 协作者的意外失败通过显式的错误返回值表达，由控制器统一映射为服务端错误。

use thiserror::Error;

/// 邮箱校验协作者错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailValidatorError {
    /// 校验服务不可用
    #[error("email validator unavailable: {message}")]
    Unavailable { message: String },

    /// 校验过程内部错误
    #[error("email validator failed: {message}")]
    Internal { message: String },
}

impl EmailValidatorError {
    /// 创建不可用错误
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// 账户创建协作者错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddAccountError {
    /// 存储层错误
    #[error("account storage error: {message}")]
    Storage { message: String },

    /// 密码加密错误
    #[error("password encryption error: {message}")]
    Encryption { message: String },

    /// 其他内部错误
    #[error("add account failed: {message}")]
    Internal { message: String },
}

impl AddAccountError {
    /// 创建存储层错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// 创建加密错误
    pub fn encryption(message: impl Into<String>) -> Self {
        Self::Encryption {
            message: message.into(),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
