//! 账户实体定义
//!
//! 账户的持久化归外部协作者所有，这里只描述进出边界的数据形状。

use serde::{Deserialize, Serialize};

/// 创建账户的输入
///
/// 由注册请求派生，不包含 `passwordConfirmation`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 已创建的账户记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// 由账户创建方分配的唯一ID
    pub id: String,
    pub name: String,
    pub email: String,
    /// 由账户创建方决定存储形式（通常为哈希值）
    pub password: String,
}

impl AccountRecord {
    /// 以给定ID和创建输入组装账户记录
    pub fn from_input(id: impl Into<String>, input: AddAccountInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            email: input.email,
            password: input.password,
        }
    }
}
