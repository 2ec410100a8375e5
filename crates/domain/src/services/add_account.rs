//! 账户创建能力

use async_trait::async_trait;

use crate::entities::{AccountRecord, AddAccountInput};
use crate::errors::AddAccountError;

/// 账户创建协作者
///
/// 账户的持久化、密码加密均由实现方负责。
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// 创建账户并返回创建后的记录
    async fn add(&self, input: AddAccountInput) -> Result<AccountRecord, AddAccountError>;
}
