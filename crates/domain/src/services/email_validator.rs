//! 邮箱格式校验能力

use async_trait::async_trait;

use crate::errors::EmailValidatorError;

/// 邮箱格式校验协作者
///
/// 只声明校验能力，不关心具体的格式算法。返回 `Ok(false)` 表示格式无效，
/// 返回 `Err` 表示校验过程本身意外失败。
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}
