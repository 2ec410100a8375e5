//! 协作者接口定义
//!
//! 控制器只依赖这里声明的能力，具体实现由外部组合步骤提供。

pub mod add_account;
pub mod email_validator;

pub use add_account::AddAccount;
pub use email_validator::EmailValidator;

#[cfg(feature = "testing")]
pub use add_account::MockAddAccount;
#[cfg(feature = "testing")]
pub use email_validator::MockEmailValidator;
