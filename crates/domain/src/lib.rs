//! 注册流程核心领域模型
//!
//! 包含账户实体，以及注册控制器依赖的两个外部协作者接口：
//! 邮箱格式校验与账户创建。

pub mod entities;
pub mod errors;
pub mod services;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use services::*;
