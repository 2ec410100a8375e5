//! 领域实体定义

pub mod account;

pub use account::{AccountRecord, AddAccountInput};
