//! 响应错误值对象
//!
//! 这些类型只作为响应体返回给调用方，从不跨越控制器边界抛出。
//! 序列化形状为 `{ "name": <类型名>, "message": <消息> }`。

use serde::{Serialize, Serializer};
use thiserror::Error;

/// 缺少必填参数
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Missing param: {param}")]
pub struct MissingParamError {
    param: String,
}

impl MissingParamError {
    pub const NAME: &'static str = "MissingParamError";

    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }
}

/// 参数值无效
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid param: {param}")]
pub struct InvalidParamError {
    param: String,
}

impl InvalidParamError {
    pub const NAME: &'static str = "InvalidParamError";

    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }
}

/// 通用服务端错误
///
/// 消息固定，不携带任何内部失败细节。
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("Internal server error")]
pub struct ServerError;

impl ServerError {
    pub const NAME: &'static str = "ServerError";

    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    name: &'a str,
    message: String,
}

fn serialize_error<S: Serializer>(
    name: &str,
    error: &dyn std::error::Error,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    ErrorPayload {
        name,
        message: error.to_string(),
    }
    .serialize(serializer)
}

impl Serialize for MissingParamError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_error(Self::NAME, self, serializer)
    }
}

impl Serialize for InvalidParamError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_error(Self::NAME, self, serializer)
    }
}

impl Serialize for ServerError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_error(Self::NAME, self, serializer)
    }
}
