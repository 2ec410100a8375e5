//! 控制器协议
//!
//! 与传输层无关的请求/响应形状，以及所有控制器共用的 `Controller` 接口。

use async_trait::async_trait;
use domain::AccountRecord;
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidParamError, MissingParamError, ServerError};

/// 控制器接收的请求
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HttpRequest<B> {
    #[serde(default)]
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// 控制器产生的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn new(status_code: u16, body: impl Into<ResponseBody>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// 响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    MissingParam(MissingParamError),
    InvalidParam(InvalidParamError),
    Server(ServerError),
    Account(AccountRecord),
}

impl From<MissingParamError> for ResponseBody {
    fn from(value: MissingParamError) -> Self {
        Self::MissingParam(value)
    }
}

impl From<InvalidParamError> for ResponseBody {
    fn from(value: InvalidParamError) -> Self {
        Self::InvalidParam(value)
    }
}

impl From<ServerError> for ResponseBody {
    fn from(value: ServerError) -> Self {
        Self::Server(value)
    }
}

impl From<AccountRecord> for ResponseBody {
    fn from(value: AccountRecord) -> Self {
        Self::Account(value)
    }
}

/// 控制器接口
///
/// `handle` 不返回错误：所有失败都必须在控制器内部转换为响应。
#[async_trait]
pub trait Controller<B: Send + 'static>: Send + Sync {
    async fn handle(&self, request: HttpRequest<B>) -> HttpResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_serializes_camel_case() {
        let response = HttpResponse::new(400, MissingParamError::new("name"));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 400,
                "body": { "name": "MissingParamError", "message": "Missing param: name" }
            })
        );
    }

    #[test]
    fn test_account_body_serializes_flat() {
        let account = AccountRecord {
            id: "valid_id".to_string(),
            name: "any_name".to_string(),
            email: "any_email@mail.com".to_string(),
            password: "hashed_password".to_string(),
        };
        let response = HttpResponse::new(200, account);
        assert!(response.is_success());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "body": {
                    "id": "valid_id",
                    "name": "any_name",
                    "email": "any_email@mail.com",
                    "password": "hashed_password"
                }
            })
        );
    }
}
