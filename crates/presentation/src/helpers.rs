//! 响应构造辅助函数

use crate::errors::ServerError;
use crate::protocols::{HttpResponse, ResponseBody};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// 客户端错误响应（400）
pub fn bad_request(error: impl Into<ResponseBody>) -> HttpResponse {
    HttpResponse::new(STATUS_BAD_REQUEST, error)
}

/// 服务端错误响应（500），响应体固定为 `ServerError`
pub fn server_error() -> HttpResponse {
    HttpResponse::new(STATUS_INTERNAL_SERVER_ERROR, ServerError::new())
}

/// 成功响应（200）
pub fn ok(body: impl Into<ResponseBody>) -> HttpResponse {
    HttpResponse::new(STATUS_OK, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{InvalidParamError, MissingParamError};
    use domain::{AccountRecord, AddAccountInput};

    #[test]
    fn test_bad_request_keeps_error() {
        let response = bad_request(InvalidParamError::new("email"));
        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            ResponseBody::InvalidParam(InvalidParamError::new("email"))
        );

        let response = bad_request(MissingParamError::new("name"));
        assert_eq!(
            response.body,
            ResponseBody::MissingParam(MissingParamError::new("name"))
        );
    }

    #[test]
    fn test_server_error_is_generic() {
        let response = server_error();
        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, ResponseBody::Server(ServerError));
    }

    #[test]
    fn test_ok_with_account_body() {
        let account = AccountRecord::from_input(
            "valid_id",
            AddAccountInput::new("any_name", "any_email@mail.com", "any_password"),
        );
        let response = ok(account.clone());
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, ResponseBody::Account(account));
    }
}
