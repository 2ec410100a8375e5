//! 注册控制器
//!
//! 处理顺序固定：必填字段 -> 密码确认 -> 邮箱格式 -> 创建账户。
//! 任一校验失败立即返回 400；协作者的任何意外失败（包括 panic）统一返回 500，
//! 内部细节只写入日志，不会出现在响应中。

use std::any::Any;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use domain::{AddAccount, AddAccountError, AddAccountInput, EmailValidator, EmailValidatorError};
use futures::FutureExt;
use serde::Deserialize;
use thiserror::Error;

use crate::errors::{InvalidParamError, MissingParamError};
use crate::helpers::{bad_request, ok, server_error};
use crate::protocols::{Controller, HttpRequest, HttpResponse};

/// 注册请求中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl SignUpField {
    /// 对外暴露的字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            SignUpField::Name => "name",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl fmt::Display for SignUpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 必填字段及其检查顺序，第一个缺失的字段决定返回的错误
pub const REQUIRED_FIELDS: [SignUpField; 4] = [
    SignUpField::Name,
    SignUpField::Email,
    SignUpField::Password,
    SignUpField::PasswordConfirmation,
];

/// 注册请求体，所有字段均来自不可信输入
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_confirmation: Option<String>,
}

impl SignUpBody {
    pub fn field(&self, field: SignUpField) -> Option<&str> {
        match field {
            SignUpField::Name => self.name.as_deref(),
            SignUpField::Email => self.email.as_deref(),
            SignUpField::Password => self.password.as_deref(),
            SignUpField::PasswordConfirmation => self.password_confirmation.as_deref(),
        }
    }

    /// 按 `REQUIRED_FIELDS` 的顺序返回第一个缺失的字段
    ///
    /// 缺失指字段不存在或为空字符串；`"0"`、空白字符串视为已提供。
    pub fn first_missing_field(&self) -> Option<SignUpField> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|field| !is_present(self.field(*field)))
    }

    fn into_fields(self) -> Result<SignUpFields, SignUpField> {
        if let Some(field) = self.first_missing_field() {
            return Err(field);
        }

        Ok(SignUpFields {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            password_confirmation: self.password_confirmation.unwrap_or_default(),
        })
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// 通过必填检查后的字段
struct SignUpFields {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
}

/// 注册流程中的意外失败，只在控制器内部流转
#[derive(Debug, Error)]
pub enum SignUpFailure {
    #[error(transparent)]
    EmailValidator(#[from] EmailValidatorError),
    #[error(transparent)]
    AddAccount(#[from] AddAccountError),
    #[error("signup pipeline panicked: {0}")]
    Panicked(String),
}

impl SignUpFailure {
    fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        Self::Panicked(message)
    }
}

/// 注册控制器
///
/// 两个协作者在构造时注入，生命周期归组合方所有。控制器本身不持有可变状态，
/// 可被多个调用方并发使用。
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn run(&self, body: SignUpBody) -> Result<HttpResponse, SignUpFailure> {
        let fields = match body.into_fields() {
            Ok(fields) => fields,
            Err(field) => {
                tracing::debug!(%field, "signup rejected: missing param");
                return Ok(bad_request(MissingParamError::new(field.as_str())));
            }
        };

        if fields.password != fields.password_confirmation {
            let field = SignUpField::PasswordConfirmation;
            tracing::debug!(%field, "signup rejected: password confirmation mismatch");
            return Ok(bad_request(InvalidParamError::new(field.as_str())));
        }

        if !self.email_validator.is_valid(&fields.email).await? {
            let field = SignUpField::Email;
            tracing::debug!(%field, "signup rejected: invalid email");
            return Ok(bad_request(InvalidParamError::new(field.as_str())));
        }

        let account = self
            .add_account
            .add(AddAccountInput {
                name: fields.name,
                email: fields.email,
                password: fields.password,
            })
            .await?;

        tracing::info!(account_id = %account.id, "account created");
        Ok(ok(account))
    }
}

#[async_trait]
impl Controller<SignUpBody> for SignUpController {
    async fn handle(&self, request: HttpRequest<SignUpBody>) -> HttpResponse {
        let outcome = AssertUnwindSafe(self.run(request.body))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(SignUpFailure::from_panic(payload)));

        match outcome {
            Ok(response) => response,
            Err(failure) => {
                tracing::error!(error = %failure, "signup failed unexpectedly");
                server_error()
            }
        }
    }
}
