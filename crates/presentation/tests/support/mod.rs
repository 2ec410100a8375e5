#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    AccountRecord, AddAccount, AddAccountError, AddAccountInput, EmailValidator,
    EmailValidatorError, MockAddAccount, MockEmailValidator,
};
use presentation::{HttpRequest, SignUpBody, SignUpController};

pub const ANY_NAME: &str = "any_name";
pub const ANY_EMAIL: &str = "any_email@mail.com";
pub const ANY_PASSWORD: &str = "any_password";
pub const VALID_ID: &str = "valid_id";

/// 四个字段都合法的请求
pub fn valid_request() -> HttpRequest<SignUpBody> {
    HttpRequest::new(SignUpBody {
        name: Some(ANY_NAME.to_string()),
        email: Some(ANY_EMAIL.to_string()),
        password: Some(ANY_PASSWORD.to_string()),
        password_confirmation: Some(ANY_PASSWORD.to_string()),
    })
}

/// 在合法请求的基础上修改请求体
pub fn request_with(edit: impl FnOnce(&mut SignUpBody)) -> HttpRequest<SignUpBody> {
    let mut request = valid_request();
    edit(&mut request.body);
    request
}

pub fn fake_account() -> AccountRecord {
    AccountRecord::from_input(
        VALID_ID,
        AddAccountInput::new(ANY_NAME, ANY_EMAIL, ANY_PASSWORD),
    )
}

pub fn make_sut(
    email_validator: MockEmailValidator,
    add_account: MockAddAccount,
) -> SignUpController {
    SignUpController::new(Arc::new(email_validator), Arc::new(add_account))
}

/// 永远返回固定结果的邮箱校验桩
pub struct EmailValidatorStub(pub bool);

#[async_trait]
impl EmailValidator for EmailValidatorStub {
    async fn is_valid(&self, _email: &str) -> Result<bool, EmailValidatorError> {
        Ok(self.0)
    }
}

/// 返回 `fake_account()` 的账户创建桩
pub struct AddAccountStub;

#[async_trait]
impl AddAccount for AddAccountStub {
    async fn add(&self, _input: AddAccountInput) -> Result<AccountRecord, AddAccountError> {
        Ok(fake_account())
    }
}

pub struct PanickingEmailValidator;

#[async_trait]
impl EmailValidator for PanickingEmailValidator {
    async fn is_valid(&self, _email: &str) -> Result<bool, EmailValidatorError> {
        panic!("email validator exploded")
    }
}

pub struct PanickingAddAccount;

#[async_trait]
impl AddAccount for PanickingAddAccount {
    async fn add(&self, _input: AddAccountInput) -> Result<AccountRecord, AddAccountError> {
        panic!("add account exploded")
    }
}
