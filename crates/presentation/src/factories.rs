//! 控制器组装
//!
//! 协作者的创建与生命周期由调用方负责，这里只负责把它们接到控制器上。

use std::sync::Arc;

use domain::{AddAccount, EmailValidator};

use crate::controllers::{SignUpBody, SignUpController};
use crate::protocols::Controller;

pub fn make_signup_controller(
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
) -> Arc<dyn Controller<SignUpBody>> {
    Arc::new(SignUpController::new(email_validator, add_account))
}
