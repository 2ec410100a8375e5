//! 表现层。
//!
//! 提供与传输无关的注册控制器：校验请求、委托外部协作者，
//! 并把所有结果映射为统一的响应形状。

pub mod controllers;
pub mod errors;
pub mod factories;
pub mod helpers;
pub mod protocols;
pub mod telemetry;

pub use controllers::{SignUpBody, SignUpController, SignUpField, REQUIRED_FIELDS};
pub use errors::{InvalidParamError, MissingParamError, ServerError};
pub use factories::make_signup_controller;
pub use helpers::{bad_request, ok, server_error};
pub use protocols::{Controller, HttpRequest, HttpResponse, ResponseBody};
