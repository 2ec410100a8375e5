pub mod signup;

pub use signup::{SignUpBody, SignUpController, SignUpFailure, SignUpField, REQUIRED_FIELDS};
