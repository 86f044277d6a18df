pub mod login;
pub mod validate;
