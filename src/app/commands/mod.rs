pub mod account;
pub mod probe;
pub mod validate;
