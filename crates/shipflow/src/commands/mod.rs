pub mod build;
pub mod publish;
pub mod recipe;
pub mod release;
pub mod status;
pub mod validate;
