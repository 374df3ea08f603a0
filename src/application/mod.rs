pub mod translate;
pub mod validate;
