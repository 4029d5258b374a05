pub mod aggregate;
pub mod catalog;
pub mod form;
pub mod validation;
