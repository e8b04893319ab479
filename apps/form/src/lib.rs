pub mod form;
pub mod key;
