pub mod details;
pub mod form;
pub mod grouped;
pub mod list;
