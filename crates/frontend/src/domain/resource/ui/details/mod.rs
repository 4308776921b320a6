//! Read-only screen of one record.
//!
//! - view.rs: header with Back / actions menu, then every field with its label

mod view;

pub use view::ResourceView;
