//! Create / edit form of any resource
//!
//! MVVM split:
//! - view_model.rs: draft state, load and save commands
//! - view.rs: Leptos component (pure UI), one editor per field kind

mod view;
mod view_model;

pub use view::ResourceForm;
pub use view_model::ResourceFormViewModel;
