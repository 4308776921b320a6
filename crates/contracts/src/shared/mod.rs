pub mod api_error;
pub mod delete_guard;
pub mod form_draft;
pub mod format;
pub mod grouping;
pub mod i18n;
pub mod list_view;
pub mod response;
pub mod upload;
pub mod urls;
