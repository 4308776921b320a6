pub mod delete_confirm;
pub mod field_value;
pub mod file_input;
pub mod html_editor;
pub mod localized_input;
pub mod page_header;
pub mod parent_select;
pub mod ui;
