pub mod api_utils;
pub mod components;
pub mod http;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod resource_client;
