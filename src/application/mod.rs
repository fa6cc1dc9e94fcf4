pub mod error;
pub mod ports;
pub mod share_form;
pub mod tag_catalog;
