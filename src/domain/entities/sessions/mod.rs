//! Sessions Entity Module

pub mod session_document;

pub use session_document::*;
