pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod json_store;
pub mod model;
pub mod services;

pub use error::CoolTextError;
pub use model::{FontFamily, Selection, Style};
pub use services::cool_text::{resolve_digit_base, resolve_letter_base, style_text, CodePoint};

pub const VERSION: &str = if cfg!(debug_assertions) {
    concat!("v", env!("CARGO_PKG_VERSION"), " (development)")
} else {
    concat!("v", env!("CARGO_PKG_VERSION"))
};
