pub mod cli;
pub mod config;
pub mod convert;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use convert::{convert, format, label, ConversionRequest, ConvertError, Unit};
