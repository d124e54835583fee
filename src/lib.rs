pub mod classifier;
pub mod converter;
pub mod error;
pub mod inline;
pub mod io;
pub mod options;
pub mod renderer;
pub mod report;

pub use converter::{convert, convert_lines, convert_str, Conversion};
pub use error::{Error, Result};
pub use options::RenderOptions;
