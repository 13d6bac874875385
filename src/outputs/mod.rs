//! Output generation for the rendering surface.
//!
//! # Submodules
//!
//! - [`json`]: Writes the `PitchPage` snapshot for any view layer
//! - [`markdown`]: Renders the `PitchPage` as a readable Markdown document
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── pitch.json
//!
//! markdown_output_dir/
//! └── pitch.md
//! ```

pub mod json;
pub mod markdown;
