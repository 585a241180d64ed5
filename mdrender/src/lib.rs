//! Library side of the `mdrender` binary: the command line definition, the
//! template compositor and the rendering pipeline that ties the workspace
//! crates together.
pub mod cli;
pub mod page;
pub mod render;

pub use page::{PageFragments, Placeholder, compose};
pub use render::{PageRenderer, render_page};
