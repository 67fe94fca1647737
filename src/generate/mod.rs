mod directives;
mod splice;

pub use directives::render_directives;
pub use splice::{splice, END_MARKER, START_MARKER};
