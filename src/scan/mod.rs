mod filter;
mod walker;

pub use filter::should_include_file;
pub use walker::scan_directory;
