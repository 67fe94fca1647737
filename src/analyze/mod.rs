mod modules;
mod python;

pub use modules::{collect_modules, include_module};
pub use python::extract_classes;
