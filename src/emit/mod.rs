mod json;

pub use json::{JsonOutput, ModuleEntry, ProjectInfo};
