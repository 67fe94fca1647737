use serde::Serialize;

use crate::types::ModuleMap;

#[derive(Serialize)]
pub struct JsonOutput {
    pub version: String,
    pub project: ProjectInfo,
    pub modules: Vec<ModuleEntry>,
}

#[derive(Serialize)]
pub struct ProjectInfo {
    pub path: String,
    pub modules_count: usize,
    pub classes_count: usize,
}

#[derive(Serialize)]
pub struct ModuleEntry {
    pub name: String,
    pub classes: Vec<String>,
}

impl JsonOutput {
    pub fn from_module_map(project_path: &str, map: &ModuleMap) -> Self {
        let modules: Vec<ModuleEntry> = map
            .iter()
            .map(|(name, classes)| ModuleEntry {
                name: name.clone(),
                classes: classes.iter().cloned().collect(),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            project: ProjectInfo {
                path: project_path.to_string(),
                modules_count: map.len(),
                classes_count: map.values().map(|c| c.len()).sum(),
            },
            modules,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_counts_and_order() {
        let mut map = ModuleMap::new();
        map.insert(
            "pkg.models".to_string(),
            BTreeSet::from(["User".to_string(), "Group".to_string()]),
        );
        map.insert("pkg".to_string(), BTreeSet::new());

        let output = JsonOutput::from_module_map("/tmp/project", &map);

        assert_eq!(output.project.modules_count, 2);
        assert_eq!(output.project.classes_count, 2);
        assert_eq!(output.modules[0].name, "pkg");
        assert_eq!(output.modules[1].classes, vec!["Group", "User"]);

        let json = output.to_json();
        assert!(json.contains("\"pkg.models\""));
    }
}
