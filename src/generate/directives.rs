use crate::types::ModuleMap;

/// Render the generated region: one `automodule` block per module in map
/// order, each followed by an `autoclass` block per class in sorted order.
///
/// Every block is preceded by a blank line and ends with a newline, so the
/// result splices cleanly between the marker lines. An empty map renders
/// to an empty string.
pub fn render_directives(map: &ModuleMap) -> String {
    let mut output = String::new();

    for (module, classes) in map {
        output.push_str(&format!("\n.. automodule:: {}\n    :members:\n", module));

        for class in classes {
            output.push_str(&format!("\n.. autoclass:: {}\n    :members:\n", class));
        }
    }

    output
}
