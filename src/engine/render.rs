//! Rendering of full config files and individual `with`-array entries.

use crate::constants::{FACTORY_NAME, NPM_PACKAGE};
use crate::registry::TargetLookup;

const ARRAY_INDENT: &str = "    ";
const ENTRY_INDENT: &str = "      ";

/// One entry line: `"<name>", // default files: <literal>`. Unknown names
/// fall back to the empty literal `[]`; callers validate against the
/// registry before reaching this point.
pub(crate) fn entry_line(name: &str, indent: &str, registry: &dyn TargetLookup) -> String {
    let files = registry
        .entry(name)
        .map(|e| e.default_files)
        .unwrap_or("[]");
    format!("{indent}\"{name}\", // default files: {files}")
}

/// Render a complete config file activating `targets`, in order.
pub fn render_config(targets: &[String], registry: &dyn TargetLookup) -> String {
    let mut lines = String::new();
    for name in targets {
        lines.push_str(&entry_line(name, ENTRY_INDENT, registry));
        lines.push('\n');
    }

    format!(
        "import {factory} from \"{package}\"\n\
         \n\
         export default [\n\
         \x20 ...{factory}({{\n\
         {array_indent}with: [\n\
         {lines}\
         {array_indent}]\n\
         \x20 }})\n\
         ]\n",
        factory = FACTORY_NAME,
        package = NPM_PACKAGE,
        array_indent = ARRAY_INDENT,
        lines = lines,
    )
}
