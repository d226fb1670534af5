use std::path::Path;

use ddlgen_core::append_block;

use crate::ExportError;

/// Append extension entries to a generated script file, in the given order.
///
/// Each entry is classified fresh at merge time: a token naming an existing
/// regular file contributes that file's contents, set off by a blank line;
/// anything else is appended as literal DDL text on a fresh, tab-indented
/// line. No reordering, no deduplication; the first failure aborts.
pub fn merge_extensions(target: &Path, entries: &[String]) -> Result<(), ExportError> {
    for entry in entries {
        let candidate = Path::new(entry);
        if candidate.is_file() {
            let content = std::fs::read_to_string(candidate)
                .map_err(|e| ExportError::io(candidate, e))?;
            append_block(target, &format!("\n\n{content}"))
                .map_err(|e| ExportError::io(target, e))?;
        } else {
            append_block(target, &format!("\n\t{entry}"))
                .map_err(|e| ExportError::io(target, e))?;
        }
    }
    Ok(())
}
