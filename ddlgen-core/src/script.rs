use std::fmt;

/// The three categories of script a schema export produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    /// Schema creation statements.
    Create,
    /// Schema removal statements.
    Drop,
    /// Incremental schema change statements.
    Update,
}

impl ScriptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptKind::Create => "create",
            ScriptKind::Drop => "drop",
            ScriptKind::Update => "update",
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
