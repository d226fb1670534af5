use ddlgen_core::ScriptKind;
use serde::Deserialize;

/// User-supplied extension scripts, one ordered list per script category.
///
/// Each entry is either literal DDL text or a path to a script file; the
/// distinction is made at merge time, not here. Missing lists default to
/// empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtendedScripts {
    #[serde(default)]
    pub create: Vec<String>,

    #[serde(default)]
    pub drop: Vec<String>,

    #[serde(default)]
    pub update: Vec<String>,
}

impl ExtendedScripts {
    /// The entry list for one script category.
    pub fn for_kind(&self, kind: ScriptKind) -> &[String] {
        match kind {
            ScriptKind::Create => &self.create,
            ScriptKind::Drop => &self.drop,
            ScriptKind::Update => &self.update,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.drop.is_empty() && self.update.is_empty()
    }
}
