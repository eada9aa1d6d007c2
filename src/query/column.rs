use serde::{Deserialize, Serialize};

/// A column requested for an item.
///
/// `Linked` describes a connect-boards column: its own value is fetched like
/// any other column, and the items it links to are expanded with
/// `linked_columns`, which may themselves be `Linked` to any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDef {
    Simple(String),
    Linked {
        id: String,
        #[serde(rename = "linkedColumns")]
        linked_columns: Vec<ColumnDef>,
    },
}

impl ColumnDef {
    pub fn simple(id: impl Into<String>) -> Self {
        ColumnDef::Simple(id.into())
    }

    pub fn linked<I, C>(id: impl Into<String>, linked_columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnDef>,
    {
        ColumnDef::Linked {
            id: id.into(),
            linked_columns: linked_columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ColumnDef::Simple(id) => id,
            ColumnDef::Linked { id, .. } => id,
        }
    }

    /// Sub-columns to expand on linked items; empty for simple columns.
    pub fn linked_columns(&self) -> &[ColumnDef] {
        match self {
            ColumnDef::Simple(_) => &[],
            ColumnDef::Linked { linked_columns, .. } => linked_columns,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, ColumnDef::Linked { .. })
    }
}

impl From<&str> for ColumnDef {
    fn from(id: &str) -> Self {
        ColumnDef::Simple(id.to_string())
    }
}

impl From<String> for ColumnDef {
    fn from(id: String) -> Self {
        ColumnDef::Simple(id)
    }
}
