use std::fmt;

/// Ordered GraphQL selection set builder. Fields render in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSelection {
    fields: Vec<String>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a simple field
    pub fn field(mut self, name: &str) -> Self {
        self.fields.push(name.to_string());
        self
    }

    /// Add multiple simple fields
    pub fn fields(mut self, names: &[&str]) -> Self {
        for name in names {
            self.fields.push(name.to_string());
        }
        self
    }

    /// Add a nested field with its own selection
    pub fn nested(mut self, name: &str, selection: FieldSelection) -> Self {
        self.fields.push(format!("{} {{ {} }}", name, selection));
        self
    }

    /// Add a nested field with arguments
    pub fn nested_with_args(
        mut self,
        name: &str,
        args: &[(&str, &str)],
        selection: FieldSelection,
    ) -> Self {
        self.fields.push(format!(
            "{}({}) {{ {} }}",
            name,
            format_args_list(args),
            selection
        ));
        self
    }

    /// Add an inline fragment (`... on Type { ... }`)
    pub fn inline_fragment(mut self, type_name: &str, selection: FieldSelection) -> Self {
        self.fields
            .push(format!("... on {} {{ {} }}", type_name, selection));
        self
    }

    /// Append another selection's fields after this one's
    pub fn merge(mut self, other: FieldSelection) -> Self {
        self.fields.extend(other.fields);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}

pub(crate) fn format_args_list(args: &[(&str, &str)]) -> String {
    args.iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_insertion_order() {
        let selection = FieldSelection::new().fields(&["name", "id"]).field("text");
        assert_eq!(selection.to_string(), "name id text");
    }

    #[test]
    fn test_nested_and_fragment() {
        let selection = FieldSelection::new()
            .nested_with_args("items_page", &[("limit", "5")], FieldSelection::new().field("cursor"))
            .inline_fragment("BoardRelationValue", FieldSelection::new().field("linked_item_ids"));

        assert_eq!(
            selection.to_string(),
            "items_page(limit: 5) { cursor } ... on BoardRelationValue { linked_item_ids }"
        );
    }
}
