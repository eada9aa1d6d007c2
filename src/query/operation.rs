use super::selection::{format_args_list, FieldSelection};

/// Builder for a single-root GraphQL operation with optional variables.
#[derive(Debug, Clone)]
struct Operation {
    root: String,
    variables: Vec<(String, String)>,
    args: Vec<(String, String)>,
    selection: FieldSelection,
}

impl Operation {
    fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            variables: Vec::new(),
            args: Vec::new(),
            selection: FieldSelection::new(),
        }
    }

    fn build(self, keyword: &str) -> String {
        let variables = if self.variables.is_empty() {
            String::new()
        } else {
            let defs = self
                .variables
                .iter()
                .map(|(name, ty)| format!("${}: {}", name, ty))
                .collect::<Vec<_>>()
                .join(", ");
            format!(" ({})", defs)
        };

        let args = if self.args.is_empty() {
            String::new()
        } else {
            let pairs: Vec<(&str, &str)> = self
                .args
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            format!("({})", format_args_list(&pairs))
        };

        format!(
            "{}{} {{ {}{} {{ {} }} }}",
            keyword, variables, self.root, args, self.selection
        )
    }
}

macro_rules! operation_builder {
    ($name:ident, $keyword:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: Operation,
        }

        impl $name {
            pub fn new(root: &str) -> Self {
                Self {
                    inner: Operation::new(root),
                }
            }

            /// Declare an operation variable, e.g. `variable("cursor", "String!")`
            pub fn variable(mut self, name: &str, type_name: &str) -> Self {
                self.inner
                    .variables
                    .push((name.to_string(), type_name.to_string()));
                self
            }

            pub fn arg(mut self, name: &str, value: &str) -> Self {
                self.inner.args.push((name.to_string(), value.to_string()));
                self
            }

            pub fn args(mut self, args: &[(&str, &str)]) -> Self {
                for (name, value) in args {
                    self.inner.args.push((name.to_string(), value.to_string()));
                }
                self
            }

            pub fn selection(mut self, selection: FieldSelection) -> Self {
                self.inner.selection = selection;
                self
            }

            pub fn build(self) -> String {
                self.inner.build($keyword)
            }
        }
    };
}

operation_builder!(QueryBuilder, "query");
operation_builder!(MutationBuilder, "mutation");
