use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One entry of a GraphQL `errors` array. Everything besides `message`
/// (`locations`, `path`, `extensions`, ...) is kept as opaque JSON.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Map::new(),
        }
    }
}

/// Response body as returned by the transport, before classification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
    #[serde(default, deserialize_with = "deserialize_account_id")]
    pub account_id: Option<String>,
}

impl RawResponse {
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn with_errors(errors: Vec<GraphQLError>, account_id: Option<String>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
            account_id,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Splits the response into its data or error branch. An empty error
    /// list counts as no errors.
    pub fn into_outcome(self) -> ApiOutcome {
        match self.errors {
            Some(errors) if !errors.is_empty() => ApiOutcome::Errors {
                errors,
                account_id: self.account_id,
            },
            _ => ApiOutcome::Data(self.data.unwrap_or(Value::Null)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Data(Value),
    Errors {
        errors: Vec<GraphQLError>,
        account_id: Option<String>,
    },
}

// monday.com sends the account id as a number; accept strings too.
fn deserialize_account_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
