use async_graphql::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The schema could not be built from the executor configuration.
    #[error("invalid executor configuration: {0}")]
    InvalidConfig(String),

    /// The query ran but the response carries errors.
    #[error("query execution failed: {}", join_messages(.0))]
    Execution(Vec<ServerError>),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn join_messages(errors: &[ServerError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
