use async_graphql::Response;

use crate::error::CatalogError;

/// Serializes a response as one line of JSON: `{"data": ..., "errors": [...]}`,
/// with `errors` left out when there are none.
pub fn render(response: &Response) -> Result<String, CatalogError> {
    Ok(serde_json::to_string(response)?)
}
