use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, Response, Schema};

mod config;
mod schema;

pub use config::ExecutorConfig;
pub use schema::RootQuery;

use crate::datamodel::Catalog;
use crate::error::CatalogError;
use crate::output::render;

pub type CatalogSchema = Schema<RootQuery, EmptyMutation, EmptySubscription>;

/// The query this program answers.
pub const BOOK_QUERY: &str = r#"
    {
        book(id: 1) {
            title
            author {
                Name
                Books
            }
            pageCount
        }
    }
"#;

/// Builds the schema with `catalog` as the data every resolver reads from.
pub fn build_schema(
    catalog: Catalog,
    config: &ExecutorConfig,
) -> Result<CatalogSchema, CatalogError> {
    config.validate()?;

    let schema = Schema::build(RootQuery, EmptyMutation, EmptySubscription)
        .data(catalog)
        .extension(Tracing)
        .limit_depth(config.max_depth)
        .limit_complexity(config.max_complexity)
        .finish();

    Ok(schema)
}

/// Runs a single query. Parse, validation and resolver errors all end up in
/// the response's error list; nothing here fails.
pub async fn execute(schema: &CatalogSchema, query: &str) -> Response {
    let response = schema.execute(query).await;
    tracing::debug!(errors = response.errors.len(), "query executed");
    response
}

/// Runs `query` and renders the result, treating any error as fatal.
pub async fn run(schema: &CatalogSchema, query: &str) -> Result<String, CatalogError> {
    let response = execute(schema, query).await;
    if response.is_err() {
        return Err(CatalogError::Execution(response.errors));
    }
    render(&response)
}
