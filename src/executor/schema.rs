use async_graphql::{Context, Object, Result};

use crate::datamodel::{Book, Catalog};

trait CatalogData {
    fn catalog(&self) -> Result<&Catalog>;
}

impl CatalogData for Context<'_> {
    fn catalog(&self) -> Result<&Catalog> {
        self.data::<Catalog>()
    }
}

pub struct RootQuery;

#[Object]
impl RootQuery {
    /// Get Book By ID
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let book = ctx.catalog()?.book(id).cloned();
        if book.is_none() {
            tracing::debug!(id, "no book with this id");
        }
        Ok(book)
    }

    /// Get Book List
    async fn list(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.catalog()?.books().to_vec())
    }
}
