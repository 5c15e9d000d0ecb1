use std::process::ExitCode;

use datamodel::Catalog;
use error::CatalogError;
use executor::{BOOK_QUERY, ExecutorConfig, build_schema, run};

#[cfg(test)]
mod client;
mod datamodel;
mod error;
mod executor;
mod logging;
mod output;


async fn answer_book_query() -> Result<String, CatalogError> {
    let catalog = Catalog::shipped();
    tracing::debug!(books = catalog.len(), "catalog loaded");

    let schema = build_schema(catalog, &ExecutorConfig::default())?;
    run(&schema, BOOK_QUERY).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init_tracing();

    match answer_book_query().await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
