//! Typed queries against `schemas/library.graphql`, run in-process.

use async_graphql::{Request, Variables};
use cynic::serde;

use crate::executor::CatalogSchema;

pub struct Client {
    schema: CatalogSchema,
}

impl Client {
    pub fn new(schema: CatalogSchema) -> Self {
        Self { schema }
    }

    pub async fn query<Query, Input>(
        &self,
        op: cynic::Operation<Query, Input>,
    ) -> cynic::GraphQlResponse<Query>
    where
        Input: serde::Serialize,
        Query: serde::de::DeserializeOwned + 'static,
    {
        let variables = serde_json::to_value(&op.variables).unwrap();
        let mut request = Request::new(op.query).variables(Variables::from_json(variables));
        if let Some(name) = op.operation_name {
            request = request.operation_name(name);
        }

        let response = self.schema.execute(request).await;
        serde_json::from_value(serde_json::to_value(&response).unwrap()).unwrap()
    }
}

#[cynic::schema("library")]
mod schema {}

#[derive(cynic::QueryVariables, Debug)]
pub struct BookByIdVariables {
    pub id: Option<i32>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "RootQuery", variables = "BookByIdVariables")]
pub struct BookSummaryById {
    #[arguments(id: $id)]
    pub book: Option<BookSummary>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "RootQuery", variables = "BookByIdVariables")]
pub struct BookDetailsById {
    #[arguments(id: $id)]
    pub book: Option<BookDetails>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "RootQuery")]
pub struct BookList {
    pub list: Vec<BookListing>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Book")]
pub struct BookSummary {
    pub title: String,
    pub author: Author,
    pub page_count: i32,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Book")]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub comments: Vec<Comment>,
    pub page_count: i32,
    pub year: i32,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
#[cynic(graphql_type = "Book")]
pub struct BookListing {
    pub id: i32,
    pub title: String,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Author {
    #[cynic(rename = "Name")]
    pub name: String,
    #[cynic(rename = "Books")]
    pub books: Vec<i32>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Comment {
    pub body: String,
}
