use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
}

/// Authors are embedded by value: every book carries its own copy.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    #[graphql(name = "Name")]
    pub name: String,
    /// Ids of the books this author is associated with. Not checked against the catalog.
    #[graphql(name = "Books")]
    pub books: Vec<i32>,
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub comments: Vec<Comment>,
    pub page_count: i32,
    pub year: i32,
}

/// The in-memory book store. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// The two books every run starts with.
    pub fn shipped() -> Self {
        let author = Author {
            name: "Ahmet Ümit".into(),
            books: vec![1],
        };

        Self::new(vec![
            Book {
                id: 1,
                title: "Sis ve Gece".into(),
                author: author.clone(),
                comments: vec![comment("Güzel bir kitap"), comment("sevdim")],
                page_count: 200,
                year: 2012,
            },
            Book {
                id: 2,
                title: "Aşk Masalı".into(),
                author,
                comments: vec![comment("Ortalama")],
                page_count: 289,
                year: 2022,
            },
        ])
    }

    /// First book with the given id, if any.
    pub fn book(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

fn comment(body: &str) -> Comment {
    Comment { body: body.into() }
}
