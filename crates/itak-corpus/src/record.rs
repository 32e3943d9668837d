use itak_types::{Example, Source};
use serde::{Deserialize, Serialize};

/// One example sentence joined with its source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleRecord {
    /// Ainu sentence
    pub ain: String,
    /// Japanese translation
    pub jpn: String,
    pub sentence_dialect: Option<String>,
    pub title: Option<String>,
    pub book: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub url: Option<String>,
    pub doc_dialect: Option<String>,
}

impl ExampleRecord {
    /// Turn the row into an example cited from its document. A document
    /// with no metadata yields an unattributed example.
    pub fn to_example(&self) -> Example {
        let source = Source {
            author: self.author.clone(),
            title: self.title.clone(),
            book: self.book.clone(),
            year: self.year.clone(),
            url: self.url.clone(),
        };

        Example::new(self.ain.clone(), self.jpn.clone()).with_source(source)
    }
}

/// Response body of the example lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleResponse {
    pub examples: Vec<ExampleRecord>,
}
