use serde::Serialize;
use crate::books::domain::BookRecord;
use crate::books::domain::model::{Book, BookId};
use crate::core::domain::{Configuration, Identifiable};

// BookDto is a data transfer object for the catalog service and the cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookDto {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub have_read: bool,
    pub cover: String,
    pub description: String,
}

impl From<&Book> for BookDto {
    fn from(other: &Book) -> Self {
        Self {
            book_id: other.id(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            pages: other.pages,
            have_read: other.have_read,
            cover: other.cover.to_string(),
            description: other.description(),
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> BookId {
        self.book_id
    }
}

impl BookRecord for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn pages(&self) -> i64 {
        self.pages
    }

    fn cover(&self) -> &str {
        self.cover.as_str()
    }

    fn have_read(&self) -> bool {
        self.have_read
    }
}

// BookDraft carries the fields of a book that is about to be shelved
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub have_read: bool,
    pub cover: Option<String>,
    pub book_id: Option<BookId>,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, pages: i64, have_read: bool) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            pages,
            have_read,
            cover: None,
            book_id: None,
        }
    }

    pub fn with_cover(mut self, cover: &str) -> Self {
        self.cover = Some(cover.to_string());
        self
    }

    #[cfg(test)]
    pub(crate) fn with_book_id(mut self, book_id: BookId) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub(crate) fn build_book(&self, config: &Configuration, book_id: Option<BookId>) -> Book {
        Book::with_defaults(self.title.as_str(), self.author.as_str(), self.pages, self.have_read,
                            self.cover.as_deref(), book_id.or(self.book_id),
                            config.placeholder_cover.as_str(), config.max_book_id)
    }
}
