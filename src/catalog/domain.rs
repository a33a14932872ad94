pub mod library;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookId;
use crate::books::dto::{BookDraft, BookDto};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: BookId) -> LibraryResult<BookDto>;
    async fn toggle_read(&self, id: BookId) -> LibraryResult<BookDto>;
    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    // looks a book up by the id as it appears in markup or urls
    async fn find_book(&self, raw_id: &str) -> LibraryResult<BookDto>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
}
