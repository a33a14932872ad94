use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookId;
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) pages: i64,
    #[serde(default)]
    pub(crate) have_read: bool,
    #[serde(default)]
    pub(crate) cover: Option<String>,
    #[serde(default)]
    pub(crate) book_id: Option<BookId>,
}

impl AddBookCommandRequest {
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

    pub fn build_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.to_string(),
            author: self.author.to_string(),
            pages: self.pages,
            have_read: self.have_read,
            cover: self.cover.clone(),
            book_id: self.book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let draft = req.build_draft();
        self.catalog_service.add_book(&draft).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
