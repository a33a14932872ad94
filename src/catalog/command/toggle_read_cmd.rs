use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ToggleReadCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ToggleReadCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleReadCommandRequest {
    pub(crate) book_id: String,
}

impl ToggleReadCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ToggleReadCommandResponse {
    pub book: BookDto,
}

impl ToggleReadCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ToggleReadCommandRequest, ToggleReadCommandResponse> for ToggleReadCommand {
    async fn execute(&self, req: ToggleReadCommandRequest) -> Result<ToggleReadCommandResponse, CommandError> {
        let book = self.catalog_service.find_book(req.book_id.as_str()).await?;
        self.catalog_service.toggle_read(book.book_id).await
            .map_err(CommandError::from).map(ToggleReadCommandResponse::new)
    }
}
