use std::collections::HashMap;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::books::domain::model::{Book, BookId, generate_book_id};
use crate::books::dto::{BookDraft, BookDto};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::library::{lock, Library, SharedLibrary};
use crate::core::domain::{Configuration, IdPolicy, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    library: SharedLibrary,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, library: SharedLibrary,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            library,
            events_publisher,
        }
    }

    fn shelve(&self, library: &mut Library, draft: &BookDraft) -> LibraryResult<Book> {
        if self.config.id_policy == IdPolicy::AllowCollisions {
            let book = draft.build_book(&self.config, None);
            library.add(book.clone());
            return Ok(book);
        }
        if draft.book_id.is_some() {
            let book = draft.build_book(&self.config, None);
            library.try_add(book.clone())?;
            return Ok(book);
        }
        for _ in 0..self.config.id_attempts.max(1) {
            let id = generate_book_id(self.config.max_book_id);
            if library.contains(id) {
                debug!(book_id = id, "generated book id already shelved, retrying");
                continue;
            }
            let book = draft.build_book(&self.config, Some(id));
            library.add(book.clone());
            return Ok(book);
        }
        Err(LibraryError::duplicate_key(
            format!("could not generate a free book id after {} attempts", self.config.id_attempts).as_str()))
    }

    // The shelf change is kept when its event can't be built or published.
    async fn announce(&self, event: serde_json::Result<DomainEvent>) {
        let published = match event {
            Ok(event) => self.events_publisher.publish(&event).await,
            Err(err) => Err(LibraryError::from(err)),
        };
        if let Err(err) = published {
            warn!(error = %err, "could not publish book event");
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, draft: &BookDraft) -> LibraryResult<BookDto> {
        let book = {
            let mut library = lock(&self.library)?;
            self.shelve(&mut library, draft).map(|b| BookDto::from(&b))?
        };
        info!(book_id = book.book_id, title = book.title.as_str(), "added book");
        self.announce(DomainEvent::added(
            "books", "shelf", book.id().to_string().as_str(), &HashMap::new(), &book)).await;
        Ok(book)
    }

    async fn remove_book(&self, id: BookId) -> LibraryResult<BookDto> {
        let book = {
            let mut library = lock(&self.library)?;
            library.remove(id).map(|b| BookDto::from(&b))?
        };
        info!(book_id = id, "removed book");
        self.announce(DomainEvent::deleted(
            "books", "shelf", id.to_string().as_str(), &HashMap::new(), &book)).await;
        Ok(book)
    }

    async fn toggle_read(&self, id: BookId) -> LibraryResult<BookDto> {
        let book = {
            let mut library = lock(&self.library)?;
            library.toggle_read(id).map(BookDto::from)?
        };
        info!(book_id = id, have_read = book.have_read, "toggled read state");
        self.announce(DomainEvent::updated(
            "books", "shelf", id.to_string().as_str(), &HashMap::new(), &book)).await;
        Ok(book)
    }

    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        let library = lock(&self.library)?;
        library.get_book(id).map(BookDto::from).ok_or_else(|| LibraryError::book_not_found(id))
    }

    async fn find_book(&self, raw_id: &str) -> LibraryResult<BookDto> {
        let library = lock(&self.library)?;
        library.find(raw_id).map(BookDto::from).ok_or_else(|| LibraryError::book_not_found(raw_id))
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let library = lock(&self.library)?;
        Ok(library.books().iter().map(BookDto::from).collect())
    }
}
