use tracing::{debug, info, warn};
use crate::books::domain::model::BookId;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gui::card::{Card, CardFields};
use crate::gui::display::DisplayArea;
use crate::gui::event::{ClickEvent, Control, Rendered, UiEvent};
use crate::gui::form::BookForm;

/// LibraryGui renders the shelf as cards into a display area and routes user
/// events back into the catalog.
///
/// The gui keeps no state of record: every card is derived from the catalog, and the
/// display area is rebuilt after adding or removing a book. A read toggle only patches
/// the affected card.
pub struct LibraryGui<D: DisplayArea> {
    catalog: Box<dyn CatalogService>,
    display: D,
}

impl<D: DisplayArea> LibraryGui<D> {
    pub async fn bind(catalog: Box<dyn CatalogService>, display: D) -> LibraryResult<Self> {
        let mut gui = Self {
            catalog,
            display,
        };
        gui.display_books().await?;
        Ok(gui)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub async fn display_books(&mut self) -> LibraryResult<()> {
        let books = self.catalog.list_books().await?;
        self.render_cards(&books);
        Ok(())
    }

    fn render_cards(&mut self, books: &[BookDto]) {
        self.display.clear();
        for book in books {
            self.display.append(Card::new(book));
        }
        let wired = self.set_event_listeners();
        debug!(cards = books.len(), wired, "rendered display area");
    }

    /// Brings the display area in line with the catalog after changes made outside
    /// the gui. Cards are rebuilt only when the shelf order no longer matches them;
    /// otherwise stale cards are patched in place and keep their listeners.
    pub async fn refresh(&mut self) -> LibraryResult<Rendered> {
        let books = self.catalog.list_books().await?;
        let cards = self.display.cards();
        let same_shelf = books.len() == cards.len()
            && books.iter().zip(cards).all(|(book, card)| book.book_id == card.id());
        if !same_shelf {
            self.render_cards(&books);
            return Ok(Rendered::Full);
        }
        let mut patched = vec![];
        for (book, card) in books.iter().zip(self.display.cards_mut()) {
            if card.fields != CardFields::from_book(book) {
                card.patch(book);
                patched.push(book.book_id);
            }
        }
        if patched.is_empty() {
            return Ok(Rendered::Unchanged);
        }
        debug!(cards = patched.len(), "patched stale cards");
        Ok(Rendered::Patched(patched))
    }

    pub async fn update_book(&mut self, id: BookId) -> LibraryResult<()> {
        let book = self.catalog.find_book_by_id(id).await?;
        let card = self.display.card_mut(id).ok_or_else(|| LibraryError::not_found(
            format!("no card on display for book {}", id).as_str()))?;
        card.patch(&book);
        Ok(())
    }

    // Wires every card control that is not wired yet and returns how many were.
    pub fn set_event_listeners(&mut self) -> usize {
        let mut wired = 0;
        for card in self.display.cards_mut() {
            for control in Control::ALL {
                if card.attach(control) {
                    wired += 1;
                }
            }
        }
        wired
    }

    pub async fn toggle_read(&mut self, event: &ClickEvent) -> LibraryResult<BookDto> {
        let id = self.resolve_card_id(event).await?;
        let book = self.catalog.toggle_read(id).await?;
        self.update_book(id).await?;
        Ok(book)
    }

    pub async fn remove_book(&mut self, event: &ClickEvent) -> LibraryResult<BookDto> {
        let id = self.resolve_card_id(event).await?;
        let book = self.catalog.remove_book(id).await?;
        self.display_books().await?;
        Ok(book)
    }

    /// Handles the add-book dialog closing. Returns `None` when it was cancelled.
    pub async fn close_form(&mut self, form: &BookForm) -> LibraryResult<Option<BookDto>> {
        if !form.is_submitted() {
            debug!("add-book dialog cancelled");
            return Ok(None);
        }
        let draft = form.to_draft()?;
        let book = self.catalog.add_book(&draft).await?;
        self.display_books().await?;
        Ok(Some(book))
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> LibraryResult<Rendered> {
        match event {
            UiEvent::Click(click) => {
                let id = self.resolve_card_id(&click).await?;
                let wired = self.display.card(id)
                    .map(|card| card.listens_to(click.control))
                    .ok_or_else(|| LibraryError::not_found(
                        format!("no card on display for book {}", id).as_str()))?;
                if !wired {
                    warn!(book_id = id, control = ?click.control, "click on unwired control ignored");
                    return Ok(Rendered::Unchanged);
                }
                match click.control {
                    Control::ToggleRead => {
                        let book = self.toggle_read(&click).await?;
                        info!(book_id = id, description = book.description.as_str(), "toggled from card");
                        Ok(Rendered::Patched(vec![id]))
                    }
                    Control::Remove => {
                        let _ = self.remove_book(&click).await?;
                        Ok(Rendered::Full)
                    }
                }
            }
            UiEvent::FormClosed(form) => {
                match self.close_form(&form).await? {
                    Some(_) => Ok(Rendered::Full),
                    None => Ok(Rendered::Unchanged),
                }
            }
        }
    }

    // card ids come back from markup as text
    async fn resolve_card_id(&self, event: &ClickEvent) -> LibraryResult<BookId> {
        self.catalog.find_book(event.card_id.as_str()).await.map(|book| book.book_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::catalog::domain::library::{Library, SharedLibrary};
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::GatewayPublisherVia;
    use crate::gui::display::{DisplayArea, HtmlDisplayArea};
    use crate::gui::event::{ClickEvent, Control, Rendered, UiEvent};
    use crate::gui::form::BookForm;
    use crate::gui::view::LibraryGui;

    async fn build_gui(books: Vec<Book>) -> (SharedLibrary, LibraryGui<HtmlDisplayArea>) {
        let library = Library::new(books).shared();
        let config = Configuration::new("test").with_events(GatewayPublisherVia::Discard);
        let catalog = factory::create_catalog_service(&config, library.clone()).await;
        let gui = LibraryGui::bind(catalog, HtmlDisplayArea::new("books")).await.expect("should bind gui");
        (library, gui)
    }

    fn shelf() -> Vec<Book> {
        vec![
            Book::new("Dune", "Herbert", 412, false, None, Some(1)),
            Book::new("Emma", "Austen", 474, true, None, Some(2)),
            Book::new("Ulysses", "Joyce", 730, false, None, Some(3)),
        ]
    }

    #[tokio::test]
    async fn test_should_render_on_bind() {
        let (_, gui) = build_gui(shelf()).await;
        let ids: Vec<u64> = gui.display().cards().iter().map(|c| c.id()).collect();
        assert_eq!(vec![1, 2, 3], ids);
        assert_eq!(1, gui.display().generation());
        assert!(gui.display().cards().iter().all(|c| c.listens_to(Control::ToggleRead) && c.listens_to(Control::Remove)));
    }

    #[tokio::test]
    async fn test_should_patch_card_on_toggle() {
        let (library, mut gui) = build_gui(shelf()).await;
        let rendered = gui.dispatch(UiEvent::Click(ClickEvent::new("1", Control::ToggleRead))).await.expect("should toggle");
        assert_eq!(Rendered::Patched(vec![1]), rendered);
        assert_eq!(1, gui.display().generation());
        assert_eq!("read", gui.display().card(1).expect("should find card").fields.read_state.as_str());
        assert!(library.lock().expect("lock").get_book(1).expect("should find book").have_read);
        assert!(gui.display().card(1).expect("should find card").listens_to(Control::ToggleRead));

        let _ = gui.dispatch(UiEvent::Click(ClickEvent::new("1", Control::ToggleRead))).await.expect("should toggle");
        assert_eq!("unread", gui.display().card(1).expect("should find card").fields.read_state.as_str());
    }

    #[tokio::test]
    async fn test_should_rerender_on_remove() {
        let (library, mut gui) = build_gui(shelf()).await;
        let rendered = gui.dispatch(UiEvent::Click(ClickEvent::new("2", Control::Remove))).await.expect("should remove");
        assert_eq!(Rendered::Full, rendered);
        assert_eq!(2, gui.display().generation());
        let ids: Vec<u64> = gui.display().cards().iter().map(|c| c.id()).collect();
        assert_eq!(vec![1, 3], ids);
        assert_eq!(2, library.lock().expect("lock").len());
    }

    #[tokio::test]
    async fn test_should_add_book_from_submitted_form() {
        let (library, mut gui) = build_gui(vec![]).await;
        let form = BookForm::submitted("Dune", "Herbert", "412", false);
        let rendered = gui.dispatch(UiEvent::FormClosed(form)).await.expect("should add book");
        assert_eq!(Rendered::Full, rendered);
        assert_eq!(1, library.lock().expect("lock").len());
        let card = &gui.display().cards()[0];
        assert_eq!("Dune", card.fields.title.as_str());
        assert!(card.listens_to(Control::Remove));
    }

    #[tokio::test]
    async fn test_should_ignore_cancelled_form() {
        let (library, mut gui) = build_gui(vec![]).await;
        let mut form = BookForm::submitted("Dune", "Herbert", "412", false);
        form.intent = crate::gui::form::FormIntent::Cancel;
        let rendered = gui.dispatch(UiEvent::FormClosed(form)).await.expect("should cancel");
        assert_eq!(Rendered::Unchanged, rendered);
        assert!(library.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_form() {
        let (library, mut gui) = build_gui(vec![]).await;
        let res = gui.dispatch(UiEvent::FormClosed(BookForm::submitted("Dune", "Herbert", "lots", false))).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(library.lock().expect("lock").is_empty());
        assert!(gui.display().cards().is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_on_unknown_card() {
        let (_, mut gui) = build_gui(shelf()).await;
        let res = gui.dispatch(UiEvent::Click(ClickEvent::new("99", Control::Remove))).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        let res = gui.dispatch(UiEvent::Click(ClickEvent::new("abc", Control::ToggleRead))).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(3, gui.display().cards().len());
    }

    #[tokio::test]
    async fn test_should_fail_update_of_removed_book() {
        let (library, mut gui) = build_gui(shelf()).await;
        let _ = library.lock().expect("lock").remove(3).expect("should remove book");
        let res = gui.update_book(3).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_not_rewire_listeners() {
        let (_, mut gui) = build_gui(shelf()).await;
        assert_eq!(0, gui.set_event_listeners());
    }

    #[tokio::test]
    async fn test_should_track_a_book_end_to_end() {
        let (library, mut gui) = build_gui(vec![]).await;
        let book = gui.close_form(&BookForm::submitted("Dune", "Herbert", "412", false)).await
            .expect("should add book").expect("should be submitted");
        assert_eq!("Dune by Herbert, 412 pages, unread", book.description.as_str());

        let id = book.book_id.to_string();
        let toggled = gui.toggle_read(&ClickEvent::new(id.as_str(), Control::ToggleRead)).await.expect("should toggle");
        assert_eq!("Dune by Herbert, 412 pages, read", toggled.description.as_str());

        let _ = gui.remove_book(&ClickEvent::new(id.as_str(), Control::Remove)).await.expect("should remove");
        assert!(library.lock().expect("lock").is_empty());
        assert!(gui.display().cards().is_empty());
    }

    #[tokio::test]
    async fn test_should_patch_cards_changed_elsewhere() {
        let (library, mut gui) = build_gui(shelf()).await;
        assert_eq!(Rendered::Unchanged, gui.refresh().await.expect("should refresh"));

        let _ = library.lock().expect("lock").toggle_read(2).expect("should toggle book");
        let rendered = gui.refresh().await.expect("should refresh");
        assert_eq!(Rendered::Patched(vec![2]), rendered);
        assert_eq!(1, gui.display().generation());
        let card = gui.display().card(2).expect("should find card");
        assert_eq!("unread", card.fields.read_state.as_str());
        assert!(card.listens_to(Control::Remove));
    }

    #[tokio::test]
    async fn test_should_rebuild_when_shelf_changed_elsewhere() {
        let (library, mut gui) = build_gui(shelf()).await;
        library.lock().expect("lock").add(Book::new("Beloved", "Morrison", 324, false, None, Some(4)));
        assert_eq!(Rendered::Full, gui.refresh().await.expect("should refresh"));
        assert_eq!(2, gui.display().generation());
        let ids: Vec<u64> = gui.display().cards().iter().map(|c| c.id()).collect();
        assert_eq!(vec![1, 2, 3, 4], ids);
        assert_eq!(0, gui.set_event_listeners());
    }
}
