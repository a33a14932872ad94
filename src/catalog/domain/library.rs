use std::sync::{Arc, Mutex, MutexGuard};
use crate::books::domain::model::{Book, BookId, parse_book_id};
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// Library is the ordered collection of books on the shelf; insertion order is the
// display order. Lookups by id reach the first match only, so books sharing an id
// shadow each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Library {
    books: Vec<Book>,
}

pub type SharedLibrary = Arc<Mutex<Library>>;

impl Library {
    pub fn new<I: IntoIterator<Item=Book>>(books: I) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    pub fn shared(self) -> SharedLibrary {
        Arc::new(Mutex::new(self))
    }

    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Appends `book` unless a book with the same id is already shelved.
    pub fn try_add(&mut self, book: Book) -> LibraryResult<()> {
        if self.contains(book.id()) {
            return Err(LibraryError::duplicate_key(
                format!("book with id {} already exists", book.id()).as_str()));
        }
        self.add(book);
        Ok(())
    }

    pub fn get_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn get_book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id() == id)
    }

    /// Same as [`Library::get_book`] for ids that arrive as text; text that is not
    /// an id matches nothing.
    pub fn find(&self, raw_id: &str) -> Option<&Book> {
        parse_book_id(raw_id).and_then(|id| self.get_book(id))
    }

    /// Removes the first book carrying `id` and returns it. The rest keep their order.
    pub fn remove(&mut self, id: BookId) -> LibraryResult<Book> {
        let index = self.books.iter().position(|book| book.id() == id)
            .ok_or_else(|| LibraryError::book_not_found(id))?;
        Ok(self.books.remove(index))
    }

    pub fn toggle_read(&mut self, id: BookId) -> LibraryResult<&Book> {
        let book = self.get_book_mut(id).ok_or_else(|| LibraryError::book_not_found(id))?;
        book.toggle_read();
        Ok(book)
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.get_book(id).is_some()
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

pub(crate) fn lock(library: &SharedLibrary) -> LibraryResult<MutexGuard<'_, Library>> {
    library.lock().map_err(|err| LibraryError::runtime(
        format!("library lock poisoned {}", err).as_str(), None))
}

#[cfg(test)]
mod tests {
    use crate::books::domain::BookRecord;
    use crate::books::domain::model::Book;
    use crate::catalog::domain::library::Library;
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;

    fn book(title: &str, id: u64) -> Book {
        Book::new(title, "author", 100, false, None, Some(id))
    }

    fn titles(library: &Library) -> Vec<&str> {
        library.books().iter().map(|b| b.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_should_build_with_initial_books() {
        let library = Library::new(vec![book("a", 1), book("b", 2)]);
        assert_eq!(vec!["a", "b"], titles(&library));
        assert!(Library::default().is_empty());
    }

    #[tokio::test]
    async fn test_should_append_in_call_order() {
        let mut library = Library::default();
        for (i, title) in ["c", "a", "b", "a"].iter().enumerate() {
            library.add(book(title, i as u64));
        }
        assert_eq!(vec!["c", "a", "b", "a"], titles(&library));
        assert_eq!(4, library.len());
    }

    #[tokio::test]
    async fn test_should_get_first_match_on_collision() {
        let mut library = Library::default();
        library.add(book("first", 5));
        library.add(book("second", 5));
        assert_eq!("first", library.get_book(5).expect("should find book").title.as_str());
        assert!(library.get_book(6).is_none());
    }

    #[tokio::test]
    async fn test_should_find_by_text_id() {
        let library = Library::new(vec![book("a", 12)]);
        assert_eq!(12, library.find("12").expect("should find book").id());
        assert_eq!(12, library.find(" 12 ").expect("should find book").id());
        assert!(library.find("twelve").is_none());
        assert!(library.find("13").is_none());
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_on_try_add() {
        let mut library = Library::default();
        library.try_add(book("a", 1)).expect("should add book");
        let err = library.try_add(book("b", 1)).expect_err("should reject duplicate");
        assert!(matches!(err, LibraryError::DuplicateKey { .. }));
        assert_eq!(1, library.len());
    }

    #[tokio::test]
    async fn test_should_remove_only_one_book() {
        let mut library = Library::new(vec![book("a", 1), book("b", 2), book("c", 3), book("d", 2)]);
        let removed = library.remove(2).expect("should remove book");
        assert_eq!("b", removed.title.as_str());
        assert_eq!(vec!["a", "c", "d"], titles(&library));

        let removed = library.remove(2).expect("should remove shadowed book");
        assert_eq!("d", removed.title.as_str());
        assert_eq!(vec!["a", "c"], titles(&library));
    }

    #[tokio::test]
    async fn test_should_not_remove_missing_book() {
        let mut library = Library::new(vec![book("a", 1), book("b", 2)]);
        let err = library.remove(3).expect_err("should not find book");
        assert!(matches!(err, LibraryError::NotFound { .. }));
        assert_eq!(vec!["a", "b"], titles(&library));
    }

    #[tokio::test]
    async fn test_should_toggle_read() {
        let mut library = Library::new(vec![book("a", 1)]);
        assert!(library.toggle_read(1).expect("should toggle").have_read());
        assert!(!library.toggle_read(1).expect("should toggle").have_read());
        assert!(matches!(library.toggle_read(2), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_track_a_book_end_to_end() {
        let mut library = Library::default();
        let dune = Book::new("Dune", "Herbert", 412, false, None, None);
        let id = dune.id();
        library.add(dune);

        assert_eq!("Dune by Herbert, 412 pages, unread",
                   library.get_book(id).expect("should find book").description());
        library.toggle_read(id).expect("should toggle");
        assert_eq!("Dune by Herbert, 412 pages, read",
                   library.get_book(id).expect("should find book").description());
        library.remove(id).expect("should remove book");
        assert!(library.is_empty());
    }
}
