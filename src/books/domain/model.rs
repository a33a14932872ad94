use rand::Rng;
use crate::books::domain::BookRecord;
use crate::core::domain::{DEFAULT_COVER, Identifiable, MAX_BOOK_ID};

pub type BookId = u64;

// Book is a single entry on the shelf. Only the read flag changes after creation,
// the id in particular is fixed for the lifetime of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    id: BookId,
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub have_read: bool,
    pub cover: String,
}

impl Book {
    /// Creates a book, falling back to the placeholder cover when `cover` is missing
    /// or empty and to a random id in `[0, 10^9)` when `id` is missing.
    ///
    /// Nothing is validated here; empty titles or negative page counts are kept as given.
    pub fn new(title: &str, author: &str, pages: i64, have_read: bool,
               cover: Option<&str>, id: Option<BookId>) -> Self {
        Self::with_defaults(title, author, pages, have_read, cover, id, DEFAULT_COVER, MAX_BOOK_ID)
    }

    pub(crate) fn with_defaults(title: &str, author: &str, pages: i64, have_read: bool,
                                cover: Option<&str>, id: Option<BookId>,
                                placeholder_cover: &str, max_book_id: BookId) -> Self {
        let cover = match cover {
            Some(url) if !url.is_empty() => url,
            _ => placeholder_cover,
        };
        Self {
            id: id.unwrap_or_else(|| generate_book_id(max_book_id)),
            title: title.to_string(),
            author: author.to_string(),
            pages,
            have_read,
            cover: cover.to_string(),
        }
    }

    pub fn toggle_read(&mut self) -> bool {
        self.have_read = !self.have_read;
        self.have_read
    }
}

pub(crate) fn generate_book_id(max_book_id: BookId) -> BookId {
    rand::thread_rng().gen_range(0..max_book_id.max(1))
}

// ids coming back from markup or urls are text
pub fn parse_book_id(raw: &str) -> Option<BookId> {
    raw.trim().parse::<BookId>().ok()
}

impl Identifiable for Book {
    fn id(&self) -> BookId {
        self.id
    }
}

impl BookRecord for Book {
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
