use serde::Deserialize;
use crate::books::dto::BookDraft;
use crate::core::library::{LibraryError, LibraryResult};

// FormIntent is set by the button that closed the dialog; a dialog dismissed any
// other way counts as cancelled.
#[derive(Debug, PartialEq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormIntent {
    Submit,
    #[default]
    Cancel,
}

/// Fields of the add-book dialog as the browser submits them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub read: Option<String>,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub pages: String,
    #[serde(default)]
    pub intent: FormIntent,
}

impl BookForm {
    pub fn submitted(title: &str, author: &str, pages: &str, have_read: bool) -> Self {
        Self {
            read: if have_read { Some("on".to_string()) } else { None },
            cover: String::new(),
            title: title.to_string(),
            author: author.to_string(),
            pages: pages.to_string(),
            intent: FormIntent::Submit,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.intent == FormIntent::Submit
    }

    pub fn to_draft(&self) -> LibraryResult<BookDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(LibraryError::validation("title must not be empty", Some("title".to_string())));
        }
        let author = self.author.trim();
        if author.is_empty() {
            return Err(LibraryError::validation("author must not be empty", Some("author".to_string())));
        }
        let pages = self.pages.trim().parse::<i64>().map_err(|_| LibraryError::validation(
            format!("page count {:?} is not a whole number", self.pages).as_str(), Some("pages".to_string())))?;

        let mut draft = BookDraft::new(title, author, pages, self.read.is_some());
        let cover = self.cover.trim();
        if !cover.is_empty() {
            draft = draft.with_cover(cover);
        }
        Ok(draft)
    }
}
