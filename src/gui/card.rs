use crate::books::domain::BookRecord;
use crate::books::domain::model::BookId;
use crate::gui::event::Control;
use crate::utils::html::escape;

// CardFields are the displayed values of a card, already formatted as text.
#[derive(Debug, PartialEq, Clone)]
pub struct CardFields {
    pub cover: String,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read_state: String,
}

impl CardFields {
    pub fn from_book<B: BookRecord + ?Sized>(book: &B) -> Self {
        Self {
            cover: book.cover().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            pages: book.pages().to_string(),
            read_state: book.read_status().to_string(),
        }
    }
}

/// Card is the on-screen rendition of one book, tagged with the book's id.
///
/// Listeners are attached at most once per card; patching the fields leaves them in
/// place, only a full re-render of the display area drops them together with the card.
#[derive(Debug, PartialEq, Clone)]
pub struct Card {
    id: BookId,
    pub fields: CardFields,
    listeners: Vec<Control>,
}

impl Card {
    pub fn new<B: BookRecord + ?Sized>(book: &B) -> Self {
        Self {
            id: book.id(),
            fields: CardFields::from_book(book),
            listeners: vec![],
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn patch<B: BookRecord + ?Sized>(&mut self, book: &B) {
        self.fields = CardFields::from_book(book);
    }

    // returns false when the control was already wired
    pub fn attach(&mut self, control: Control) -> bool {
        if self.listens_to(control) {
            return false;
        }
        self.listeners.push(control);
        true
    }

    pub fn listens_to(&self, control: Control) -> bool {
        self.listeners.contains(&control)
    }

    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(r#"<div class="book" data-id="{}" data-read="{}">"#,
                               self.id, escape(&self.fields.read_state)));
        html.push_str(&format!(r#"<img src="{}" alt="">"#, escape(&self.fields.cover)));
        for text in [&self.fields.title, &self.fields.author, &self.fields.pages, &self.fields.read_state] {
            html.push_str(&format!("<span>{}</span>", escape(text)));
        }
        html.push_str(r#"<div class="book-buttons">"#);
        for control in Control::ALL {
            html.push_str(&self.render_control(control));
        }
        html.push_str("</div></div>");
        html
    }

    // an unwired control is rendered inert
    fn render_control(&self, control: Control) -> String {
        if self.listens_to(control) {
            format!(r#"<form method="post" action="/books/{}/{}"><button type="submit" class="onclick {} material-symbols-outlined">{}</button></form>"#,
                    self.id, control.action(), control.css_class(), control.icon())
        } else {
            format!(r#"<button type="button" class="{} material-symbols-outlined" disabled>{}</button>"#,
                    control.css_class(), control.icon())
        }
    }
}
