use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookId;
use crate::gui::form::BookForm;

// Control is one of the clickable affordances on a card.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Control {
    ToggleRead,
    Remove,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::ToggleRead, Control::Remove];

    pub fn action(&self) -> &'static str {
        match self {
            Control::ToggleRead => "toggle",
            Control::Remove => "remove",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Control::ToggleRead => "read-book",
            Control::Remove => "remove-book",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Control::ToggleRead => "chrome_reader_mode",
            Control::Remove => "delete",
        }
    }
}

// ClickEvent names the card by the id it carries in markup, which is text.
#[derive(Debug, PartialEq, Clone)]
pub struct ClickEvent {
    pub card_id: String,
    pub control: Control,
}

impl ClickEvent {
    pub fn new(card_id: &str, control: Control) -> Self {
        Self {
            card_id: card_id.to_string(),
            control,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Click(ClickEvent),
    FormClosed(BookForm),
}

// Rendered reports how the display area changed while handling an event.
#[derive(Debug, PartialEq, Clone)]
pub enum Rendered {
    Full,
    Patched(Vec<BookId>),
    Unchanged,
}
