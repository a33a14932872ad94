use crate::books::domain::model::BookId;
use crate::gui::card::Card;
use crate::utils::html::escape;

// DisplayArea is the container the gui owns and renders cards into; it may be
// cleared and rewritten at any time.
pub trait DisplayArea: Sync + Send {
    fn clear(&mut self);
    fn append(&mut self, card: Card);
    fn cards(&self) -> &[Card];
    fn cards_mut(&mut self) -> &mut [Card];
    fn render(&self) -> String;

    fn card_mut(&mut self, id: BookId) -> Option<&mut Card> {
        self.cards_mut().iter_mut().find(|card| card.id() == id)
    }

    fn card(&self, id: BookId) -> Option<&Card> {
        self.cards().iter().find(|card| card.id() == id)
    }
}

// HtmlDisplayArea keeps the cards of a `<div>` container and renders its markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlDisplayArea {
    class_name: String,
    cards: Vec<Card>,
    generation: u64,
}

impl HtmlDisplayArea {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            cards: vec![],
            generation: 0,
        }
    }

    // number of times the area was cleared
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl DisplayArea for HtmlDisplayArea {
    fn clear(&mut self) {
        self.cards.clear();
        self.generation += 1;
    }

    fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    fn render(&self) -> String {
        let cards: String = self.cards.iter().map(Card::render).collect();
        format!(r#"<div class="{}">{}</div>"#, escape(&self.class_name), cards)
    }
}
