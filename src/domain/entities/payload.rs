/// Card accent color as a packed 0xRRGGBB value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const PURPLE: Color = Color(0x9B59B6);

    pub fn value(self) -> u32 {
        self.0
    }
}

/// A single name/value row on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl CardField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Structured reply rendered by the platform as a titled, colored block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
    pub color: Color,
    pub fields: Vec<CardField>,
    pub footer: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            color: Color::PURPLE,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(CardField::new(name, value));
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// Reply content sent back to the channel a command came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    PlainText(String),
    Card(Card),
}

impl Payload {
    pub fn text(text: impl Into<String>) -> Self {
        Payload::PlainText(text.into())
    }

    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Payload::Card(card) => Some(card),
            Payload::PlainText(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::PlainText(text) => Some(text),
            Payload::Card(_) => None,
        }
    }
}

impl From<Card> for Payload {
    fn from(card: Card) -> Self {
        Payload::Card(card)
    }
}
