use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Activity,
    Quote,
    Recipe,
    Events,
    Humor,
}

impl CardKind {
    pub const ALL: [CardKind; 5] = [
        CardKind::Activity,
        CardKind::Quote,
        CardKind::Recipe,
        CardKind::Events,
        CardKind::Humor,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CardKind::Activity => "Current Activity",
            CardKind::Quote => "Quote of the Day",
            CardKind::Recipe => "Recipe of the Day",
            CardKind::Events => "Upcoming Events",
            CardKind::Humor => "Daily Dose of Humor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Section {
    pub fn plain(text: &str) -> Self {
        Self {
            heading: None,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn titled(heading: &str, lines: Vec<String>) -> Self {
        Self {
            heading: Some(heading.to_string()),
            lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardContent {
    Text { sections: Vec<Section> },
    Image {
        source_url: String,
        content_type: String,
        #[serde(skip)]
        bytes: Vec<u8>,
    },
}

impl CardContent {
    pub fn text(text: &str) -> Self {
        CardContent::Text {
            sections: vec![Section::plain(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub content: CardContent,
}

impl Card {
    pub fn new(kind: CardKind, content: CardContent) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content,
        }
    }

    pub fn text(kind: CardKind, text: &str) -> Self {
        Self::new(kind, CardContent::text(text))
    }

    pub fn loading(kind: CardKind) -> Self {
        Self::text(kind, "Loading...")
    }
}
