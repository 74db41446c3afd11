use crate::clients::html::escape;
use crate::models::card::{Card, CardContent, CardKind, Section};

pub const HUMOR_IMAGE_PATH: &str = "/cards/humor/image";

const STYLE: &str = r#"
body { margin: 0; background-color: #1A1A2E; color: #EAEAEA; font-family: "Bahnschrift", sans-serif; font-size: 15px; }
.columns { display: flex; gap: 8px; height: 100vh; padding: 8px; box-sizing: border-box; }
.column { flex: 1; display: flex; flex-direction: column; gap: 8px; min-width: 0; }
.card { background-color: #1F1F3D; border-radius: 8px; border: 1px solid #4E4E6A; padding: 10px; overflow-y: auto; }
.card h2 { font-size: 20px; font-weight: bold; color: #00FFFF; margin: 0 0 10px 0; }
.card img { max-width: 100%; max-height: 85vh; display: block; margin: auto; }
.card-activity { flex: 3; } .card-quote { flex: 1; } .card-recipe { flex: 4; } .card-events { flex: 2; }
.card-humor { flex: 1; }
"#;

const ACTIVITY_SCRIPT: &str = r#"
async function refreshActivity() {
  try {
    const res = await fetch('/api/activity');
    if (!res.ok) return;
    const data = await res.json();
    const body = document.getElementById('activity-body');
    body.innerHTML = '';
    const title = document.createElement('b');
    title.textContent = data.activity;
    body.appendChild(title);
    body.appendChild(document.createElement('br'));
    body.appendChild(document.createTextNode(data.description));
  } catch (e) {}
}
setInterval(refreshActivity, 1000);
"#;

fn css_class(kind: CardKind) -> &'static str {
    match kind {
        CardKind::Activity => "card-activity",
        CardKind::Quote => "card-quote",
        CardKind::Recipe => "card-recipe",
        CardKind::Events => "card-events",
        CardKind::Humor => "card-humor",
    }
}

fn section_html(section: &Section) -> String {
    let mut out = String::new();
    if let Some(heading) = &section.heading {
        out.push_str(&format!("<b>{}</b><br>", escape(heading)));
    }
    let lines: Vec<String> = section.lines.iter().map(|line| escape(line)).collect();
    out.push_str(&lines.join("<br>"));
    out
}

pub fn card_html(card: &Card) -> String {
    let body = match &card.content {
        CardContent::Text { sections } => sections
            .iter()
            .map(section_html)
            .collect::<Vec<_>>()
            .join("<br><br>"),
        CardContent::Image { source_url, .. } => format!(
            r#"<img src="{}" alt="{}">"#,
            HUMOR_IMAGE_PATH,
            escape(source_url)
        ),
    };
    let body_id = if card.kind == CardKind::Activity {
        r#" id="activity-body""#
    } else {
        ""
    };
    format!(
        r#"<section class="card {}"><h2>{}</h2><div{}>{}</div></section>"#,
        css_class(card.kind),
        escape(&card.title),
        body_id,
        body
    )
}

/// Full dashboard page: informational cards on the left, humor on the right.
pub fn render_html(cards: &[Card]) -> String {
    let column = |humor: bool| -> String {
        cards
            .iter()
            .filter(|card| (card.kind == CardKind::Humor) == humor)
            .map(card_html)
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Personal Dashboard</title><style>{}</style></head>\n<body><div class=\"columns\"><div class=\"column\">{}</div><div class=\"column\">{}</div></div>\n<script>{}</script></body></html>\n",
        STYLE,
        column(false),
        column(true),
        ACTIVITY_SCRIPT
    )
}

/// Plain-text rendering for the terminal.
pub fn render_text(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!("== {} ==\n", card.title));
        match &card.content {
            CardContent::Text { sections } => {
                for (idx, section) in sections.iter().enumerate() {
                    if idx > 0 {
                        out.push('\n');
                    }
                    if let Some(heading) = &section.heading {
                        out.push_str(heading);
                        out.push('\n');
                    }
                    for line in &section.lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
            CardContent::Image {
                source_url,
                content_type,
                bytes,
            } => {
                out.push_str(&format!(
                    "{} ({}, {} bytes)\n",
                    source_url,
                    content_type,
                    bytes.len()
                ));
            }
        }
        out.push('\n');
    }
    out
}
