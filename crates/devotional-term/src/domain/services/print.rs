use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;

use super::DisplaySurface;
use crate::domain::models::ElementId;
use crate::domain::models::PrintWindow;

/// Time given to the print window to lay the document out before printing.
pub const PRINT_SETTLE_DELAY: Duration = Duration::from_millis(250);

const PRINT_STYLE: &str = r#"
        body {
            font-family: Georgia, serif;
            line-height: 1.6;
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
        }
        h2 {
            color: #333;
            border-bottom: 2px solid #667eea;
            padding-bottom: 10px;
        }
        h3 {
            color: #555;
            margin-top: 25px;
        }
        blockquote {
            background: #f8f9fa;
            border-left: 4px solid #667eea;
            padding: 15px;
            font-style: italic;
            margin: 15px 0;
        }
        .content, .prayer {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 5px;
            margin: 15px 0;
        }
        .metadata {
            text-align: center;
            color: #666;
            font-size: 0.9em;
            margin-top: 30px;
            border-top: 1px solid #ccc;
            padding-top: 15px;
        }
"#;

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn section<S: DisplaySurface + ?Sized>(surface: &S, heading: &str, element: ElementId) -> String {
    format!(
        "<h3>{heading}</h3>\n<div class=\"content\">{}</div>",
        escape_html(&surface.text(element))
    )
}

/// Build a standalone printable page from the currently rendered devotional.
///
/// Returns `None` when nothing has been rendered yet.
pub fn build_print_document<S: DisplaySurface + ?Sized>(
    surface: &S,
    generated_on: NaiveDate,
) -> Option<String> {
    if !surface.is_visible(ElementId::DevotionalResult) {
        return None;
    }

    let mut tags = vec![format!(
        "<span class=\"tag\">{}</span>",
        escape_html(&surface.text(ElementId::AgeGroupTag))
    )];
    if surface.is_visible(ElementId::TopicTag) {
        tags.push(format!(
            "<span class=\"tag\">{}</span>",
            escape_html(&surface.text(ElementId::TopicTag))
        ));
    }

    let mut card = vec![
        format!(
            "<h2>{}</h2>",
            escape_html(&surface.text(ElementId::DevotionalTitle))
        ),
        format!("<div class=\"tags\">{}</div>", tags.join(" ")),
        "<h3>Question of the Day</h3>".to_string(),
        format!(
            "<blockquote>{}</blockquote>",
            escape_html(&surface.text(ElementId::QuestionOfDay))
        ),
    ];

    if surface.is_visible(ElementId::ListenScripture) {
        card.push(format!(
            "<h3>Listen</h3>\n<p class=\"scripture\">{}</p>\n<div class=\"content\">{}</div>",
            escape_html(&surface.text(ElementId::ListenScripture)),
            escape_html(&surface.text(ElementId::ListenContent))
        ));
    } else {
        card.push(section(surface, "Listen", ElementId::ListenContent));
    }
    card.push(section(surface, "Learn", ElementId::LearnContent));
    card.push(section(surface, "Live", ElementId::LiveContent));
    card.push(format!(
        "<h3>Prayer</h3>\n<div class=\"prayer\">{}</div>",
        escape_html(&surface.text(ElementId::DevotionalPrayer))
    ));

    Some(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>AOG Family Devotional</title>\n    <style>{PRINT_STYLE}    </style>\n</head>\n<body>\n{}\n<div class=\"metadata\">\n    <p>AOG Family Devotionals - Generated on {}</p>\n</div>\n</body>\n</html>\n",
        card.join("\n"),
        generated_on.format("%-m/%-d/%Y")
    ))
}

/// Open the document in a print window, let it settle, print, then close.
pub async fn export_for_print(window: &dyn PrintWindow, document: &str) -> Result<()> {
    window.open(document).await?;
    tokio::time::sleep(PRINT_SETTLE_DELAY).await;

    let printed = window.print().await;
    window.close().await?;

    printed
}
