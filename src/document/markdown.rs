//! Markdown rendering via `pulldown-cmark`.

use super::{DocumentRenderer, MAX_TOC_LEVEL};
use crate::error::ViewerError;
use crate::toc::Slugger;
use log::trace;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use reportview_types::{RenderedDocument, TocEntry};

const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Renders GitHub-flavoured report Markdown.
///
/// Single newlines become line breaks, tables and strikethrough are enabled,
/// and raw HTML is emitted as escaped text. Headings of levels 1 to 4 get an
/// `id` attribute and a TOC entry.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
    hard_breaks: bool,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self {
            options,
            hard_breaks: true,
        }
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep single newlines as soft breaks (plain CommonMark behaviour).
    pub fn with_soft_breaks(mut self) -> Self {
        self.hard_breaks = false;
        self
    }
}

struct OpenHeading {
    event_index: usize,
    level: u8,
    text: String,
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> Result<RenderedDocument, ViewerError> {
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut headings: Vec<TocEntry> = Vec::new();
        let mut slugger = Slugger::new();
        let mut open: Option<OpenHeading> = None;

        for event in Parser::new_ext(source, self.options) {
            let event = neutralize(event, self.hard_breaks);
            match &event {
                Event::Start(Tag::Heading { level, .. }) => {
                    open = Some(OpenHeading {
                        event_index: events.len(),
                        level: *level as u8,
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(heading) = open.take()
                        && heading.level <= MAX_TOC_LEVEL
                    {
                        let position = headings.len();
                        let anchor = slugger.anchor_for(&heading.text, position);
                        if let Some(Event::Start(Tag::Heading { id, .. })) =
                            events.get_mut(heading.event_index)
                        {
                            *id = Some(CowStr::from(anchor.as_str().to_string()));
                        }
                        headings.push(TocEntry {
                            level: heading.level,
                            text: heading.text.trim().to_string(),
                            target_id: anchor,
                            position,
                        });
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some(heading) = open.as_mut() {
                        heading.text.push_str(text);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(heading) = open.as_mut() {
                        heading.text.push(' ');
                    }
                }
                _ => {}
            }
            events.push(event);
        }

        let mut out = String::with_capacity(source.len() + source.len() / 2);
        html::push_html(&mut out, events.into_iter());
        trace!("Rendered {} bytes of Markdown, {} heading(s)", source.len(), headings.len());

        Ok(RenderedDocument {
            html: out,
            headings,
        })
    }

    fn name(&self) -> &'static str {
        "MarkdownRenderer"
    }
}

/// Rewrites events that could smuggle live markup into the page.
fn neutralize(event: Event<'_>, hard_breaks: bool) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::HtmlBlock) => Event::Start(Tag::Paragraph),
        Event::End(TagEnd::HtmlBlock) => Event::End(TagEnd::Paragraph),
        Event::SoftBreak if hard_breaks => Event::HardBreak,
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|s| normalized.starts_with(s)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}
