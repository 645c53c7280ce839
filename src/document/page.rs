//! A static HTML page as a render target.

use reportview_traits::{ErrorView, RenderTarget, ViewState};
use reportview_types::{AnchorId, RenderedDocument, TocEntry};
use std::fmt::Write;

const LOADING_PLACEHOLDER: &str = "Loading report...";

#[derive(Debug, Clone, Default)]
enum Body {
    #[default]
    Loading,
    Content {
        html: String,
        toc: Vec<TocEntry>,
    },
    Error(ErrorView),
}

/// Collects what the viewer displays and serializes it as one standalone
/// HTML document.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    site_name: String,
    title: Option<String>,
    body: Body,
    active: Option<AnchorId>,
}

impl HtmlPage {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            title: None,
            body: Body::Loading,
            active: None,
        }
    }

    pub fn state(&self) -> ViewState {
        match &self.body {
            Body::Loading => ViewState::Loading,
            Body::Content { .. } => ViewState::Content,
            Body::Error(e) => ViewState::Error(e.kind),
        }
    }

    /// `"{title} | {site}"`, or just the site name before a title is known.
    pub fn document_title(&self) -> String {
        match &self.title {
            Some(t) => format!("{} | {}", t, self.site_name),
            None => self.site_name.clone(),
        }
    }

    pub fn breadcrumb(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn active(&self) -> Option<&AnchorId> {
        self.active.as_ref()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(4096);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(&self.document_title()));
        out.push_str("</head>\n<body>\n");

        out.push_str("<nav class=\"breadcrumb\"><span class=\"breadcrumb-current\">");
        out.push_str(&escape(self.breadcrumb().unwrap_or("")));
        out.push_str("</span></nav>\n");

        match &self.body {
            Body::Loading => {
                let _ = writeln!(out, "<main id=\"report-content\"><p class=\"loading\">{}</p></main>", LOADING_PLACEHOLDER);
            }
            Body::Content { html, toc } => {
                self.write_toc(&mut out, toc);
                out.push_str("<main id=\"report-content\">\n");
                out.push_str(html);
                out.push_str("</main>\n");
            }
            Body::Error(error) => {
                let _ = write!(
                    out,
                    "<main id=\"report-content\"><div class=\"error-state\" data-kind=\"{}\"><p>{}</p>",
                    error.kind,
                    escape(&error.message)
                );
                if let Some(link) = &error.recovery {
                    let _ = write!(
                        out,
                        "<a class=\"back-link\" href=\"{}\">{}</a>",
                        escape(&link.href),
                        escape(&link.label)
                    );
                }
                out.push_str("</div></main>\n");
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn write_toc(&self, out: &mut String, toc: &[TocEntry]) {
        out.push_str("<nav id=\"toc\">\n<ul>\n");
        for entry in toc {
            let class = if self.active.as_ref() == Some(&entry.target_id) {
                "toc-link active"
            } else {
                "toc-link"
            };
            let _ = writeln!(
                out,
                "<li class=\"toc-level-{}\"><a class=\"{}\" href=\"{}\">{}</a></li>",
                entry.level,
                class,
                escape(&entry.target_id.href()),
                escape(&entry.text)
            );
        }
        out.push_str("</ul>\n</nav>\n");
    }
}

impl RenderTarget for HtmlPage {
    fn set_content(&mut self, document: &RenderedDocument) {
        self.active = None;
        self.body = Body::Content {
            html: document.html.clone(),
            toc: document.headings.clone(),
        };
    }

    fn set_error(&mut self, error: &ErrorView) {
        self.active = None;
        self.body = Body::Error(error.clone());
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_active_entry(&mut self, entry: Option<&AnchorId>) {
        self.active = entry.cloned();
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
