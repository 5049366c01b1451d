//! Collaborators implemented by the embedding host
//!
//! The grid never touches storage, never resolves links and never renders
//! markup itself. It asks these traits to, through `crate::runtime`.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// A link inside a rendered cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLink {
    /// Visible text
    pub text: String,
    /// Target attribute, handed to the navigator unchanged
    pub target: String,
}

/// Display projection of a cell's raw value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    /// Renderer output, opaque to the grid
    pub markup: String,
    /// Links in document order; clicks refer to them by index
    pub links: Vec<RenderedLink>,
}

impl RenderedCell {
    /// Projection with no links
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            markup: text.into(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("render failed: {0}")]
pub struct RenderError(pub String);

/// Turns raw cell text into a display projection.
///
/// Called from worker threads. `source_path` is the document being viewed,
/// for resolving relative links.
pub trait FormattedTextRenderer: Send + Sync {
    fn render(&self, raw: &str, source_path: &Path) -> Result<RenderedCell, RenderError>;
}

/// Opens link targets
pub trait LinkNavigator {
    /// `new_pane` is set when the click carried the "open elsewhere" modifier
    fn open(&self, target: &str, source_path: &Path, new_pane: bool);
}

/// The document host: persistence lives on its side
pub trait DocumentHost {
    /// A committed mutation happened; schedule a save
    fn mark_modified(&mut self);
}

/// Renderer that only understands `[[target]]` and `[[target|alias]]` markers.
///
/// Markup is the cell text with markers replaced by their visible text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkMarkerRenderer;

impl FormattedTextRenderer for LinkMarkerRenderer {
    fn render(&self, raw: &str, _source_path: &Path) -> Result<RenderedCell, RenderError> {
        let mut markup = String::with_capacity(raw.len());
        let mut links = Vec::new();
        let mut rest = raw;

        while let Some(open) = rest.find("[[") {
            let after = &rest[open + 2..];
            let Some(close) = after.find("]]") else {
                break;
            };
            markup.push_str(&rest[..open]);

            let inner = &after[..close];
            let (target, text) = match inner.split_once('|') {
                Some((target, alias)) => (target.trim(), alias.trim()),
                None => (inner.trim(), inner.trim()),
            };
            markup.push_str(text);
            links.push(RenderedLink {
                text: text.to_string(),
                target: target.to_string(),
            });

            rest = &after[close + 2..];
        }
        markup.push_str(rest);

        Ok(RenderedCell { markup, links })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_marker_renderer() {
        let out = LinkMarkerRenderer
            .render("see [[notes/a]] and [[b|Bee]]", Path::new("doc.csv"))
            .unwrap();

        assert_eq!(out.markup, "see notes/a and Bee");
        assert_eq!(out.links.len(), 2);
        assert_eq!(out.links[0].target, "notes/a");
        assert_eq!(out.links[1].target, "b");
        assert_eq!(out.links[1].text, "Bee");
    }

    #[test]
    fn test_link_marker_renderer_unclosed() {
        let out = LinkMarkerRenderer
            .render("broken [[link", Path::new("doc.csv"))
            .unwrap();

        assert_eq!(out.markup, "broken [[link");
        assert!(out.links.is_empty());
    }
}
