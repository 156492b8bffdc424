//! A minimal element that owns an inline style for its lifetime.

use crate::catalog::PropertyCatalog;
use crate::declaration::InlineStyle;
use crate::owner::{NodeKey, StyleInvalidation, StyleUpdateSender};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Element whose `style` attribute is backed by an `InlineStyle`.
///
/// The style is created with the element and dropped with it. Every value
/// change sends a `StyleInvalidation` for this element's key.
pub struct StyledElement {
    tag: String,
    style: InlineStyle<StyleUpdateSender>,
}

impl StyledElement {
    /// Create an element with an empty style over `catalog`.
    pub fn new(
        node: NodeKey,
        tag: impl Into<String>,
        catalog: Arc<PropertyCatalog>,
        updates: mpsc::Sender<StyleInvalidation>,
    ) -> Self {
        Self {
            tag: tag.into(),
            style: InlineStyle::new(StyleUpdateSender::new(node, updates), catalog),
        }
    }

    /// Key carried by this element's invalidations.
    pub const fn node(&self) -> NodeKey {
        self.style.owner().node()
    }

    /// Local name the element was created with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `style` IDL attribute.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-elementcssinlinestyle-style>
    pub const fn style(&self) -> &InlineStyle<StyleUpdateSender> {
        &self.style
    }

    pub const fn style_mut(&mut self) -> &mut InlineStyle<StyleUpdateSender> {
        &mut self.style
    }

    /// Current `style` content attribute text.
    pub fn style_attribute(&self) -> String {
        self.style.css_text()
    }

    /// Replace the whole inline style, as `setAttribute("style", text)` does.
    pub fn set_style_attribute(&mut self, text: &str) {
        self.style.set_css_text(text);
    }
}
