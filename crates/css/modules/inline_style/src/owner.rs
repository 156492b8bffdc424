//! The element side of an inline style: who gets told when a value changes.

use log::warn;
use tokio::sync::mpsc;

/// The element that owns an inline style object.
///
/// The style never mutates its owner; it only asks it to schedule an update.
pub trait StyleOwner {
    /// Called synchronously, at most once per mutating call, after a stored
    /// value actually changed.
    fn perform_update(&self);
}

impl<F: Fn()> StyleOwner for F {
    fn perform_update(&self) {
        self();
    }
}

/// A 64-bit stable key identifying the owning element.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeKey(pub u64);

/// Message sent by `StyleUpdateSender` when an element's inline style changed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct StyleInvalidation {
    /// Element whose style needs re-rendering.
    pub node: NodeKey,
}

/// Owner that forwards update requests to a renderer over a channel.
///
/// Uses `try_send` so the notification stays synchronous; a full or closed
/// channel drops the request with a warning.
#[derive(Clone, Debug)]
pub struct StyleUpdateSender {
    node: NodeKey,
    sender: mpsc::Sender<StyleInvalidation>,
}

impl StyleUpdateSender {
    pub const fn new(node: NodeKey, sender: mpsc::Sender<StyleInvalidation>) -> Self {
        Self { node, sender }
    }

    /// Key of the element this sender reports for.
    pub const fn node(&self) -> NodeKey {
        self.node
    }
}

impl StyleOwner for StyleUpdateSender {
    fn perform_update(&self) {
        if let Err(error) = self.sender.try_send(StyleInvalidation { node: self.node }) {
            warn!(
                "StyleUpdateSender: failed to schedule update for {:?}: {error}",
                self.node
            );
        }
    }
}
