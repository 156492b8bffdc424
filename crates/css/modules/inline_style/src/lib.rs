//! CSSOM inline style — the object behind `element.style`.
//! Spec: <https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface>
//!
//! A string store over a fixed catalog of property names. Values are not
//! parsed or validated; the owning element is told when something changed.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod declaration;
pub mod element;
pub mod error;
pub mod owner;

pub use catalog::{PropertyCatalog, PropertyId, STANDARD_PROPERTIES};
pub use declaration::{InlineStyle, PropertyValue};
pub use element::StyledElement;
pub use error::StyleError;
pub use owner::{NodeKey, StyleInvalidation, StyleOwner, StyleUpdateSender};
