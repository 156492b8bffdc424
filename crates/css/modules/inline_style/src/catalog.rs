//! The fixed set of property names an inline style recognizes.

use anyhow::{Context as _, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Slot index of a property within its `PropertyCatalog`.
///
/// Only meaningful together with the catalog that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u16);

impl PropertyId {
    /// Slot index into per-property storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered, immutable list of camel-case property names.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    names: Vec<String>,
    ids: HashMap<String, PropertyId>,
}

impl PropertyCatalog {
    /// Build a catalog from camel-case names.
    ///
    /// Duplicate names keep the slot of their first occurrence. Names past
    /// `u16::MAX` entries are ignored.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for name in names {
            let name = name.into();
            if catalog.ids.contains_key(&name) {
                log::debug!("PropertyCatalog: ignoring duplicate property {name:?}");
                continue;
            }
            let Ok(slot) = u16::try_from(catalog.names.len()) else {
                log::warn!("PropertyCatalog: catalog full, dropping {name:?}");
                break;
            };
            catalog.ids.insert(name.clone(), PropertyId(slot));
            catalog.names.push(name);
        }
        catalog
    }

    /// Parse a catalog from a JSON array of camel-case names.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an array of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        let names: Vec<String> =
            serde_json::from_str(json).context("property catalog must be a JSON array of names")?;
        Ok(Self::new(names))
    }

    /// The shared catalog of standard CSS properties.
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Look up the slot for a camel-case name.
    pub fn id_of(&self, name: &str) -> Option<PropertyId> {
        self.ids.get(name).copied()
    }

    /// Camel-case name stored in `id`'s slot.
    pub fn name(&self, id: PropertyId) -> &str {
        self.names.get(id.index()).map_or("", String::as_str)
    }

    /// Number of recognized properties.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All `(id, name)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &str)> {
        self.names
            .iter()
            .zip(0_u16..)
            .map(|(name, slot)| (PropertyId(slot), name.as_str()))
    }
}

static STANDARD: Lazy<Arc<PropertyCatalog>> =
    Lazy::new(|| Arc::new(PropertyCatalog::new(STANDARD_PROPERTIES.iter().copied())));

/// Camel-case names of the standard catalog.
pub const STANDARD_PROPERTIES: &[&str] = &[
    "alignContent",
    "alignItems",
    "alignSelf",
    "all",
    "animation",
    "animationDelay",
    "animationDirection",
    "animationDuration",
    "animationFillMode",
    "animationIterationCount",
    "animationName",
    "animationPlayState",
    "animationTimingFunction",
    "appearance",
    "aspectRatio",
    "backfaceVisibility",
    "background",
    "backgroundAttachment",
    "backgroundBlendMode",
    "backgroundClip",
    "backgroundColor",
    "backgroundImage",
    "backgroundOrigin",
    "backgroundPosition",
    "backgroundPositionX",
    "backgroundPositionY",
    "backgroundRepeat",
    "backgroundSize",
    "border",
    "borderBottom",
    "borderBottomColor",
    "borderBottomLeftRadius",
    "borderBottomRightRadius",
    "borderBottomStyle",
    "borderBottomWidth",
    "borderCollapse",
    "borderColor",
    "borderImage",
    "borderImageOutset",
    "borderImageRepeat",
    "borderImageSlice",
    "borderImageSource",
    "borderImageWidth",
    "borderLeft",
    "borderLeftColor",
    "borderLeftStyle",
    "borderLeftWidth",
    "borderRadius",
    "borderRight",
    "borderRightColor",
    "borderRightStyle",
    "borderRightWidth",
    "borderSpacing",
    "borderStyle",
    "borderTop",
    "borderTopColor",
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderTopStyle",
    "borderTopWidth",
    "borderWidth",
    "bottom",
    "boxShadow",
    "boxSizing",
    "captionSide",
    "clear",
    "clip",
    "clipPath",
    "color",
    "columnCount",
    "columnGap",
    "columns",
    "content",
    "counterIncrement",
    "counterReset",
    "cursor",
    "direction",
    "display",
    "emptyCells",
    "filter",
    "flex",
    "flexBasis",
    "flexDirection",
    "flexFlow",
    "flexGrow",
    "flexShrink",
    "flexWrap",
    "float",
    "font",
    "fontFamily",
    "fontSize",
    "fontStretch",
    "fontStyle",
    "fontVariant",
    "fontWeight",
    "gap",
    "grid",
    "gridArea",
    "gridAutoColumns",
    "gridAutoFlow",
    "gridAutoRows",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnStart",
    "gridRow",
    "gridRowEnd",
    "gridRowStart",
    "gridTemplate",
    "gridTemplateAreas",
    "gridTemplateColumns",
    "gridTemplateRows",
    "height",
    "justifyContent",
    "justifyItems",
    "justifySelf",
    "left",
    "letterSpacing",
    "lineHeight",
    "listStyle",
    "listStyleImage",
    "listStylePosition",
    "listStyleType",
    "margin",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "marginTop",
    "maxHeight",
    "maxWidth",
    "minHeight",
    "minWidth",
    "mixBlendMode",
    "objectFit",
    "objectPosition",
    "opacity",
    "order",
    "outline",
    "outlineColor",
    "outlineOffset",
    "outlineStyle",
    "outlineWidth",
    "overflow",
    "overflowWrap",
    "overflowX",
    "overflowY",
    "padding",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "paddingTop",
    "perspective",
    "perspectiveOrigin",
    "pointerEvents",
    "position",
    "quotes",
    "resize",
    "right",
    "rowGap",
    "tableLayout",
    "textAlign",
    "textDecoration",
    "textDecorationColor",
    "textDecorationLine",
    "textDecorationStyle",
    "textIndent",
    "textOverflow",
    "textShadow",
    "textTransform",
    "top",
    "transform",
    "transformOrigin",
    "transformStyle",
    "transition",
    "transitionDelay",
    "transitionDuration",
    "transitionProperty",
    "transitionTimingFunction",
    "userSelect",
    "verticalAlign",
    "visibility",
    "whiteSpace",
    "width",
    "wordBreak",
    "wordSpacing",
    "wordWrap",
    "writingMode",
    "zIndex",
];

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests fail loudly on missing catalog entries")]
mod tests {
    use super::*;
    use css_style_attr::{to_camel_case, to_dashed};

    #[test]
    fn ids_follow_catalog_order() {
        let catalog = PropertyCatalog::new(["color", "backgroundColor"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.id_of("color").map(PropertyId::index), Some(0));
        assert_eq!(catalog.id_of("backgroundColor").map(PropertyId::index), Some(1));
        assert_eq!(catalog.id_of("background-color"), None);
    }

    #[test]
    fn duplicates_keep_first_slot() {
        let catalog = PropertyCatalog::new(["color", "width", "color"]);
        assert_eq!(catalog.len(), 2);
        let names: Vec<&str> = catalog.iter().map(|(_, name)| name).collect();
        assert_eq!(names, ["color", "width"]);
    }

    #[test]
    fn loads_from_json() {
        let catalog = PropertyCatalog::from_json(r#"["zIndex", "opacity"]"#).unwrap();
        let id = catalog.id_of("opacity").unwrap();
        assert_eq!(catalog.name(id), "opacity");
        assert!(PropertyCatalog::from_json(r#"{"names": []}"#).is_err());
    }

    #[test]
    fn standard_catalog_is_shared_and_round_trips() {
        let first = PropertyCatalog::standard();
        let second = PropertyCatalog::standard();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), STANDARD_PROPERTIES.len());
        for (_, name) in first.iter() {
            assert_eq!(to_camel_case(&to_dashed(name)), name);
        }
    }
}
