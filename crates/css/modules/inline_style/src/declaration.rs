//! The inline style object: property store, `cssText` and the CSSOM mutators.
//!
//! Values live in one slot per catalog entry. A property is "used" once it has
//! been assigned a non-empty value and stays used until `remove_property`
//! drops it; only used properties are serialized, in the order they were
//! first used.

use crate::catalog::{PropertyCatalog, PropertyId};
use crate::error::StyleError;
use crate::owner::StyleOwner;
use core::fmt::{Display, Formatter, Result as FmtResult};
use css_style_attr::{parse_style_attribute, serialize_declaration, to_camel_case, to_dashed};
use log::trace;
use std::sync::Arc;

/// Value argument of `InlineStyle::set_property`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue<'value> {
    /// No value supplied; the call does nothing.
    Undefined,
    /// Explicit null; removes the property.
    Null,
    /// A string value. The empty string removes the property.
    Value(&'value str),
}

impl<'value> From<&'value str> for PropertyValue<'value> {
    fn from(value: &'value str) -> Self {
        Self::Value(value)
    }
}

impl<'value> From<&'value String> for PropertyValue<'value> {
    fn from(value: &'value String) -> Self {
        Self::Value(value.as_str())
    }
}

impl<'value> From<Option<&'value str>> for PropertyValue<'value> {
    fn from(value: Option<&'value str>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

/// Inline style of one element.
pub struct InlineStyle<O: StyleOwner> {
    catalog: Arc<PropertyCatalog>,
    /// One slot per catalog entry, indexed by `PropertyId`.
    values: Box<[String]>,
    /// Used properties in first-use order.
    used: Vec<PropertyId>,
    /// Membership flag per slot, mirrors `used`.
    in_use: Box<[bool]>,
    owner: O,
}

impl<O: StyleOwner> InlineStyle<O> {
    /// Create an empty style for `owner` recognizing the names in `catalog`.
    pub fn new(owner: O, catalog: Arc<PropertyCatalog>) -> Self {
        let values = vec![String::new(); catalog.len()].into_boxed_slice();
        let in_use = vec![false; catalog.len()].into_boxed_slice();
        Self {
            catalog,
            values,
            used: Vec::new(),
            in_use,
            owner,
        }
    }

    /// The fixed set of names this style has accessors for.
    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// The element notified on value changes.
    pub const fn owner(&self) -> &O {
        &self.owner
    }

    /// Current value of `id`, or `""` when unset.
    pub fn get(&self, id: PropertyId) -> &str {
        self.values.get(id.index()).map_or("", String::as_str)
    }

    /// Assign `value` to `id`.
    ///
    /// A non-empty value marks the property used. The owner is notified only
    /// when the stored value changes. Assigning `""` here clears the value
    /// but leaves the property used; `remove_property` is the only way to
    /// drop it from `css_text`.
    pub fn set(&mut self, id: PropertyId, value: &str) {
        if id.index() >= self.values.len() {
            return;
        }
        if !value.is_empty()
            && let Some(flag) = self.in_use.get_mut(id.index())
            && !*flag
        {
            *flag = true;
            self.used.push(id);
        }
        let Some(slot) = self.values.get_mut(id.index()) else {
            return;
        };
        if *slot == value {
            return;
        }
        value.clone_into(slot);
        trace!(
            "InlineStyle: {} changed, scheduling update",
            self.catalog.name(id)
        );
        self.owner.perform_update();
    }

    /// Read through the camel-case accessor `name`, like `style[name]`.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::UnknownProperty` if `name` is not in the catalog.
    pub fn get_by_name(&self, name: &str) -> Result<&str, StyleError> {
        let id = self.accessor(name)?;
        Ok(self.get(id))
    }

    /// Write through the camel-case accessor `name`, like `style[name] = value`.
    ///
    /// # Errors
    ///
    /// Returns `StyleError::UnknownProperty` if `name` is not in the catalog.
    pub fn set_by_name(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let id = self.accessor(name)?;
        self.set(id, value);
        Ok(())
    }

    /// Serialize the used properties as `"<dashed-name>: <value>;"` entries.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext>
    pub fn css_text(&self) -> String {
        let mut text = String::new();
        for &id in &self.used {
            serialize_declaration(&mut text, &to_dashed(self.catalog.name(id)), self.get(id));
        }
        text
    }

    /// Replace every used property with the declarations in `text`.
    ///
    /// Rules without a `:` and blank rules are skipped. An empty value removes
    /// the property, so a later `name:` rule undoes an earlier `name: value`.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-csstext>
    pub fn set_css_text(&mut self, text: &str) {
        for id in core::mem::take(&mut self.used) {
            self.set(id, "");
            if let Some(flag) = self.in_use.get_mut(id.index()) {
                *flag = false;
            }
        }
        if text.is_empty() {
            return;
        }
        for declaration in parse_style_attribute(text) {
            self.set_property(&declaration.property, declaration.value.as_str());
        }
    }

    /// Set a property by dashed or camel-case name.
    ///
    /// `Undefined` does nothing; `Null` and `""` remove the property. Names
    /// outside the catalog are ignored.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty>
    pub fn set_property<'value>(&mut self, name: &str, value: impl Into<PropertyValue<'value>>) {
        let camel = to_camel_case(name);
        match value.into() {
            PropertyValue::Undefined => {}
            PropertyValue::Null | PropertyValue::Value("") => {
                self.remove_property(&camel);
            }
            PropertyValue::Value(text) => {
                if let Some(id) = self.lookup(&camel) {
                    self.set(id, text);
                }
            }
        }
    }

    /// Remove a used property and return its previous value.
    ///
    /// Returns `""` without notifying when the property is not used or not in
    /// the catalog.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty>
    pub fn remove_property(&mut self, name: &str) -> String {
        match self.lookup(&to_camel_case(name)) {
            Some(id) => self.remove_id(id),
            None => String::new(),
        }
    }

    /// Value of a property by dashed or camel-case name, `""` when unset or
    /// not in the catalog.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue>
    pub fn get_property_value(&self, name: &str) -> &str {
        self.lookup(&to_camel_case(name))
            .map_or("", |id| self.get(id))
    }

    /// Number of used properties.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-length>
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// True when `css_text` would be empty.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Dashed name of the used property at `index`, in `css_text` order.
    ///
    /// Spec: <https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-item>
    pub fn item(&self, index: usize) -> Option<String> {
        self.used
            .get(index)
            .map(|&id| to_dashed(self.catalog.name(id)))
    }

    /// `(dashed name, value)` of every used property, in `css_text` order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.used
            .iter()
            .map(|&id| (to_dashed(self.catalog.name(id)), self.get(id)))
    }

    fn remove_id(&mut self, id: PropertyId) -> String {
        if !matches!(self.in_use.get(id.index()), Some(true)) {
            return String::new();
        }
        let old = self.get(id).to_owned();
        self.set(id, "");
        if let Some(flag) = self.in_use.get_mut(id.index()) {
            *flag = false;
        }
        self.used.retain(|&used| used != id);
        old
    }

    fn accessor(&self, name: &str) -> Result<PropertyId, StyleError> {
        self.catalog
            .id_of(name)
            .ok_or_else(|| StyleError::UnknownProperty(name.to_owned()))
    }

    fn lookup(&self, camel: &str) -> Option<PropertyId> {
        let id = self.catalog.id_of(camel);
        if id.is_none() {
            trace!("InlineStyle: ignoring unknown property {camel:?}");
        }
        id
    }
}

impl<O: StyleOwner> Display for InlineStyle<O> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.css_text())
    }
}
