//! CSS Style Attributes — the `cssText` grammar of an inline style.
//! Spec: <https://www.w3.org/TR/css-style-attr/>
//!
//! The grammar is the permissive `(<property>: <value>;)*` form used by
//! inline style objects: no tokenization, no validation, malformed items
//! are dropped silently.

#![forbid(unsafe_code)]

pub mod names;

use std::collections::HashMap;

pub use names::{to_camel_case, to_dashed};

/// A single declaration parsed from a `cssText` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name exactly as written, trimmed. Either dashed or camel-case.
    pub property: String,
    /// Value trimmed of surrounding whitespace. May be empty.
    pub value: String,
}

/// Parse a `cssText` string into its declarations, in source order.
///
/// - Splits on semicolons (`;`) into declaration items.
/// - Skips items that are blank after trimming.
/// - Splits each item on the first colon (`:`); items with no colon are skipped.
/// - Trims both halves. An empty value is kept: callers treat it as a removal.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out: Vec<Declaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_trim_whitespace);
        if item.is_empty() {
            continue;
        }
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            log::debug!("style_attr: skipping rule without ':' {item:?}");
            continue;
        };
        out.push(Declaration {
            property: raw_prop.trim_matches(is_trim_whitespace).to_owned(),
            value: raw_value.trim_matches(is_trim_whitespace).to_owned(),
        });
    }
    out
}

/// Convenience: parse into a map keyed by property name.
///
/// If a property appears multiple times, the last one wins.
pub fn parse_style_attribute_into_map(input: &str) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::new();
    for decl in parse_style_attribute(input) {
        map.insert(decl.property, decl.value);
    }
    map
}

/// Append one `"<name>: <value>;"` entry to `out`.
pub fn serialize_declaration(out: &mut String, name: &str, value: &str) {
    out.reserve(name.len() + value.len() + 3);
    out.push_str(name);
    out.push_str(": ");
    out.push_str(value);
    out.push(';');
}

/// Serialize `(name, value)` pairs into `cssText` form.
///
/// Entries are self-terminated by `;` and concatenated with no separator.
pub fn serialize_declarations<'decl, I>(declarations: I) -> String
where
    I: IntoIterator<Item = (&'decl str, &'decl str)>,
{
    let mut out = String::new();
    for (name, value) in declarations {
        serialize_declaration(&mut out, name, value);
    }
    out
}

/// Whitespace stripped around rules, names and values: the set removed by
/// ECMAScript `String.prototype.trim`, which includes VT, NBSP and BOM but
/// not NEL (U+0085).
///
/// Spec: <https://tc39.es/ecma262/#sec-trimstring>
fn is_trim_whitespace(character: char) -> bool {
    character == '\u{FEFF}' || (character.is_whitespace() && character != '\u{0085}')
}
