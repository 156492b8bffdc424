//! Conversion between dashed CSS property syntax (`background-color`) and the
//! camel-case accessor form (`backgroundColor`).

/// Convert a camel-case accessor name to dashed CSS syntax.
///
/// A hyphen is inserted before every ASCII uppercase letter that directly
/// follows an ASCII lowercase letter or digit, then the whole string is
/// lowercased. Leading or consecutive capitals get no special treatment:
/// `ABc` becomes `abc`, `aBC` becomes `a-bc`.
pub fn to_dashed(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous: Option<char> = None;
    for character in name.chars() {
        if character.is_ascii_uppercase()
            && previous.is_some_and(|prev| prev.is_ascii_lowercase() || prev.is_ascii_digit())
        {
            out.push('-');
        }
        out.extend(character.to_lowercase());
        previous = Some(character);
    }
    out
}

/// Convert dashed CSS syntax to the camel-case accessor name.
///
/// Every `-` is dropped and the character after it is uppercased. A trailing
/// hyphen is simply dropped. Names without hyphens come back unchanged.
pub fn to_camel_case(name: &str) -> String {
    if !name.contains('-') {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len());
    let mut next_upper = false;
    for character in name.chars() {
        if character == '-' {
            next_upper = true;
        } else if next_upper {
            out.extend(character.to_uppercase());
            next_upper = false;
        } else {
            out.push(character);
        }
    }
    out
}
