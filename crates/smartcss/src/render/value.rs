//! Declaration rendering.

use crate::types::StyleValue;

/// Convert a camel-cased property name to its CSS form.
///
/// A hyphen is inserted before every uppercase letter and the result is
/// lower-cased. Vendor prefixes follow from that (`MozTransition` becomes
/// `-moz-transition`), except `ms`, whose first letter is conventionally
/// lowercase: `msTransition` becomes `-ms-transition`.
///
/// ```
/// use smartcss::render::hyphenate_property;
///
/// assert_eq!(hyphenate_property("backgroundColor"), "background-color");
/// assert_eq!(hyphenate_property("MozTransition"), "-moz-transition");
/// assert_eq!(hyphenate_property("msTransition"), "-ms-transition");
/// ```
pub fn hyphenate_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Render one `property:value;` declaration.
pub fn render_declaration(name: &str, value: &StyleValue) -> String {
    format!("{}:{};", hyphenate_property(name), value.to_css())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn hyphenation() {
        assert_eq!(hyphenate_property("color"), "color");
        assert_eq!(hyphenate_property("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(hyphenate_property("WebkitBoxShadow"), "-webkit-box-shadow");
        assert_eq!(hyphenate_property("background-color"), "background-color");
        assert_eq!(hyphenate_property("msFlex"), "-ms-flex");
    }

    #[test]
    fn declarations() {
        assert_eq!(render_declaration("backgroundColor", &"red".into()), "background-color:red;");
        assert_eq!(render_declaration("color", &Color::RED.into()), "color:hsl(0, 100%, 50%);");

        let border = StyleValue::from(vec!["1px solid".into(), Color::RED.into()]);
        assert_eq!(render_declaration("border", &border), "border:1px solid hsl(0, 100%, 50%);");
    }

    #[test]
    fn values_are_not_escaped() {
        assert_eq!(render_declaration("content", &"\"string\"".into()), "content:\"string\";");
    }
}
