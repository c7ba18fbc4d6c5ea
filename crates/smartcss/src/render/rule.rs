//! Rule rendering.
//!
//! Rendering is a pure function of a [`StyleClass`] and a read-only snapshot
//! of the class-id to class-name table it was registered against.

use std::collections::HashMap;
use std::fmt::Write;

use cssparser::serialize_identifier;

use super::value::render_declaration;
use crate::rules::StyleClass;
use crate::selector::ParsedSelector;
use crate::targets;

/// Render one style class as a CSS rule.
///
/// The selector header substitutes every class id with its generated class
/// name, escaped as a CSS identifier; a media condition wraps the whole rule
/// in `@media <media>{...}`.
pub fn render_style_class(class: &StyleClass, class_names: &HashMap<String, String>) -> String {
    let mut out = String::new();
    write_style_class(&mut out, class, class_names);
    out
}

/// Append the rendered rule for `class` to `out`.
pub fn write_style_class(out: &mut String, class: &StyleClass, class_names: &HashMap<String, String>) {
    if let Some(media) = class.media() {
        let _ = write!(out, "@media {}{{", media);
    }

    write_selector(out, class.selector(), class_names);
    out.push('{');
    for (name, value) in class.style_def().iter() {
        out.push_str(&render_declaration(name, value));
    }
    out.push('}');

    if class.media().is_some() {
        out.push('}');
    }
}

/// Render a selector header with class ids replaced by class names.
pub fn render_selector(selector: &ParsedSelector, class_names: &HashMap<String, String>) -> String {
    let mut out = String::new();
    write_selector(&mut out, selector, class_names);
    out
}

fn write_selector(out: &mut String, selector: &ParsedSelector, class_names: &HashMap<String, String>) {
    for segment in selector.segments() {
        if let Some(combinator) = segment.combinator {
            out.push_str(combinator.as_css());
        }

        let class_name = match class_names.get(&segment.class_id) {
            Some(name) => name.as_str(),
            None => {
                tracing::warn!(
                    target: targets::RENDER,
                    class_id = %segment.class_id,
                    "no class name resolved for class id, writing it unscoped"
                );
                segment.class_id.as_str()
            }
        };
        out.push('.');
        // names are arbitrary text; `a.b` must stay one class
        let _ = serialize_identifier(class_name, out);

        for pseudo in &segment.pseudos {
            let _ = write!(out, "{}", pseudo);
        }
    }
}

/// Render a sequence of style classes, in order, against one class-name table.
pub fn render_rules<'a>(
    classes: impl IntoIterator<Item = &'a StyleClass>,
    class_names: &HashMap<String, String>,
) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    for class in classes {
        write_style_class(&mut out, class, class_names);
        count += 1;
    }
    tracing::trace!(target: targets::RENDER, rules = count, "rendered rules");
    out
}
