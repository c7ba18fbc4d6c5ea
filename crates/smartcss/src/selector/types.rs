//! Selector type definitions.

use std::fmt;

/// Combinator between two selector segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Descendant combinator (space): matches any descendant.
    Descendant,
    /// Child combinator (>): matches direct child only.
    Child,
    /// Adjacent sibling (+): matches immediately following sibling.
    AdjacentSibling,
    /// General sibling (~): matches any following sibling.
    GeneralSibling,
}

impl Combinator {
    /// The compact form written into generated stylesheets.
    pub fn as_css(&self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::AdjacentSibling => "+",
            Combinator::GeneralSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::Descendant => write!(f, " "),
            Combinator::Child => write!(f, " > "),
            Combinator::AdjacentSibling => write!(f, " + "),
            Combinator::GeneralSibling => write!(f, " ~ "),
        }
    }
}

/// Whether a pseudo selector is a pseudo-class (`:`) or a pseudo-element (`::`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoKind {
    /// `:hover`, `:nth-child(2)`.
    Class,
    /// `::before`, `::first-line`.
    Element,
}

impl PseudoKind {
    /// The prefix written before the pseudo name.
    pub fn prefix(&self) -> &'static str {
        match self {
            PseudoKind::Class => ":",
            PseudoKind::Element => "::",
        }
    }
}

/// A pseudo-class or pseudo-element attached to a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pseudo {
    /// Class or element.
    pub kind: PseudoKind,
    /// Name without the leading colons.
    pub name: String,
    /// Raw argument of a functional pseudo (`27` in `:nth-child(27)`).
    pub value: Option<String>,
}

impl Pseudo {
    /// Create a pseudo-class without an argument.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            kind: PseudoKind::Class,
            name: name.into(),
            value: None,
        }
    }

    /// Create a pseudo-element without an argument.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            kind: PseudoKind::Element,
            name: name.into(),
            value: None,
        }
    }

    /// Attach a functional argument.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for Pseudo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "({})", value)?;
        }
        Ok(())
    }
}

/// One segment as produced by a [`SelectorParser`](super::SelectorParser).
///
/// Unlike [`SelectorSegment`], a raw segment may name zero or several
/// classes; the registry decides whether that is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawSegment {
    /// Class names in source order.
    pub class_list: Vec<String>,
    /// Combinator linking this segment to the previous one (None for the first).
    pub combinator: Option<Combinator>,
    /// Pseudo selectors in source order.
    pub pseudos: Vec<Pseudo>,
}

impl RawSegment {
    /// Check whether nothing has been collected into this segment yet.
    pub fn is_empty(&self) -> bool {
        self.class_list.is_empty() && self.pseudos.is_empty()
    }
}

/// One comma-separated alternative: an ancestor chain of raw segments.
pub type RawSelector = Vec<RawSegment>;

/// A single `.class[:pseudo...]` unit of a validated ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorSegment {
    /// The semantic class id this segment refers to.
    pub class_id: String,
    /// Combinator linking this segment to the previous one (None for the first).
    pub combinator: Option<Combinator>,
    /// Pseudo selectors in source order.
    pub pseudos: Vec<Pseudo>,
}

impl SelectorSegment {
    /// Create a segment without pseudos.
    pub fn new(class_id: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            combinator: None,
            pseudos: vec![],
        }
    }

    /// Add a pseudo selector.
    pub fn with_pseudo(mut self, pseudo: Pseudo) -> Self {
        self.pseudos.push(pseudo);
        self
    }
}

impl fmt::Display for SelectorSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.class_id)?;
        for pseudo in &self.pseudos {
            write!(f, "{}", pseudo)?;
        }
        Ok(())
    }
}

/// A validated selector: a non-empty ancestor chain where every segment
/// names exactly one class id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedSelector {
    segments: Vec<SelectorSegment>,
}

impl ParsedSelector {
    /// Create a selector from a single segment.
    pub fn new(subject: SelectorSegment) -> Self {
        Self {
            segments: vec![SelectorSegment {
                combinator: None,
                ..subject
            }],
        }
    }

    /// Append a segment linked by `combinator`.
    pub fn then(mut self, combinator: Combinator, mut segment: SelectorSegment) -> Self {
        segment.combinator = Some(combinator);
        self.segments.push(segment);
        self
    }

    /// Build a selector from segments, returning `None` when empty.
    pub fn from_segments(mut segments: Vec<SelectorSegment>) -> Option<Self> {
        let first = segments.first_mut()?;
        first.combinator = None;
        Some(Self { segments })
    }

    /// The segments from outermost ancestor to subject.
    pub fn segments(&self) -> &[SelectorSegment] {
        &self.segments
    }

    /// The segments that must already be registered.
    pub fn ancestors(&self) -> &[SelectorSegment] {
        &self.segments[..self.segments.len() - 1]
    }

    /// The rightmost segment, whose class id the rule is registered under.
    pub fn subject(&self) -> &SelectorSegment {
        // never empty: both constructors guarantee at least one segment
        &self.segments[self.segments.len() - 1]
    }
}

impl fmt::Display for ParsedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            if let Some(combinator) = &segment.combinator {
                write!(f, "{}", combinator)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display() {
        let sel = ParsedSelector::new(SelectorSegment::new("a").with_pseudo(Pseudo::class("hover")))
            .then(Combinator::Descendant, SelectorSegment::new("b"));
        assert_eq!(sel.to_string(), ".a:hover .b");

        let sel = ParsedSelector::new(SelectorSegment::new("list"))
            .then(Combinator::Child, SelectorSegment::new("item"));
        assert_eq!(sel.to_string(), ".list > .item");
    }

    #[test]
    fn pseudo_display() {
        assert_eq!(Pseudo::element("first-line").to_string(), "::first-line");
        assert_eq!(Pseudo::class("nth-child").with_value("2n+1").to_string(), ":nth-child(2n+1)");
    }

    #[test]
    fn subject_and_ancestors() {
        let sel = ParsedSelector::new(SelectorSegment::new("a"))
            .then(Combinator::Child, SelectorSegment::new("b"))
            .then(Combinator::AdjacentSibling, SelectorSegment::new("c"));

        assert_eq!(sel.subject().class_id, "c");
        let ancestors: Vec<_> = sel.ancestors().iter().map(|s| s.class_id.as_str()).collect();
        assert_eq!(ancestors, ["a", "b"]);
    }

    #[test]
    fn from_segments_drops_leading_combinator() {
        let mut first = SelectorSegment::new("a");
        first.combinator = Some(Combinator::Child);
        let sel = ParsedSelector::from_segments(vec![first]).unwrap();
        assert_eq!(sel.segments()[0].combinator, None);

        assert!(ParsedSelector::from_segments(vec![]).is_none());
    }
}
