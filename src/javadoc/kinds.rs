//! Cue → kind lookup tables.
//!
//! Javadoc describes each index entry in prose ("Static method in class
//! Foo", "Class in com.example"). Supporting another generator layout means
//! adding rows here, not changing the extractor.

use crate::model::SymbolKind;

/// Prefixes of the description that follows a link in a `<dt>`, matched
/// case-insensitively. No prefix in this table is a prefix of another.
pub const DESCRIPTION_CUES: &[(&str, SymbolKind)] = &[
    ("static method in", SymbolKind::Method),
    ("method in", SymbolKind::Method),
    ("constructor for", SymbolKind::Constructor),
    ("constructor in", SymbolKind::Constructor),
    ("static variable in", SymbolKind::Field),
    ("variable in", SymbolKind::Field),
    ("field in", SymbolKind::Field),
    ("enum constant in", SymbolKind::Constant),
    ("enum in", SymbolKind::Enum),
    ("enum class in", SymbolKind::Enum),
    ("exception in", SymbolKind::Exception),
    ("exception class in", SymbolKind::Exception),
    ("error in", SymbolKind::Error),
    ("annotation type in", SymbolKind::Annotation),
    ("annotation interface in", SymbolKind::Annotation),
    ("element in annotation", SymbolKind::Element),
    ("record class in", SymbolKind::Record),
    ("record in", SymbolKind::Record),
    ("interface in", SymbolKind::Interface),
    ("class in", SymbolKind::Class),
    ("package", SymbolKind::Package),
    ("module", SymbolKind::Module),
];

/// Values of the `class` attribute on the symbol link itself.
pub const LINK_CLASS_CUES: &[(&str, SymbolKind)] = &[
    ("type-name-link", SymbolKind::Class),
    ("typeNameLink", SymbolKind::Class),
];

/// Look up a description ("- Static method in class Foo") or link title
/// ("class in com.example").
pub fn kind_from_description(text: &str) -> Option<SymbolKind> {
    let text = text
        .trim_start()
        .trim_start_matches(['-', '\u{2013}', '\u{2014}'])
        .trim_start()
        .to_lowercase();
    DESCRIPTION_CUES
        .iter()
        .find(|(cue, _)| text.starts_with(cue))
        .map(|(_, kind)| *kind)
}

/// Look up the space-separated classes of a link element.
pub fn kind_from_link_classes<'a>(
    mut classes: impl Iterator<Item = &'a str>,
) -> Option<SymbolKind> {
    classes.find_map(|class| {
        LINK_CLASS_CUES
            .iter()
            .find(|(cue, _)| *cue == class)
            .map(|(_, kind)| *kind)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_cues() {
        let cases = [
            (" - Class in com.example", SymbolKind::Class),
            ("- Static method in class com.example.Foo", SymbolKind::Method),
            ("- Method in interface com.example.Bar", SymbolKind::Method),
            ("- Constructor for class com.example.Foo", SymbolKind::Constructor),
            ("- Static variable in class com.example.Foo", SymbolKind::Field),
            ("- Variable in class com.example.Foo", SymbolKind::Field),
            ("- Enum constant in enum com.example.Color", SymbolKind::Constant),
            ("- Enum in com.example", SymbolKind::Enum),
            ("- Enum Class in com.example", SymbolKind::Enum),
            ("- Exception in com.example", SymbolKind::Exception),
            ("- Error in com.example", SymbolKind::Error),
            ("- Annotation Type in com.example", SymbolKind::Annotation),
            ("- Annotation Interface in com.example", SymbolKind::Annotation),
            ("- Element in annotation type com.example.Marker", SymbolKind::Element),
            ("- Record Class in com.example", SymbolKind::Record),
            ("- Interface in com.example", SymbolKind::Interface),
            ("- package com.example", SymbolKind::Package),
            ("- Package com.example", SymbolKind::Package),
            ("- module java.base", SymbolKind::Module),
        ];
        for (text, expected) in cases {
            assert_eq!(kind_from_description(text), Some(expected), "{}", text);
        }
    }

    #[test]
    fn test_title_attribute_uses_same_table() {
        assert_eq!(
            kind_from_description("interface in com.example"),
            Some(SymbolKind::Interface)
        );
        assert_eq!(kind_from_description("class in com.example"), Some(SymbolKind::Class));
    }

    #[test]
    fn test_unknown_description() {
        assert_eq!(kind_from_description("- Search tag in Overview"), None);
        assert_eq!(kind_from_description(""), None);
    }

    #[test]
    fn test_link_class_cues() {
        assert_eq!(
            kind_from_link_classes("type-name-link extra".split_whitespace()),
            Some(SymbolKind::Class)
        );
        assert_eq!(kind_from_link_classes("member-name-link".split_whitespace()), None);
    }
}
