use regex::Regex;
use scraper::ElementRef;

/// Visible text of an element with runs of whitespace collapsed. Text nodes
/// are joined with a space so adjacent inline elements stay separated.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether any individual class of `element` matches `pattern`.
pub fn class_matches(element: ElementRef<'_>, pattern: &Regex) -> bool {
    element.value().classes().any(|class| pattern.is_match(class))
}

/// Attribute value with surrounding whitespace removed; blank values count
/// as missing.
pub fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
