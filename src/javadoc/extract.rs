//! Symbol extraction from Javadoc index pages.
//!
//! Each documented symbol appears as a `<dt>` whose first element is the
//! link to it (possibly wrapped in `<span>`, `<b>`, `<code>`...), followed by
//! a short description used to classify it:
//!
//! ```html
//! <dt><a href="../com/example/Foo.html#bar()">bar()</a>
//!     - Method in class com.example.<a href="../com/example/Foo.html">Foo</a></dt>
//! ```

use super::kinds;
use crate::error::ExtractFailure;
use crate::model::{IndexFile, SymbolKind, SymbolRecord};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Elements that may wrap the symbol link without changing its meaning.
const DECORATIVE_TAGS: &[&str] = &["span", "code", "b", "i", "em", "strong"];

/// How far into a page a `<meta>` charset declaration is looked for.
const CHARSET_SNIFF_LEN: usize = 1024;

/// What to do with repeated (name, kind, path) entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    Keep,
    Drop,
}

/// Extract the symbols of every index page, in the order given.
///
/// Pages that cannot be read from disk are skipped with a warning. Fails when
/// no page could be read or when no symbol was found at all.
pub fn find_search_index_values(
    files: &[IndexFile],
    policy: DuplicatePolicy,
) -> Result<Vec<SymbolRecord>, ExtractFailure> {
    let mut records = Vec::new();
    let mut parsed = 0;

    for file in files {
        let html = match read_page(&file.path) {
            Ok(html) => html,
            Err(e) => {
                warn!("Skipping unreadable index file {}: {}", file.path.display(), e);
                continue;
            }
        };
        parsed += 1;

        let found = extract_symbols(&html, &file.relative);
        debug!("Found {} symbols in {}", found.len(), file.relative);
        records.extend(found);
    }

    if parsed == 0 {
        return Err(ExtractFailure::NoParseableFiles(files.len()));
    }
    if records.is_empty() {
        return Err(ExtractFailure::NoSymbolsFound(files.len()));
    }

    if policy == DuplicatePolicy::Drop {
        let before = records.len();
        let mut seen = HashSet::new();
        records.retain(|record| seen.insert(record.clone()));
        debug!("Dropped {} duplicate symbols", before - records.len());
    }

    Ok(records)
}

/// Read an index page and decode it to text.
///
/// Older Javadoc writes pages in the platform encoding, so the encoding is
/// taken from a byte order mark, then from the page's `<meta>` charset, then
/// UTF-8 when the bytes are valid UTF-8, and windows-1252 otherwise.
/// Undecodable bytes become U+FFFD.
pub fn read_page(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let encoding = Encoding::for_bom(&bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| declared_charset(&bytes))
        .unwrap_or_else(|| match std::str::from_utf8(&bytes) {
            Ok(_) => UTF_8,
            Err(_) => WINDOWS_1252,
        });

    let (text, actual, had_errors) = encoding.decode(&bytes);
    if had_errors {
        warn!("Replaced undecodable {} bytes in {}", actual.name(), path.display());
    }
    Ok(text.into_owned())
}

/// Encoding named by `<meta charset=..>` or `content="text/html; charset=.."`.
fn declared_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(CHARSET_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();

    let mut rest = head.as_str();
    while let Some(idx) = rest.find("<meta") {
        rest = &rest[idx + "<meta".len()..];
        let tag = &rest[..rest.find('>').unwrap_or(rest.len())];
        let Some(idx) = tag.find("charset=") else {
            continue;
        };
        let label = tag[idx + "charset=".len()..]
            .trim_start_matches(['"', '\''])
            .split(|c: char| matches!(c, '"' | '\'' | ';' | '/' | '>') || c.is_whitespace())
            .next()
            .unwrap_or_default();
        if let Some(encoding) = Encoding::for_label(label.as_bytes()) {
            return Some(encoding.output_encoding());
        }
    }
    None
}

/// Extract symbols from one index page in document order.
///
/// `relative_file` is the page's path relative to the documentation root;
/// link targets are resolved against it.
pub fn extract_symbols(html: &str, relative_file: &str) -> Vec<SymbolRecord> {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "dt")
        .filter_map(|dt| symbol_from_entry(dt, relative_file))
        .collect()
}

fn symbol_from_entry(dt: ElementRef<'_>, relative_file: &str) -> Option<SymbolRecord> {
    let chain = link_chain(dt)?;
    let (&wrapper, &link) = (chain.first()?, chain.last()?);

    let href = link.value().attr("href")?;
    let Some(path) = resolve_href(relative_file, href) else {
        warn!("Ignoring link target {:?} in {}", href, relative_file);
        return None;
    };
    let name = normalize_name(&link.text().collect::<String>());

    let kind = classify(wrapper, link, &chain).unwrap_or_else(|| {
        warn!("No kind cue for {:?}, using {}", name, SymbolKind::DEFAULT);
        SymbolKind::DEFAULT
    });

    SymbolRecord::new(name, kind, path)
}

/// Elements from the `<dt>`'s first child down to the symbol link.
fn link_chain(dt: ElementRef<'_>) -> Option<Vec<ElementRef<'_>>> {
    let mut chain = Vec::new();
    let mut current = first_element_child(dt)?;
    loop {
        chain.push(current);
        match current.value().name() {
            "a" => return Some(chain),
            name if DECORATIVE_TAGS.contains(&name) => current = first_element_child(current)?,
            _ => return None,
        }
    }
}

fn first_element_child(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.children().find_map(ElementRef::wrap)
}

fn classify(
    wrapper: ElementRef<'_>,
    link: ElementRef<'_>,
    chain: &[ElementRef<'_>],
) -> Option<SymbolKind> {
    let description = description_after(wrapper);
    kinds::kind_from_description(&description)
        .or_else(|| link.value().attr("title").and_then(kinds::kind_from_description))
        .or_else(|| {
            chain
                .iter()
                .find_map(|element| kinds::kind_from_link_classes(element.value().classes()))
        })
}

/// Text of everything following the link wrapper inside the `<dt>`.
fn description_after(wrapper: ElementRef<'_>) -> String {
    let mut description = String::new();
    for sibling in wrapper.next_siblings() {
        if let Some(text) = sibling.value().as_text() {
            description.push_str(text);
        } else if let Some(element) = ElementRef::wrap(sibling) {
            description.extend(element.text());
        }
    }
    description
}

/// Collapse whitespace and drop a trailing parameter list: `bar(int)` -> `bar`.
pub fn normalize_name(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.find('(') {
        Some(idx) => collapsed[..idx].trim_end().to_string(),
        None => collapsed,
    }
}

/// Resolve a link target against the page it appears on.
///
/// Returns a root-relative, `/`-separated path with the fragment preserved,
/// or `None` for external links and targets outside the documentation root.
pub fn resolve_href(relative_file: &str, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || has_scheme(href) {
        return None;
    }

    let (target, fragment) = match href.split_once('#') {
        Some((target, fragment)) => (target, Some(fragment).filter(|f| !f.is_empty())),
        None => (href, None),
    };

    let mut segments: Vec<&str> = Vec::new();
    if target.is_empty() {
        segments.extend(relative_file.split('/').filter(|s| !s.is_empty()));
    } else {
        if !target.starts_with('/') {
            if let Some((dir, _)) = relative_file.rsplit_once('/') {
                segments.extend(dir.split('/').filter(|s| !s.is_empty()));
            }
        }
        for segment in target.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                segment => segments.push(segment),
            }
        }
    }

    if segments.is_empty() {
        return None;
    }
    let mut path = segments.join("/");
    if let Some(fragment) = fragment {
        path.push('#');
        path.push_str(fragment);
    }
    Some(path)
}

/// `http:`, `mailto:`, `javascript:` and friends.
fn has_scheme(href: &str) -> bool {
    match href.find(':') {
        Some(idx) => {
            let scheme = &href[..idx];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
