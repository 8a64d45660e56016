//! `Info.plist` metadata writer.

use super::layout;
use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Values written to `Contents/Info.plist`.
#[derive(Debug, Clone)]
pub struct DocsetMetadata<'a> {
    /// `CFBundleIdentifier`
    pub identifier: &'a str,
    /// `CFBundleName`, shown in the documentation browser
    pub display_name: &'a str,
    /// `DocSetPlatformFamily`, the search keyword
    pub keyword: &'a str,
    /// `dashIndexFilePath`, relative to `Documents/`
    pub index_file: &'a str,
}

/// Render the property list.
pub fn render(meta: &DocsetMetadata<'_>) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>{}</string>
    <key>CFBundleName</key>
    <string>{}</string>
    <key>DocSetPlatformFamily</key>
    <string>{}</string>
    <key>dashIndexFilePath</key>
    <string>{}</string>
    <key>DashDocSetFamily</key>
    <string>java</string>
    <key>isDashDocset</key>
    <true/>
</dict>
</plist>
"#,
        escape(meta.identifier),
        escape(meta.display_name),
        escape(meta.keyword),
        escape(meta.index_file),
    )
}

/// Write `Contents/Info.plist`, replacing any existing file.
pub fn write_plist(meta: &DocsetMetadata<'_>, docset_root: &Path) -> Result<PathBuf> {
    let path = layout::plist_path(docset_root);
    std::fs::write(&path, render(meta)).map_err(|source| BuildError::Metadata {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(path)
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn meta<'a>(display_name: &'a str) -> DocsetMetadata<'a> {
        DocsetMetadata {
            identifier: "guava",
            display_name,
            keyword: "guava",
            index_file: "overview-summary.html",
        }
    }

    #[test]
    fn test_render_contains_keys() {
        let plist = render(&meta("Guava"));
        assert!(plist.contains("<key>CFBundleName</key>\n    <string>Guava</string>"));
        assert!(plist
            .contains("<key>dashIndexFilePath</key>\n    <string>overview-summary.html</string>"));
        assert!(plist.contains("<key>DocSetPlatformFamily</key>\n    <string>guava</string>"));
        assert!(plist.contains("<key>isDashDocset</key>\n    <true/>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let plist = render(&meta("Tom & Jerry <API>"));
        assert!(plist.contains("<string>Tom &amp; Jerry &lt;API&gt;</string>"));
    }

    #[test]
    fn test_write_plist() -> anyhow::Result<()> {
        let dir = tempdir()?;
        std::fs::create_dir_all(layout::contents_dir(dir.path()))?;

        let path = write_plist(&meta("Guava"), dir.path())?;
        assert_eq!(path, layout::plist_path(dir.path()));
        assert!(std::fs::read_to_string(path)?.contains("CFBundleIdentifier"));
        Ok(())
    }

    #[test]
    fn test_write_plist_without_structure_fails() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let err = write_plist(&meta("Guava"), &dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, BuildError::Metadata { .. }));
        Ok(())
    }
}
