//! Filesystem side of a docset: directories, icon and documentation copy.

use super::layout;
use crate::error::{BuildError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

fn copy_error(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> BuildError {
    let path = path.to_path_buf();
    move |source| BuildError::Copy {
        action,
        path,
        source,
    }
}

/// Create `Contents/Resources/Documents/` under the docset root.
pub fn create_docset_structure(docset_root: &Path) -> Result<()> {
    let documents = layout::documents_dir(docset_root);
    fs::create_dir_all(&documents).map_err(copy_error("create directory", &documents))?;
    debug!("Created docset structure at {}", docset_root.display());
    Ok(())
}

/// Copy the icon into the bundle. No icon is embedded when `icon` is `None`.
pub fn copy_icon_file(icon: Option<&Path>, docset_root: &Path) -> Result<()> {
    let Some(icon) = icon else {
        debug!("No icon file specified");
        return Ok(());
    };

    fs::copy(icon, layout::icon_path(docset_root)).map_err(copy_error("copy icon file", icon))?;
    debug!("Copied icon file {}", icon.display());
    Ok(())
}

/// Copy the whole Javadoc tree into `Contents/Resources/Documents/`.
///
/// When the docset is being built inside the Javadoc tree, its own directory
/// is not copied. Returns the number of files copied.
pub fn copy_files(javadoc_root: &Path, docset_root: &Path) -> Result<usize> {
    let source_root = javadoc_root
        .canonicalize()
        .map_err(copy_error("read documentation tree", javadoc_root))?;
    let skip: Option<PathBuf> = docset_root.canonicalize().ok();
    let documents = layout::documents_dir(docset_root);

    let mut copied = 0;
    for entry in WalkDir::new(&source_root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| skip.as_deref().map_or(true, |skip| !e.path().starts_with(skip)))
    {
        let entry = entry.map_err(|e| BuildError::Copy {
            action: "read documentation tree",
            path: e.path().unwrap_or(source_root.as_path()).to_path_buf(),
            source: e.into(),
        })?;

        let Ok(relative) = entry.path().strip_prefix(&source_root) else {
            warn!("Skipping {} outside documentation root", entry.path().display());
            continue;
        };
        let target = documents.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(copy_error("create directory", &target))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(copy_error("copy documentation file", entry.path()))?;
            copied += 1;
        }
    }

    debug!("Copied {} documentation files", copied);
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_structure_and_copy() -> anyhow::Result<()> {
        let javadoc = tempdir()?;
        fs::write(javadoc.path().join("index-all.html"), "<html></html>")?;
        fs::create_dir_all(javadoc.path().join("com/example"))?;
        fs::write(javadoc.path().join("com/example/Foo.html"), "<html>Foo</html>")?;

        let out = tempdir()?;
        let root = out.path().join("Test.docset");
        create_docset_structure(&root)?;
        assert!(layout::documents_dir(&root).is_dir());

        let copied = copy_files(javadoc.path(), &root)?;
        assert_eq!(copied, 2);
        let documents = layout::documents_dir(&root);
        assert_eq!(
            fs::read_to_string(documents.join("com/example/Foo.html"))?,
            "<html>Foo</html>"
        );
        Ok(())
    }

    #[test]
    fn test_docset_inside_javadoc_tree_is_not_copied_into_itself() -> anyhow::Result<()> {
        let javadoc = tempdir()?;
        fs::write(javadoc.path().join("index-all.html"), "<html></html>")?;

        let root = javadoc.path().join("out").join("Test.docset");
        create_docset_structure(&root)?;

        let copied = copy_files(javadoc.path(), &root)?;
        assert_eq!(copied, 1);
        assert!(!layout::documents_dir(&root)
            .join("out/Test.docset/Contents")
            .exists());
        Ok(())
    }

    #[test]
    fn test_icon_copy() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let icon = dir.path().join("icon-source.png");
        fs::write(&icon, [0x89, b'P', b'N', b'G'])?;
        let root = dir.path().join("Test.docset");
        create_docset_structure(&root)?;

        copy_icon_file(None, &root)?;
        assert!(!layout::icon_path(&root).exists());

        copy_icon_file(Some(icon.as_path()), &root)?;
        assert_eq!(fs::read(layout::icon_path(&root))?, vec![0x89, b'P', b'N', b'G']);

        let missing = dir.path().join("missing.png");
        let err = copy_icon_file(Some(missing.as_path()), &root).unwrap_err();
        assert!(matches!(err, BuildError::Copy { .. }));
        Ok(())
    }
}
