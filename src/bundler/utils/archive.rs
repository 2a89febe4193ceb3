//! Zip archive helpers.
//!
//! Jars are zip files, so the same code unpacks the project artifact and
//! archives generated outputs. All work runs on the blocking pool.

use crate::bundler::error::{Error, Result};
use std::{
    fs::File,
    io,
    path::{Component, Path},
};
use zip::{CompressionMethod, ZipArchive, ZipWriter, write::SimpleFileOptions};

/// Extracts every entry of `archive` into `dest`.
///
/// Entries whose names escape `dest` are rejected.
pub async fn extract(archive: &Path, dest: &Path) -> Result<()> {
    let archive = archive.to_path_buf();
    let dest = dest.to_path_buf();

    tokio::task::spawn_blocking(move || extract_blocking(&archive, &dest))
        .await
        .map_err(|e| Error::GenericError(format!("Archive extraction task panicked: {}", e)))?
}

fn extract_blocking(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive).map_err(|error| Error::Fs {
        context: "opening archive",
        path: archive.to_path_buf(),
        error,
    })?;
    let mut zip = ZipArchive::new(file)?;

    std::fs::create_dir_all(dest)?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let rel_path = entry.enclosed_name().ok_or_else(|| {
            Error::GenericError(format!(
                "Invalid entry path '{}' in {}",
                entry.name(),
                archive.display()
            ))
        })?;
        let out_path = dest.join(rel_path);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}

/// Archives the contents of `src_dir` into `dest`.
///
/// With `root` set, every entry is placed under that top-level directory
/// (e.g. `MyApp.app/Contents/...`); otherwise the directory's contents sit at
/// the archive root.
pub async fn zip_dir(src_dir: &Path, dest: &Path, root: Option<&str>) -> io::Result<()> {
    let src_dir = src_dir.to_path_buf();
    let dest = dest.to_path_buf();
    let root = root.map(str::to_string);

    tokio::task::spawn_blocking(move || zip_dir_blocking(&src_dir, &dest, root.as_deref()))
        .await
        .map_err(|e| io::Error::other(format!("Archive task panicked: {}", e)))?
}

fn zip_dir_blocking(src_dir: &Path, dest: &Path, root: Option<&str>) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = ZipWriter::new(File::create(dest)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries: Vec<_> = walkdir::WalkDir::new(src_dir)
        .follow_links(false)
        .into_iter()
        .collect::<std::result::Result<_, _>>()?;
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    for entry in entries {
        let rel_path = entry
            .path()
            .strip_prefix(src_dir)
            .map_err(io::Error::other)?;
        let name = entry_name(root, rel_path);
        if name.is_empty() {
            continue;
        }

        if entry.file_type().is_dir() {
            writer
                .add_directory(format!("{name}/"), options)
                .map_err(io::Error::other)?;
        } else {
            writer.start_file(name, options).map_err(io::Error::other)?;
            let mut file = File::open(entry.path())?;
            io::copy(&mut file, &mut writer)?;
        }
    }

    writer.finish().map_err(io::Error::other)?;
    Ok(())
}

/// Archive entry name with forward slashes.
fn entry_name(root: Option<&str>, rel_path: &Path) -> String {
    let mut parts: Vec<String> = root.map(|r| vec![r.to_string()]).unwrap_or_default();
    parts.extend(rel_path.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    }));
    parts.join("/")
}

/// Lists entry names of an archive, in archive order.
pub fn entry_names(archive: &Path) -> Result<Vec<String>> {
    let file = File::open(archive)?;
    let zip = ZipArchive::new(file)?;
    Ok(zip.file_names().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree(root: &Path) {
        std::fs::create_dir_all(root.join("Contents/MacOS")).unwrap();
        std::fs::write(root.join("Contents/Info.plist"), b"<plist/>").unwrap();
        std::fs::write(root.join("Contents/MacOS/app"), b"bin").unwrap();
    }

    #[tokio::test]
    async fn zip_with_root_keeps_single_top_level_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let app = tmp.path().join("MyApp.app");
        sample_tree(&app);
        let zip = tmp.path().join("out.zip");

        zip_dir(&app, &zip, Some("MyApp.app")).await.unwrap();

        let names = entry_names(&zip).unwrap();
        assert!(names.iter().all(|n| n.starts_with("MyApp.app/")));
        assert!(names.contains(&"MyApp.app/Contents/Info.plist".to_string()));
    }

    #[tokio::test]
    async fn zip_without_root_places_contents_at_top() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("jnlp");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("app.jnlp"), b"<jnlp/>").unwrap();
        std::fs::write(dir.join("app.html"), b"<html/>").unwrap();
        let zip = tmp.path().join("jnlp.zip");

        zip_dir(&dir, &zip, None).await.unwrap();

        let mut names = entry_names(&zip).unwrap();
        names.sort();
        assert_eq!(names, ["app.html", "app.jnlp"]);
    }

    #[tokio::test]
    async fn extract_restores_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        sample_tree(&src);
        let zip = tmp.path().join("a.jar");
        zip_dir(&src, &zip, None).await.unwrap();

        let out = tmp.path().join("out");
        extract(&zip, &out).await.unwrap();

        assert_eq!(
            std::fs::read(out.join("Contents/MacOS/app")).unwrap(),
            b"bin"
        );
    }

    #[tokio::test]
    async fn extract_missing_archive_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = extract(&tmp.path().join("none.jar"), tmp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
    }
}
