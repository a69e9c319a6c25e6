// crates/find_source_files/tests/integration_ts.rs

use assert_fs::prelude::*;
use find_source_files::{find_source_files, SuffixFilter};
use std::path::PathBuf;

#[test]
fn test_multiple_roots_keep_their_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("web/src/index.ts").write_str("export {};\n")?;
    temp.child("api/src/server.ts").write_str("export {};\n")?;

    let roots = vec![temp.path().join("web"), temp.path().join("api")];
    let discovery = find_source_files(&roots, &SuffixFilter::default());

    assert_eq!(
        discovery.files,
        vec![
            temp.path().join("web/src/index.ts"),
            temp.path().join("api/src/server.ts"),
        ]
    );
    temp.close()?;
    Ok(())
}

#[test]
fn test_declaration_and_foreign_files_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("src/app.tsx").touch()?;
    temp.child("src/env.d.ts").touch()?;
    temp.child("src/legacy.js").touch()?;
    temp.child("src/styles.css").touch()?;

    let discovery = find_source_files(&[temp.path().join("src")], &SuffixFilter::default());
    assert_eq!(discovery.files, vec![temp.path().join("src/app.tsx")]);
    Ok(())
}

#[test]
fn test_missing_root_does_not_hide_the_others() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("present/one.ts").touch()?;

    let missing: PathBuf = temp.path().join("absent");
    let roots = vec![missing.clone(), temp.path().join("present")];
    let discovery = find_source_files(&roots, &SuffixFilter::default());

    assert_eq!(discovery.missing_roots, vec![missing]);
    assert_eq!(discovery.files, vec![temp.path().join("present/one.ts")]);
    Ok(())
}

#[test]
#[cfg(unix)]
fn test_symlinked_directories_are_not_followed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("outside/secret.ts").touch()?;
    temp.child("src").create_dir_all()?;
    std::os::unix::fs::symlink(temp.path().join("outside"), temp.path().join("src/link"))?;

    let discovery = find_source_files(&[temp.path().join("src")], &SuffixFilter::default());
    assert!(discovery.files.is_empty());
    Ok(())
}
