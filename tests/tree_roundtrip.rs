use std::fs;

use kitbag::{files, paths, text};
use tempfile::tempdir;

#[test]
fn copied_tree_lists_and_cleans_up_by_wildcard() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("site");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("index.html"), "<html>").unwrap();
    fs::write(src.join("style.css"), "body {}").unwrap();
    fs::create_dir(src.join("assets")).unwrap();
    fs::write(src.join("assets").join("logo.svg"), "<svg>").unwrap();

    let dst = dir.path().join("deploy");
    files::recursive_copy(&src, &dst).unwrap();

    let pattern = format!("{}/*.css", dst.display());
    let matches = files::list_matching(&pattern).unwrap();
    assert_eq!(matches.len(), 1);

    let listed = matches[0].to_string_lossy().to_string();
    assert_eq!(paths::file_name(&listed), "style.css");
    assert_eq!(paths::file_extension(&listed), "css");
    assert_eq!(paths::file_stem(&listed), "style");

    files::delete_matching(&pattern).unwrap();
    assert!(files::list_matching(&pattern).unwrap().is_empty());
    assert!(dst.join("index.html").exists());
    assert!(dst.join("assets").join("logo.svg").exists());
}

#[test]
fn path_helpers_compose_with_text_primitives() {
    let path = "/var/www/releases/app-2.4.1.tar.gz";

    assert_eq!(paths::file_name(path), text::part_after_last(path, "/"));
    assert_eq!(paths::file_directory(path), "/var/www/releases");
    assert_eq!(paths::file_extension(path), "gz");

    let dir = paths::normalize_directory(&paths::file_directory(path));
    assert!(dir.ends_with(std::path::MAIN_SEPARATOR));
}
