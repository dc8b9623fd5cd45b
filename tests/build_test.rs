use anyhow::Result;
use demo_app::core::build;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_build_mirrors_tree_and_skips_other_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let src = temp_dir.path().join("src");
    let dist = temp_dir.path().join("dist");

    fs::create_dir_all(src.join("core"))?;
    fs::create_dir_all(src.join("assets"))?;
    fs::write(src.join("main.rs"), "fn main() {}")?;
    fs::write(src.join("core/array.rs"), "pub fn unique() {}")?;
    fs::write(src.join("assets/logo.svg"), "<svg/>")?;

    let report = build::build(&src, &dist, "rs")?;

    assert_eq!(report.copied, vec!["core/array.rs", "main.rs"]);
    assert_eq!(fs::read_to_string(dist.join("main.rs"))?, "fn main() {}");
    // 目錄仍會建立，即使其中沒有符合的檔案
    assert!(dist.join("assets").is_dir());
    assert!(!dist.join("assets/logo.svg").exists());
    Ok(())
}

#[test]
fn test_build_twice_overwrites_existing_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let src = temp_dir.path().join("src");
    let dist = temp_dir.path().join("dist");
    fs::create_dir_all(src.join("nested"))?;
    fs::write(src.join("nested/lib.rs"), "v1")?;

    let first = build::build(&src, &dist, "rs")?;
    fs::write(src.join("nested/lib.rs"), "v2")?;
    let second = build::build(&src, &dist, "rs")?;

    assert_eq!(first.directories_created, 1);
    assert_eq!(second.directories_created, 0);
    assert_eq!(fs::read_to_string(dist.join("nested/lib.rs"))?, "v2");
    Ok(())
}
