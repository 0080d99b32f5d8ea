//! Load an XML config from disk and build a pool from it.

use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use tempfiles::{Files, LogLevel, TempFiles, load_config_from_xml};

#[test]
fn reads_config_xml_and_builds_pool() {
    let td = tempdir().expect("create tempdir");
    let cfg_path = td.path().join("tempfiles.xml");
    let parent = td.path().join("scratch");
    fs::create_dir_all(&parent).unwrap();
    let log_file = td.path().join("tempfiles.log");

    let xml = format!(
        r#"
<tempfiles>
  <parent_dir>{}</parent_dir>
  <prefix>from-xml-</prefix>
  <seed>1234</seed>
  <log_level>info</log_level>
  <log_file>{}</log_file>
</tempfiles>
"#,
        parent.display(),
        log_file.display()
    );
    fs::write(&cfg_path, xml).expect("write config");

    let cfg = load_config_from_xml(&cfg_path).expect("load config");
    assert_eq!(cfg.parent_dir.as_deref(), Some(parent.as_path()));
    assert_eq!(cfg.prefix.as_deref(), Some("from-xml-"));
    assert_eq!(cfg.seed, Some(1234));
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(log_file));
    cfg.validate().expect("config should validate");

    let mut pool = Files::from_config(&cfg).expect("build pool");
    let root: PathBuf = pool.root_dir().to_path_buf();
    assert!(root.starts_with(&parent));
    assert!(root.file_name().unwrap().to_string_lossy().starts_with("from-xml-"));

    // Same seed, same first name.
    let mut twin = Files::from_config(&cfg).expect("build twin");
    let a = pool.allocate().unwrap();
    let b = twin.allocate().unwrap();
    assert_eq!(a.file_name(), b.file_name());

    pool.destroy().unwrap();
    twin.destroy().unwrap();
    assert!(!root.exists());
}

#[test]
fn missing_file_is_an_error() {
    let td = tempdir().unwrap();
    let err = load_config_from_xml(&td.path().join("absent.xml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn malformed_xml_names_the_file() {
    let td = tempdir().unwrap();
    let p = td.path().join("bad.xml");
    fs::write(&p, "<tempfiles><prefix>oops</tempfiles>").unwrap();
    let err = load_config_from_xml(&p).unwrap_err();
    assert!(format!("{err:#}").contains("bad.xml"));
}
