use std::io::Write;

use crtsh_core::error::ConfigErrorKind;
use crtsh_core::{ErrorKind, SeedData, ShellContext};

fn seed_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

#[test]
fn loads_seed_from_disk() {
    let file = seed_file(
        r#"{
          "filesystem": {
            "type": "DIR", "name": "root",
            "children": {
              "motd": {"type": "FILE", "name": "motd", "content": "hello", "readOnly": true},
              "vault": {"type": "DIR", "name": "vault", "children": {}}
            }
          },
          "contacts": [
            {"id": "X-1", "name": "Tester", "role": "QA", "status": "ONLINE", "clearance": "III"}
          ]
        }"#,
    );
    let seed = SeedData::from_file(file.path()).unwrap();
    let ctx = ShellContext::from_seed(seed, "guest").unwrap();
    let motd = ctx.filesystem().resolve(&["root", "motd"]).unwrap();
    assert!(motd.as_file().unwrap().read_only);
    assert_eq!(ctx.contacts()[0].role, "QA");
}

#[test]
fn mismatched_key_is_rejected() {
    let file = seed_file(
        r#"{"filesystem": {"type": "DIR", "name": "root",
            "children": {"a": {"type": "FILE", "name": "b", "content": ""}}}}"#,
    );
    let seed = SeedData::from_file(file.path()).unwrap();
    let err = ShellContext::from_seed(seed, "guest").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Config(ConfigErrorKind::InvalidSeed));
}

#[test]
fn root_must_be_named_root() {
    let file = seed_file(r#"{"filesystem": {"type": "DIR", "name": "home", "children": {}}}"#);
    let seed = SeedData::from_file(file.path()).unwrap();
    assert!(seed.into_parts().is_err());
}

#[test]
fn missing_file_carries_path_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = SeedData::from_file(&path).unwrap_err();
    assert_eq!(err.context.get("path").map(String::as_str), path.to_str());
}
