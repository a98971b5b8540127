use std::fs;
use std::path::PathBuf;

pub fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("fixture '{}' should be readable", path.display()))
}
