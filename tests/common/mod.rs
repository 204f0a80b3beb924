use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tagconv_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagconv").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
