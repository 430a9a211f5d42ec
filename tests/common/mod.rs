use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

// Same encoder the unit tests use
#[allow(dead_code)]
#[path = "../../src/font/fixtures.rs"]
mod fixtures;

use fixtures::{cmap_table, head_table, name_table, SfntBuilder};

pub fn cmd() -> Command {
    cargo_bin_cmd!("font-integrity")
}

/// A temporary font directory with one valid and two corrupted fonts
pub struct FontDir {
    tmp: TempDir,
}

impl FontDir {
    pub fn new() -> Self {
        let dir = Self {
            tmp: TempDir::new().expect("create temp dir"),
        };
        dir.write("Good.otf", &font(&["head", "name", "cmap"], 0x5F0F3CF5));
        dir.write("nested/NoCmap.otf", &font(&["head", "name"], 0x5F0F3CF5));
        dir.write("Tiny.otf", &[0u8; 64]);
        dir.write("readme.txt", b"not a font");
        dir
    }

    pub fn empty() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.tmp.path()
    }

    pub fn join(&self, rel: &str) -> PathBuf {
        self.tmp.path().join(rel)
    }

    pub fn write(&self, rel: &str, data: &[u8]) {
        let path = self.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, data).expect("write fixture");
    }
}

/// A minimal sfnt with the given tables, padded to 4 KiB
pub fn font(tags: &[&str], magic: u32) -> Vec<u8> {
    let mut builder = SfntBuilder::new().min_len(4096);
    for tag in tags {
        builder = match *tag {
            "head" => builder.table(b"head", head_table(magic)),
            "name" => builder.table(b"name", name_table(&[(1, "Fixture Sans")])),
            _ => builder.table(b"cmap", cmap_table()),
        };
    }
    builder.build()
}
