//! Class-file bytes and binary invocation for CLI tests.

use std::path::Path;
use std::process::{Command, Output};

pub const ACC_PUBLIC: u16 = 0x0001;

/// A class with one `void run()` method and no attributes.
pub fn class_bytes(name: &str, super_name: &str) -> Vec<u8> {
    let mut pool = Vec::new();
    for s in [name, super_name] {
        pool.push(utf8(s));
    }
    // 1: name, 2: super name, 3: Class(1), 4: Class(2)
    pool.push(vec![7, 0, 1]);
    pool.push(vec![7, 0, 2]);
    pool.push(utf8("run"));
    pool.push(utf8("()V"));

    let mut out = Vec::new();
    out.extend_from_slice(&0xCAFE_BABEu32.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&52u16.to_be_bytes());
    out.extend_from_slice(&(pool.len() as u16 + 1).to_be_bytes());
    for e in &pool {
        out.extend_from_slice(e);
    }
    out.extend_from_slice(&ACC_PUBLIC.to_be_bytes());
    out.extend_from_slice(&3u16.to_be_bytes());
    out.extend_from_slice(&4u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes()); // interfaces
    out.extend_from_slice(&0u16.to_be_bytes()); // fields
    out.extend_from_slice(&1u16.to_be_bytes()); // methods
    out.extend_from_slice(&ACC_PUBLIC.to_be_bytes());
    out.extend_from_slice(&5u16.to_be_bytes());
    out.extend_from_slice(&6u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes()); // class attributes
    out
}

fn utf8(s: &str) -> Vec<u8> {
    let mut e = vec![1u8];
    e.extend_from_slice(&(s.len() as u16).to_be_bytes());
    e.extend_from_slice(s.as_bytes());
    e
}

pub fn jstub(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jstub"))
        .args(args)
        .output()
        .expect("failed to run jstub")
}

/// Every file named `name` under `dir`, recursively.
pub fn find_files(dir: &Path, name: &str) -> Vec<std::path::PathBuf> {
    let mut found = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return found;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            found.extend(find_files(&path, name));
        } else if path.file_name().is_some_and(|n| n == name) {
            found.push(path);
        }
    }
    found
}
