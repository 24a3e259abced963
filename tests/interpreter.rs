use std::{fs, path::PathBuf, process::Command as Process};

use lazytree::prelude::*;

const SCRIPT: &str = "\
Insert:50
Insert:30
Insert:70
Insert:20
Delete:50
Contains:50
FindMin
FindMax
Size
Height
PrintTree
Insert:150
Foo:5
Insert:50
Size
";

const EXPECTED: [&str; 15] = [
    "True",
    "True",
    "True",
    "True",
    "True",
    "False",
    "20",
    "70",
    "4",
    "3",
    "*50 30 20 70 ",
    "Error in insert: IllegalArgumentException raised",
    "Error in Line: Foo:5",
    "True",
    "4",
];

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lazytree-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_interpreter_on_buffers() {
    let mut interpreter = Interpreter::new();
    let mut output = Vec::new();

    let stats = interpreter.run(SCRIPT.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), EXPECTED);
    assert_eq!(stats, Stats { lines: 15, errors: 2 });
    assert_eq!(interpreter.tree().serialize(), "50 30 20 70 ");
}

#[test]
fn test_binary_truncates_existing_output() {
    let dir = scratch_dir("truncate");
    let input = dir.join("input.txt");
    let output = dir.join("output.txt");

    fs::write(&input, SCRIPT).unwrap();
    fs::write(&output, "stale contents\n".repeat(100)).unwrap();

    let status = Process::new(env!("CARGO_BIN_EXE_lazytree"))
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().collect::<Vec<_>>(), EXPECTED);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_binary_fails_on_missing_input() {
    let dir = scratch_dir("missing");
    let output = dir.join("output.txt");

    let status = Process::new(env!("CARGO_BIN_EXE_lazytree"))
        .arg(dir.join("does-not-exist.txt"))
        .arg(&output)
        .status()
        .unwrap();

    assert!(!status.success());
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_binary_requires_two_paths() {
    let status = Process::new(env!("CARGO_BIN_EXE_lazytree"))
        .arg("only-one.txt")
        .status()
        .unwrap();

    assert!(!status.success());
}
