use arp_runner::scaffold::{ensure_env_file, ENV_TEMPLATE};
use tempfile::tempdir;

#[test]
fn creates_template_once() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".env");

    assert!(ensure_env_file(&path).expect("first create"));
    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, ENV_TEMPLATE);

    let placeholders = written
        .lines()
        .filter(|line| line.starts_with("# ") && line.contains('='))
        .count();
    assert_eq!(placeholders, 3);
}

#[test]
fn existing_file_is_left_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(".env");
    std::fs::write(&path, "WOLFRAM_APP_ID=real-key\n").expect("seed");

    assert!(!ensure_env_file(&path).expect("idempotent create"));
    let kept = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(kept, "WOLFRAM_APP_ID=real-key\n");
}

#[test]
fn env_template_snapshot() {
    insta::assert_snapshot!(ENV_TEMPLATE);
}
