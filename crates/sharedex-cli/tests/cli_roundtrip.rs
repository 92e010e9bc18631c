// crates/sharedex-cli/tests/cli_roundtrip.rs

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use sharedex_core::CardCatalog;
use tempfile::TempDir;

const RAW: &str = r#"[
  {"card_id": "A1-1"}, {"card_id": "A1-2"}, {"card_id": "A1-3"},
  {"card_id": "A2-1"}, {"card_id": "P-A-5"}
]"#;

fn sharedex() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sharedex"));
    cmd.env_remove("CARD_LIST_PATH").env_remove("RAW_CARD_DETAILS_PATH");
    cmd
}

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).trim().to_string()
}

fn build_catalog(dir: &Path) -> String {
    let raw = dir.join("raw.json");
    let list = dir.join("card_list.json");
    fs::write(&raw, RAW).expect("write raw");

    run_ok(sharedex().args([
        "catalog",
        "build",
        "--raw",
        raw.to_str().unwrap(),
        "--out",
        list.to_str().unwrap(),
    ]));
    list.to_str().unwrap().to_string()
}

#[test]
fn catalog_build_then_encode_decode() {
    let dir = TempDir::new().expect("tempdir");
    let list = build_catalog(dir.path());

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&list).unwrap()).unwrap();
    assert_eq!(written["1"], "A1-1");
    assert_eq!(written["8192"], "P-A-5");

    let out = run_ok(sharedex().args(["encode", "--catalog", &list, "A1-1", "A1-1", "A1-2"]));
    let token = stdout(&out);
    assert_eq!(token, "gAEAAg");

    let out = run_ok(sharedex().args(["decode", "--catalog", &list, &token]));
    let lines: Vec<String> = stdout(&out).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["2 A1-1", "1 A1-2"]);
}

#[test]
fn catalog_path_can_come_from_environment() {
    let dir = TempDir::new().expect("tempdir");
    let list = build_catalog(dir.path());

    let deck = dir.path().join("deck.txt");
    fs::write(&deck, "P-A-5\nP-A-5\nA2-1\n").unwrap();

    let out = run_ok(
        sharedex()
            .env("CARD_LIST_PATH", &list)
            .args(["encode", "--deck", deck.to_str().unwrap()]),
    );
    let token = stdout(&out);

    let out = run_ok(
        sharedex()
            .env("CARD_LIST_PATH", &list)
            .args(["decode", "--json", &token]),
    );
    let cards: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(cards[0]["cardId"], "P-A-5");
    assert_eq!(cards[0]["count"], 2);
    assert_eq!(cards[1]["cardId"], "A2-1");
}

#[test]
fn inspect_needs_no_catalog() {
    let out = run_ok(sharedex().args(["inspect", "gAEAAg"]));
    let text = stdout(&out);
    assert!(text.contains("0x8001"), "{text}");
    assert!(text.contains("0x0002"), "{text}");
}

#[test]
fn bad_inputs_exit_nonzero() {
    let dir = TempDir::new().expect("tempdir");
    let list = build_catalog(dir.path());

    let out = sharedex()
        .args(["encode", "--catalog", &list, "Z9-99"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown card"));

    let out = sharedex()
        .args(["decode", "--catalog", &list, "AAAA"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid token"));

    let out = sharedex()
        .args(["decode", "--catalog", &list, "--require-complete", "gAEAAg"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}

#[test]
fn catalog_info_reports_range_fingerprint_and_unencodable_ids() {
    let dir = TempDir::new().expect("tempdir");
    let list = dir.path().join("card_list.json");
    let json = r#"{"0": "A1-0", "1": "A1-1", "2": "A1-2", "40000": "X1-1"}"#;
    fs::write(&list, json).unwrap();

    let out = run_ok(sharedex().args(["catalog", "info", "--catalog", list.to_str().unwrap()]));
    let text = stdout(&out);
    let expected_fp = CardCatalog::from_json_map(json).unwrap().fingerprint();

    assert!(text.contains("entries      = 4"), "{text}");
    assert!(text.contains("id_range     = [0, 40000]"), "{text}");
    assert!(text.contains(&format!("fingerprint  = {expected_fp}")), "{text}");

    let err = String::from_utf8_lossy(&out.stderr);
    assert!(
        err.contains("WARNING: 2 card ids fall outside 1..=32767"),
        "{err}"
    );
}
