//! End-to-end scenarios composing the helpers
//!
//! Each flow mirrors how the checker uses them: write an output file, hash
//! it, clean up; normalize output directories; edit result mappings; shell out.

use funceble_helpers::{
    Command, Dict, File, Hash, HashOutput, HelperConfig, Value, logging,
};
use funceble_test_utils::dir::TestDir;
use pretty_assertions::assert_eq;
use serde_json::json;

const FILE_NAME: &str = "this_file_should_be_deleted";
const DATA: [&str; 2] = ["Hello World!", "Thanks for using PyFunceble"];

#[test]
fn test_write_hash_delete() {
    let _ = logging::init();
    let dir = TestDir::new();
    let path = dir.path(FILE_NAME);
    dir.assert_file_not_exists(FILE_NAME);

    File::new(&path).write(&DATA.join("\n"), false).unwrap();
    dir.assert_file_exists(FILE_NAME);

    assert_eq!(
        Hash::new(&path).hash_data("md5").unwrap(),
        "ba2e0e1774c2e60e2327f263402facd4"
    );

    File::new(&path).delete().unwrap();
    dir.assert_file_not_exists(FILE_NAME);
    assert_eq!(Hash::new(&path).get().unwrap(), None);
}

#[test]
fn test_appended_writes_hash_like_single_write() {
    let dir = TestDir::new();
    let joined = dir.path("joined");
    let appended = dir.path("appended");

    File::new(&joined).write(&DATA.join("\n"), false).unwrap();
    let file = File::new(&appended);
    file.write(DATA[0], false).unwrap();
    file.write("\n", false).unwrap();
    file.write(DATA[1], false).unwrap();

    let all = |path: &std::path::PathBuf| Hash::with_algorithm(path, "all").unwrap().get().unwrap();
    assert_eq!(all(&joined), all(&appended));
}

#[test]
fn test_all_digests_have_expected_shape() {
    let dir = TestDir::new();
    let path = dir.write(FILE_NAME, "some output");

    let Some(HashOutput::Table(table)) = Hash::with_algorithm(&path, "all").unwrap().get().unwrap()
    else {
        panic!("expected a digest table");
    };

    let keys: Vec<&str> = table.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["md5", "sha1", "sha224", "sha384", "sha512"]);
    for (algo, len) in [("md5", 32), ("sha1", 40), ("sha224", 56), ("sha384", 96), ("sha512", 128)] {
        let hex = &table[algo];
        assert_eq!(hex.len(), len, "{algo}");
        assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "{algo}");
    }
}

#[test]
fn test_output_directory_then_file() {
    let dir = TestDir::new();
    let config = HelperConfig::default();

    let output = dir.root().join(config.directory("\\output/").fix_path());
    std::fs::create_dir(&output).unwrap();

    let file = File::new(output.join("results.txt"));
    file.write("example.org ACTIVE\n", false).unwrap();

    dir.assert_file_contains("output/results.txt", "example.org ACTIVE");
}

#[test]
fn test_result_mapping_cleanup() {
    let dict = Dict::new(json!({
        "tested": "example.org",
        "http_status_code": 200,
        "whois": {"expiration_date": "2030-01-01", "raw": "..."},
        "nslookup": [{"raw": "...", "A": ["93.184.216.34"]}]
    }));

    let cleaned = Dict::new(dict.remove_key("raw").unwrap())
        .rename_key(&json!({"http_status_code": "status_code"}).into(), true)
        .unwrap();

    assert_eq!(
        serde_json::Value::from(Value::Mapping(cleaned)),
        json!({
            "tested": "example.org",
            "status_code": 200,
            "whois": {"expiration_date": "2030-01-01"},
            "nslookup": [{"A": ["93.184.216.34"]}]
        })
    );
}

#[cfg(unix)]
#[test]
fn test_command_writes_file_read_back() {
    let dir = TestDir::new();

    let stdout = Command::new("printf 'from shell' > out.txt && echo done")
        .current_dir(dir.root())
        .execute()
        .unwrap();

    assert_eq!(stdout, "done\n");
    assert_eq!(File::new(dir.path("out.txt")).read().unwrap(), "from shell");
    tracing::info!("command scenario finished");
}
