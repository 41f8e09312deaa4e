use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use appcipher_core::{AppCipher, EncryptionAlgorithm, MemorySecretStore};
use tempfile::TempDir;

const KEY: &str = "testKey123";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_appcipher"))
}

/// Isolated config home with the keychain disabled so tests never touch the
/// real OS keychain.
fn config_home() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_config_file(dir.path(), false);
    dir
}

fn write_config_file(config_home: &Path, keychain_enabled: bool) {
    let config_dir = config_home.join("appcipher");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    let contents = format!(
        "[cipher]\nalgorithm = \"aes256_gcm\"\n\n[keychain]\nenabled = {}\n\n[logging]\nlevel = \"warn\"\n",
        keychain_enabled
    );
    std::fs::write(config_dir.join("config.toml"), contents).expect("write config");
}

fn command(config_home: &Path, key: Option<&str>) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("APPCIPHER_CONFIG")
        .env_remove("APPCIPHER_KEY")
        .env_remove("APPCIPHER_LOG")
        .stdin(Stdio::null());
    if let Some(key) = key {
        cmd.env("APPCIPHER_KEY", key);
    }
    cmd
}

fn run(config_home: &Path, key: Option<&str>, args: &[&str]) -> Output {
    command(config_home, key)
        .args(args)
        .output()
        .expect("run appcipher")
}

fn run_with_stdin(config_home: &Path, key: Option<&str>, args: &[&str], input: &str) -> Output {
    let mut child = command(config_home, key)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn appcipher");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait appcipher")
}

fn stdout_line(output: &Output) -> String {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone())
        .expect("utf8 stdout")
        .trim_end_matches('\n')
        .to_string()
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let home = config_home();
    let envelope = stdout_line(&run(home.path(), Some(KEY), &["encrypt", "Hello, World!"]));
    assert!(!envelope.is_empty());
    assert_ne!(envelope, "Hello, World!");

    let decrypted = stdout_line(&run(home.path(), Some(KEY), &["decrypt", &envelope]));
    assert_eq!(decrypted, "Hello, World!");
}

#[test]
fn test_encrypt_reads_stdin() {
    let home = config_home();
    let output = run_with_stdin(home.path(), Some(KEY), &["encrypt"], "piped text\n");
    let envelope = stdout_line(&output);

    let output = run_with_stdin(home.path(), Some(KEY), &["decrypt"], &format!("{}\n", envelope));
    assert_eq!(stdout_line(&output), "piped text");
}

#[test]
fn test_wrong_key_exits_auth_failed() {
    let home = config_home();
    let envelope = stdout_line(&run(home.path(), Some(KEY), &["encrypt", "secret"]));

    let output = run(home.path(), Some("wrongKey456"), &["decrypt", &envelope]);
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication failed"));
}

#[test]
fn test_invalid_base64_exits_invalid_input() {
    let home = config_home();
    let output = run(home.path(), Some(KEY), &["decrypt", "invalid_base64!@#"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_short_envelope_exits_invalid_input() {
    let home = config_home();
    // 27 bytes once decoded
    let output = run(
        home.path(),
        Some(KEY),
        &["decrypt", "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"],
    );
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_split_roundtrip() {
    let home = config_home();
    let packed = stdout_line(&run(
        home.path(),
        Some(KEY),
        &["encrypt", "--split", "split form"],
    ));

    let decrypted = stdout_line(&run(
        home.path(),
        Some(KEY),
        &["decrypt", "--split", &packed],
    ));
    assert_eq!(decrypted, "split form");

    // The packed split form is not a combined envelope
    let output = run(home.path(), Some(KEY), &["decrypt", &packed]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_split_json_output() {
    let home = config_home();
    let output = stdout_line(&run(
        home.path(),
        Some(KEY),
        &["encrypt", "--split", "--json", "abc"],
    ));
    let value: serde_json::Value = serde_json::from_str(&output).expect("json output");
    assert_eq!(value["algorithm"], "aes256_gcm");
    // 12 raw bytes encode to 16 base64 characters
    assert_eq!(value["iv"].as_str().expect("iv").len(), 16);
    // 3 plaintext bytes plus a 16 byte tag
    assert_eq!(value["combined"].as_str().expect("combined").len(), 28);

    let packed = value["packed"].as_str().expect("packed");
    let decrypted = stdout_line(&run(
        home.path(),
        Some(KEY),
        &["decrypt", "--split", packed],
    ));
    assert_eq!(decrypted, "abc");
}

#[test]
fn test_verify_flag_succeeds() {
    let home = config_home();
    let output = run(home.path(), Some(KEY), &["encrypt", "--verify", "check me"]);
    assert!(output.status.success());

    let output = run(
        home.path(),
        Some(KEY),
        &["encrypt", "--verify", "--split", "check me"],
    );
    assert!(output.status.success());
}

#[test]
fn test_decrypts_library_envelope() {
    let home = config_home();
    let cipher = AppCipher::new(MemorySecretStore::new());
    let envelope = cipher
        .encrypt(EncryptionAlgorithm::Aes256Gcm, KEY, "from the library")
        .expect("encrypt");

    let decrypted = stdout_line(&run(home.path(), Some(KEY), &["decrypt", &envelope]));
    assert_eq!(decrypted, "from the library");
}

#[test]
fn test_encrypt_map_roundtrip() {
    let home = config_home();
    let envelope = stdout_line(&run(
        home.path(),
        Some(KEY),
        &["encrypt-map", "name=Ada", " role =engineer", "token=a=b"],
    ));

    let decrypted = stdout_line(&run(home.path(), Some(KEY), &["decrypt", &envelope]));
    let value: serde_json::Value = serde_json::from_str(&decrypted).expect("json plaintext");
    assert_eq!(
        value,
        serde_json::json!({ "name": "Ada", "role": "engineer", "token": "a=b" })
    );
}

#[test]
fn test_encrypt_map_rejects_blank_keys() {
    let home = config_home();
    let output = run(home.path(), Some(KEY), &["encrypt-map", " =value"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run(home.path(), Some(KEY), &["encrypt-map", "missing-separator"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_no_key_non_interactive_exits_not_found() {
    let home = config_home();
    let output = run(home.path(), None, &["encrypt", "--no-input", "text"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("APPCIPHER_KEY"));
}

#[test]
fn test_init_writes_config() {
    let home = tempfile::tempdir().expect("create temp dir");
    let output = run(home.path(), None, &["init", "--no-keychain"]);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = home.path().join("appcipher").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    assert!(contents.contains("enabled = false"));
    assert!(contents.contains("aes256_gcm"));

    let output = run(home.path(), None, &["init"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run(home.path(), None, &["init", "--force", "--no-keychain"]);
    assert!(output.status.success());
}

#[test]
fn test_config_env_override() {
    let home = tempfile::tempdir().expect("create temp dir");
    let custom = home.path().join("custom.toml");
    std::fs::write(&custom, "[keychain]\nenabled = false\n").expect("write config");

    let output = command(home.path(), None)
        .env("APPCIPHER_CONFIG", &custom)
        .args(["encrypt", "--no-input", "text"])
        .output()
        .expect("run appcipher");
    // Keychain disabled by the custom file, so nothing else can supply a key
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_invalid_config_reports_error() {
    let home = tempfile::tempdir().expect("create temp dir");
    let config_dir = home.path().join("appcipher");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(config_dir.join("config.toml"), "[cipher]\nalgorithm = \"rot13\"\n")
        .expect("write config");

    let output = run(home.path(), Some(KEY), &["encrypt", "text"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config"));
}

#[test]
fn test_completions() {
    let home = config_home();
    let output = run(home.path(), None, &["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("appcipher"));
}
