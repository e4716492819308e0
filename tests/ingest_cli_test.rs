use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

const PASSPHRASE: &str = "Toto1001";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run pgp-ingest isolated from the caller's environment and config.
fn pgp_ingest(home: &assert_fs::TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("pgp-ingest");
    cmd.env_remove("PGP_INGEST_PASSPHRASE")
        .env_remove("PGP_INGEST_CONFIG")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn header_of_encrypted_file_prints_fields() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .success()
        .stdout("id\nname\n");
}

#[test]
fn header_as_json() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("header")
        .arg("--json")
        .arg(fixture("customers.csv.asc"))
        .assert()
        .success()
        .stdout("[\"id\",\"name\"]\n");
}

#[test]
fn buffered_mode_prints_the_same_header() {
    let home = assert_fs::TempDir::new().unwrap();

    for mode in ["buffered", "streaming"] {
        pgp_ingest(&home)
            .args(["--mode", mode, "--passphrase", PASSPHRASE, "--key"])
            .arg(fixture("k.priv"))
            .arg("header")
            .arg(fixture("customers.csv.gpg"))
            .assert()
            .success()
            .stdout("id\nname\n");
    }
}

#[test]
fn wrong_passphrase_fails_without_leaking_it() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", "wrong-secret")
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Decryption failed"))
        .stderr(predicate::str::contains("wrong-secret").not());
}

#[test]
fn binary_payload_is_rejected() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("header")
        .arg(fixture("binary.dat.gpg"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn plaintext_file_needs_no_key() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .arg("header")
        .arg(fixture("customers.csv"))
        .assert()
        .success()
        .stdout("id\nname\n");
}

#[test]
fn plaintext_suffix_wins_over_armored_content() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .arg("header")
        .arg(fixture("armored-but-plain.csv"))
        .assert()
        .success()
        .stdout("-----BEGIN PGP MESSAGE-----\n");
}

#[test]
fn encrypted_file_without_key_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no private key is configured"));
}

#[test]
fn encrypted_file_without_passphrase_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no passphrase is configured"));
}

#[test]
fn missing_key_file_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(home.path().join("absent.priv"))
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn missing_input_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .arg("header")
        .arg(home.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn invalid_delimiter_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .args(["--delimiter", ";;", "header"])
        .arg(fixture("customers.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));
}

#[test]
fn custom_delimiter_splits_fields() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .args(["--delimiter", ",", "--key"])
        .arg(fixture("k.priv"))
        .arg("header")
        .arg(fixture("unicode.csv.gpg"))
        .assert()
        .success()
        .stdout("code\ncittà\nprix €\n");
}

#[test]
fn config_file_supplies_key_and_passphrase_variable() {
    let home = assert_fs::TempDir::new().unwrap();
    let config = home.child("ingest.toml");
    config
        .write_str(&format!(
            "[key]\npath = {:?}\npassphrase_env = \"CUSTOMERS_PGP_PASS\"\n\n[input]\nmode = \"buffered\"\n",
            fixture("k.priv").display().to_string()
        ))
        .unwrap();

    pgp_ingest(&home)
        .env("CUSTOMERS_PGP_PASS", PASSPHRASE)
        .arg("--config")
        .arg(config.path())
        .arg("header")
        .arg(fixture("symmetric.csv.gpg"))
        .assert()
        .success()
        .stdout("id\nname\n");
}

#[test]
#[cfg(target_os = "linux")]
fn default_config_location_is_used() {
    let home = assert_fs::TempDir::new().unwrap();
    home.child(".config/pgp-ingest/config.toml")
        .write_str("[input]\nplaintext_suffix = \".gpg\"\n")
        .unwrap();

    // with ".gpg" as the plaintext suffix the ciphertext is read as-is
    pgp_ingest(&home)
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn decrypt_writes_plaintext_to_stdout() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("decrypt")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .success()
        .stdout("id;name\n1;Ann\n");
}

#[test]
fn decrypt_writes_plaintext_to_file() {
    let home = assert_fs::TempDir::new().unwrap();
    let dest = home.child("customers.csv");

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("decrypt")
        .arg(fixture("customers.csv.asc"))
        .arg("--output")
        .arg(dest.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Decrypted"));

    dest.assert("id;name\n1;Ann\n");
}

#[test]
fn decrypt_refuses_binary_payload() {
    let home = assert_fs::TempDir::new().unwrap();
    let dest = home.child("out.bin");

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .arg("decrypt")
        .arg(fixture("binary.dat.gpg"))
        .arg("-o")
        .arg(dest.path())
        .assert()
        .failure();

    dest.assert(predicate::path::missing());
}

#[test]
fn malformed_key_file_fails() {
    let home = assert_fs::TempDir::new().unwrap();

    pgp_ingest(&home)
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("two-keys.priv"))
        .arg("header")
        .arg(fixture("customers.csv.gpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid private key"));
}

#[test]
fn decrypt_refuses_to_overwrite_its_input() {
    let home = assert_fs::TempDir::new().unwrap();
    let input = home.child("customers.csv.gpg");
    input.write_file(&fixture("customers.csv.gpg")).unwrap();
    let original = std::fs::read(input.path()).unwrap();

    pgp_ingest(&home)
        .current_dir(home.path())
        .env("PGP_INGEST_PASSPHRASE", PASSPHRASE)
        .arg("--key")
        .arg(fixture("k.priv"))
        .args(["decrypt", "customers.csv.gpg", "-o", "./customers.csv.gpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must differ"));

    assert_eq!(std::fs::read(input.path()).unwrap(), original);
}
