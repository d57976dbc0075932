//! Integration tests for meshcheck-cli.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.toml")
}

/// A `meshcheck` command isolated from the user's config and environment.
fn meshcheck(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meshcheck").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("domain"))
        .stdout(predicate::str::contains("product"))
        .stdout(predicate::str::contains("--catalog"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn numeric_no_color_env_is_accepted() {
    let home = TempDir::new().unwrap();
    for value in ["1", "yes", "true"] {
        meshcheck(&home)
            .env("NO_COLOR", value)
            .arg("--catalog")
            .arg(fixture())
            .args(["domain", "Sales"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("Result: PASSED"));
    }
}

#[test]
fn falsey_no_color_env_still_runs() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .env("NO_COLOR", "0")
        .arg("--catalog")
        .arg(fixture())
        .args(["domain", "Sales"])
        .assert()
        .code(0);
}

#[test]
fn valid_product_passes() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .args(["product", "Sales", "Sales Orders"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Data product report: Sales Orders"))
        .stdout(predicate::str::contains("\u{2713} data_product_tags: [finance]"))
        .stdout(predicate::str::contains("Result: PASSED"));
}

#[test]
fn valid_domain_passes() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .args(["domain", "Sales"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Domain report: Sales"))
        .stdout(predicate::str::contains(
            "\u{2713} domain_schema_location: s3://starburst/sales_data",
        ));
}

#[test]
fn json_format_is_parseable() {
    let home = TempDir::new().unwrap();
    let assert = meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .args(["--format", "json", "product", "Sales", "Sales Orders"])
        .assert()
        .code(0);

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["report"]["domain_name"], "Sales");
}

#[test]
fn products_cover_the_whole_domain() {
    let home = TempDir::new().unwrap();
    let assert = meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .args(["--format", "json", "products", "Sales"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Sales Returns"))
        .stderr(predicate::str::contains("materialized views"));

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[1]["valid"], false);
    assert!(reports[1]["report"]["data_product_datasets"].is_null());
}

#[test]
fn report_is_written_to_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("report.txt");

    meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .arg("--output")
        .arg(&out)
        .args(["product", "Sales", "Sales Orders"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Report written to"));

    let written = std::fs::read_to_string(out).unwrap();
    assert!(written.contains("Result: PASSED"));
}

#[test]
fn snapshot_path_from_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("meshcheck.toml");
    std::fs::write(
        &config,
        format!(
            "[catalog]\nsnapshot_path = {:?}\n",
            fixture().display().to_string()
        ),
    )
    .unwrap();

    meshcheck(&home)
        .arg("--config")
        .arg(&config)
        .args(["domain", "Sales"])
        .assert()
        .code(0);
}

#[test]
fn allow_list_from_environment() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .env("MESHCHECK__VALIDATION__VALID_CATALOGS", "lakehouse,warehouse")
        .arg("--catalog")
        .arg(fixture())
        .args(["product", "Sales", "Sales Orders"])
        .assert()
        .code(5)
        .stdout(predicate::str::contains(
            "\u{2717} data_product_catalog_name: minio",
        ));
}

#[test]
fn config_get_reads_environment() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .env("MESHCHECK__OUTPUT__FORMAT", "json")
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = json"));
}

#[test]
fn config_list_shows_defaults() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("minio_robin"));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    meshcheck(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("meshcheck"));
}

#[test]
fn domain_without_products_is_an_empty_json_array() {
    let home = TempDir::new().unwrap();
    let assert = meshcheck(&home)
        .arg("--catalog")
        .arg(fixture())
        .args(["--format", "json", "products", "marketing"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("has no data products"));

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json, serde_json::json!([]));
}
