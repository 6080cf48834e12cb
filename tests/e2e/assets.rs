//! Tests for `gitreleases assets`

use super::TestContext;
use predicates::prelude::*;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_skips_release_without_assets() {
    let ctx = TestContext::new().await;
    ctx.mock_releases(
        "rokka-io",
        "rokka-go",
        json!([
            {"tag_name": "v2", "assets": []},
            {"tag_name": "v1", "assets": [{"name": "tool_linux_amd64"}]}
        ]),
    )
    .await;

    ctx.gitreleases()
        .args(["assets", "https://github.com/rokka-io/rokka-go"])
        .assert()
        .success()
        .stdout("gitreleases.dev/gh/rokka-io/rokka-go/latest/tool_linux_amd64\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_with_archives() {
    let ctx = TestContext::new().await;
    ctx.mock_releases("o", "r", json!([{"assets": [{"name": "tool.zip"}]}]))
        .await;

    ctx.gitreleases()
        .args(["assets", "o/r", "--archives"])
        .assert()
        .success()
        .stdout(
            "gitreleases.dev/gh/o/r/latest/tool.zip\n\
             gitreleases.dev/gh/o/r/latest/ziparchive\n\
             gitreleases.dev/gh/o/r/latest/targzarchive\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_archives_from_config() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.config_path(), "include_source_archives: true\n").unwrap();
    ctx.mock_releases("o", "r", json!([{"assets": [{"name": "tool.zip"}]}]))
        .await;

    ctx.gitreleases()
        .args(["assets", "o/r"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latest/targzarchive"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_json_output() {
    let ctx = TestContext::new().await;
    ctx.mock_releases("o", "r", json!([{"assets": [{"name": "a"}]}]))
        .await;

    let output = ctx
        .gitreleases()
        .args(["assets", "o/r", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!([{"label": "gitreleases.dev/gh/o/r/latest/a", "path": "/gh/o/r/latest/a"}])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_no_releases() {
    let ctx = TestContext::new().await;
    ctx.mock_releases("o", "r", json!([])).await;

    ctx.gitreleases()
        .args(["assets", "o/r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No release found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_no_qualifying_release() {
    let ctx = TestContext::new().await;
    ctx.mock_releases("o", "r", json!([{"assets": []}, {"assets": null}]))
        .await;

    ctx.gitreleases()
        .args(["assets", "o/r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No asset found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_soft_empty() {
    let ctx = TestContext::new().await;
    ctx.mock_releases("o", "r", json!([{"assets": []}])).await;

    ctx.gitreleases()
        .args(["assets", "o/r", "--soft-empty"])
        .assert()
        .success()
        .stdout("");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_not_found() {
    let ctx = TestContext::new().await;
    ctx.mock_status("o", "missing", 404).await;

    ctx.gitreleases()
        .args(["assets", "o/missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Repository or organization not found",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_rate_limited() {
    let ctx = TestContext::new().await;
    ctx.mock_status("o", "r", 403).await;

    ctx.gitreleases()
        .args(["assets", "o/r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeded the hourly rate limit"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_assets_rejects_malformed_url() {
    let ctx = TestContext::new().await;

    ctx.gitreleases()
        .args(["assets", "not-a-repository"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL incorrect"));
}
