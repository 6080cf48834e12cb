//! Tests for `gitreleases config`

use super::TestContext;
use predicates::prelude::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_config_show_defaults_with_env_override() {
    let ctx = TestContext::new().await;

    ctx.gitreleases()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ctx.server.uri()))
        .stdout(predicate::str::contains("include_source_archives: false"));

    assert!(!ctx.config_path().exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_show_rejects_invalid_file() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.config_path(), "soft_empty: [1, 2]\n").unwrap();

    ctx.gitreleases()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
