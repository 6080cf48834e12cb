//! Tests for `gitreleases redirect`

use super::TestContext;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_redirect_latest() {
    let ctx = TestContext::new().await;
    ctx.mock_releases(
        "o",
        "r",
        json!([
            {"tag_name": "v2", "assets": []},
            {"tag_name": "v1", "assets": [{
                "name": "tool.zip",
                "browser_download_url": "https://github.com/o/r/releases/download/v1/tool.zip"
            }]}
        ]),
    )
    .await;

    ctx.gitreleases()
        .args(["redirect", "/gh/o/r/latest/tool.zip"])
        .assert()
        .success()
        .stdout("https://github.com/o/r/releases/download/v1/tool.zip\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_redirect_tagged_ziparchive() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/r/releases/tags/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tag_name": "v1",
            "zipball_url": "https://api.github.com/repos/o/r/zipball/v1",
            "tarball_url": "https://api.github.com/repos/o/r/tarball/v1",
            "assets": []
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    ctx.gitreleases()
        .args(["redirect", "/gh/o/r/v1/ziparchive"])
        .assert()
        .success()
        .stdout("https://api.github.com/repos/o/r/zipball/v1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_redirect_unknown_tag() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/r/releases/tags/v9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ctx.server)
        .await;

    ctx.gitreleases()
        .args(["redirect", "/gh/o/r/v9/tool.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Release v9 not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_redirect_invalid_path() {
    let ctx = TestContext::new().await;

    ctx.gitreleases()
        .args(["redirect", "/gh/o/r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid redirect path"));
}
