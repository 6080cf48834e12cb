use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod assets;
pub mod config;
pub mod redirect;

/// Isolated environment: a temp config file and a mock GitHub API
pub struct TestContext {
    pub temp: TempDir,
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
            server: MockServer::start().await,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.yaml")
    }

    /// Command for running gitreleases against the mock API
    pub fn gitreleases(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gitreleases").unwrap();
        cmd.current_dir(self.temp.path())
            .env("GITRELEASES_API_URL", self.server.uri())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    /// Serve `body` as the release feed of `owner/repo`
    pub async fn mock_releases(&self, owner: &str, repo: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/releases", owner, repo)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_status(&self, owner: &str, repo: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/{}/releases", owner, repo)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
