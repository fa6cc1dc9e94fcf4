#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn token_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write token");
    file
}

fn vidz_share() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vidz-share"));
    cmd.env_remove("VITE_API_URL")
        .env_remove("VIDZ_USER_ID")
        .env_remove("VIDZ_TOKEN")
        .env_remove("VIDZ_TOKEN_FILE")
        .env_remove("VIDZ_CONFIG_FILE")
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn share_creates_post_and_leaves_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/tags");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":2,"name":"sets"},{"id":5,"name":"logic"}]"#);
    });
    let create = server.mock(|when, then| {
        when.method("POST")
            .path("/posts")
            .header("authorization", "Bearer cli-token")
            .json_body(json!({
                "title": "Intro to Sets",
                "video_url": "https://example.com/v1",
                "description": "x".repeat(200),
                "user_id": 42,
                "instructor_name": "A. Turing",
                "tags": [2, 5],
            }));
        then.status(201).body("{}");
    });

    let token = token_file("cli-token\n");
    let description = "x".repeat(260);
    let assert = vidz_share()
        .env("VITE_API_URL", server.base_url())
        .env("VIDZ_USER_ID", "42")
        .env("VIDZ_TOKEN_FILE", token.path())
        .args(["--redirect-delay-ms", "0", "share"])
        .args(["--title", "Intro to Sets"])
        .args(["--video-url", "https://example.com/v1"])
        .args(["--description", description.as_str()])
        .args(["--instructor-name", "A. Turing"])
        .args(["--tag", "2", "--tag", "5"])
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("Post created successfully!"));
    assert!(output.contains("navigated to /watch-vidz"));
    create.assert();
}

#[test]
fn share_reports_generic_failure() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST").path("/posts");
        then.status(500).body("oops");
    });

    let token = token_file("cli-token");
    vidz_share()
        .env("VITE_API_URL", server.base_url())
        .env("VIDZ_USER_ID", "42")
        .env("VIDZ_TOKEN_FILE", token.path())
        .args(["share", "--title", "T", "--video-url", "V", "--instructor-name", "I"])
        .assert()
        .failure()
        .stdout(contains(
            "There was an error creating your post. Please try again.",
        ))
        .stderr(contains("NotCreated"))
        .stderr(contains("error creating post"));
    create.assert();
}

#[test]
fn share_without_token_asks_for_login() {
    let server = MockServer::start();
    vidz_share()
        .env("VITE_API_URL", server.base_url())
        .env("VIDZ_USER_ID", "42")
        .args(["share", "--title", "T", "--video-url", "V", "--instructor-name", "I"])
        .assert()
        .failure()
        .stdout(contains("You must be logged in to create a post."))
        .stderr(contains("NotLoggedIn"));
}

#[test]
fn share_without_user_redirects_to_login() {
    let server = MockServer::start();
    vidz_share()
        .env("VITE_API_URL", server.base_url())
        .args(["share", "--title", "T"])
        .assert()
        .failure()
        .stderr(contains("Redirected"));
}

#[test]
fn missing_api_url_fails_fast() {
    vidz_share()
        .arg("tags")
        .assert()
        .failure()
        .stderr(contains("api.base_url"));
}
