//! Auth lifecycle tests: setup → status → API call → logout

use super::*;

fn me_payload() -> &'static str {
    r#"{"id":"m1","fullName":"Ada Lovelace","username":"ada"}"#
}

#[test]
fn status_without_credentials() {
    let temp = TempDir::new().unwrap();

    let output = trello(temp.path()).args(["auth", "status"]).output().unwrap();

    assert!(output.status.success());
    let status = stdout_json(&output);
    assert_eq!(status["authenticated"], false);
    assert!(status["config"].as_str().unwrap().ends_with("config.json"));
}

#[test]
fn status_prefers_env_vars() {
    let temp = TempDir::new().unwrap();

    let output = trello(temp.path())
        .env("TRELLO_API_KEY", KEY)
        .env("TRELLO_API_TOKEN", TOKEN)
        .args(["auth", "status"])
        .output()
        .unwrap();

    let status = stdout_json(&output);
    assert_eq!(status["authenticated"], true);
    assert_eq!(status["source"], "env vars");
    assert_eq!(status["api_key"], "inte...0001");
}

#[test]
fn setup_rejects_short_key_without_calling_the_api() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::once(200, me_payload());

    trello(temp.path())
        .env("TRELLO_API_URL", server.base_url())
        .args(["auth", "setup", "short", TOKEN])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: API key looks too short"));

    assert!(server.requests().is_empty());
    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn setup_with_rejected_credentials_saves_nothing() {
    let temp = TempDir::new().unwrap();
    let server = MockServer::once(401, "invalid key");

    trello(temp.path())
        .env("TRELLO_API_URL", server.base_url())
        .args(["auth", "setup", KEY, TOKEN])
        .assert()
        .failure()
        .stderr("Error: credentials validation failed: HTTP 401: invalid key\n");

    assert!(!temp.path().join("config.json").exists());
}

#[test]
fn setup_then_use_then_logout() {
    let temp = TempDir::new().unwrap();
    let config_file = temp.path().join("config.json");

    // Step 1: setup validates against the API and saves the profile
    let server = MockServer::once(200, me_payload());
    let output = trello(temp.path())
        .env("TRELLO_API_URL", server.base_url())
        .args(["auth", "setup", KEY, TOKEN])
        .output()
        .unwrap();

    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["username"], "ada");
    assert_eq!(server.single_request().path(), "/1/members/me");

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&config_file).unwrap()).unwrap();
    assert_eq!(saved["api_key"], KEY);
    assert_eq!(saved["api_token"], TOKEN);
    assert_eq!(saved["member_id"], "m1");

    // Step 2: status reports the config file as the source
    let output = trello(temp.path()).args(["auth", "status"]).output().unwrap();
    let status = stdout_json(&output);
    assert_eq!(status["source"], "config file");
    assert_eq!(status["username"], "ada");

    // Step 3: API commands use the saved credentials
    let server = MockServer::once(200, "[]");
    trello(temp.path())
        .env("TRELLO_API_URL", server.base_url())
        .args(["boards", "labels", "b1"])
        .assert()
        .success()
        .stdout("[]\n");
    assert_eq!(server.single_request().param("key").as_deref(), Some(KEY));

    // Step 4: logout removes the file
    trello(temp.path())
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"removed\":true"));
    assert!(!config_file.exists());

    trello(temp.path())
        .args(["boards", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: not authenticated"));
}

#[test]
fn logout_without_saved_credentials_succeeds() {
    let temp = TempDir::new().unwrap();
    trello(temp.path()).args(["auth", "logout"]).assert().success();
}

#[test]
fn corrupt_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), "{ not json").unwrap();

    trello(temp.path())
        .args(["boards", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: failed to load config: parsing "));
}

#[test]
fn env_vars_bypass_a_corrupt_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.json"), "{ not json").unwrap();
    let server = MockServer::once(200, "[]");

    trello_at(temp.path(), server.base_url())
        .args(["boards", "list"])
        .assert()
        .success()
        .stdout("[]\n");
}
