//! Tests for parameter sets and the merge rule

use trello::api::Credentials;
use trello::Params;

#[test]
fn later_sources_win() {
    let merged = Params::merge([
        Params::new().set("name", "first").set("desc", "kept"),
        Params::new().set("name", "second"),
    ]);

    assert_eq!(merged.get("name"), Some("second"));
    assert_eq!(merged.get("desc"), Some("kept"));
    assert_eq!(merged.len(), 2);
}

#[test]
fn caller_key_overrides_auth_key() {
    let auth = Credentials::new("auth-key", "auth-token").params();
    let merged = Params::merge([auth, Params::new().set("key", "caller-key")]);

    assert_eq!(merged.get("key"), Some("caller-key"));
    assert_eq!(merged.get("token"), Some("auth-token"));
}

#[test]
fn empty_optional_values_are_omitted() {
    let params = Params::new()
        .opt("desc", Some(""))
        .opt("pos", None::<String>)
        .opt("due", Some("2024-12-31"));

    assert!(!params.contains("desc"));
    assert!(!params.contains("pos"));
    assert_eq!(params.get("due"), Some("2024-12-31"));
}

#[test]
fn clear_survives_a_merge_with_an_omitted_optional() {
    let merged = Params::merge([Params::new().clear("due"), Params::new().opt("due", Some(""))]);
    assert_eq!(merged.get("due"), Some(""));
}

#[test]
fn merge_of_nothing_is_empty() {
    assert!(Params::merge(Vec::<Params>::new()).is_empty());
}

#[test]
fn collects_from_pairs() {
    let params: Params = [("fields", "name"), ("filter", "open")].into_iter().collect();
    let pairs: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(pairs, vec![("fields", "name"), ("filter", "open")]);
}
