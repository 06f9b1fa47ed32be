use std::path::Path;

use profman::profile::naming::profile_dir;
use profman::profile::{DEFAULT_PROFILE_ID, resolve_collision, sanitize_profile_id};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn collision_appends_first_free_suffix() {
    assert_eq!(resolve_collision("Main", &ids(&["Main", "Main1"])), "Main2");
}

#[test]
fn collision_keeps_free_base() {
    assert_eq!(resolve_collision("Work", &ids(&["Main"])), "Work");
}

#[test]
fn collision_skips_gaps_only_when_taken() {
    assert_eq!(resolve_collision("Main", &ids(&["Main", "Main2"])), "Main1");
}

#[test]
fn sanitize_drops_illegal_characters() {
    assert_eq!(sanitize_profile_id("  Work/Stuff?  "), "WorkStuff");
    assert_eq!(sanitize_profile_id("a<b>c:d\"e|f*g\\h"), "abcdefgh");
    assert_eq!(sanitize_profile_id("tab\tname"), "tabname");
}

#[test]
fn sanitize_rejects_unusable_names() {
    assert_eq!(sanitize_profile_id(""), "");
    assert_eq!(sanitize_profile_id("///"), "");
    assert_eq!(sanitize_profile_id(".."), "");
    assert_eq!(sanitize_profile_id("..."), "");
    assert_eq!(sanitize_profile_id("con"), "");
    assert_eq!(sanitize_profile_id("LPT1.txt"), "");
}

#[test]
fn sanitize_strips_trailing_dots_and_spaces() {
    assert_eq!(sanitize_profile_id("Work. . "), "Work");
}

#[test]
fn sanitize_truncates_on_char_boundary() {
    let long = "é".repeat(200);
    let sanitized = sanitize_profile_id(&long);
    assert!(sanitized.len() <= 255);
    assert_eq!(sanitized.chars().count(), 127);
}

#[test]
fn default_id_is_main() {
    assert_eq!(DEFAULT_PROFILE_ID, "Main");
}

#[test]
fn profile_dir_only_accepts_plain_components() {
    let root = Path::new("/profiles");
    assert_eq!(profile_dir(root, "Main"), Some(root.join("Main")));
    assert_eq!(profile_dir(root, ""), None);
    assert_eq!(profile_dir(root, ".."), None);
    assert_eq!(profile_dir(root, "../etc"), None);
    assert_eq!(profile_dir(root, "a/b"), None);
    assert_eq!(profile_dir(root, "/abs"), None);
}
