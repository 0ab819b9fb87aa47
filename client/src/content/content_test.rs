use super::*;

fn project_json(id: &str, title: &str, url: &str) -> String {
    format!(
        r#"{{"id":"{id}","title":"{title}","description":"d","url":"{url}","iconName":"Cpu","status":"live"}}"#
    )
}

// =============================================================
// bundled content
// =============================================================

#[test]
fn bundled_projects_parse_and_validate() {
    let parsed = parse_projects(PROJECTS_JSON).expect("bundled projects");
    assert!(parsed.len() > crate::state::pagination::PAGE_SIZE, "bundle should span more than one page");
    assert_eq!(projects(), parsed.as_slice());
}

#[test]
fn bundled_social_directory_parses() {
    let social = parse_social(SOCIAL_JSON).expect("bundled social directory");
    assert_eq!(social.official_site.domain, "bornforthis.cn");
    assert!(!social.channels.is_empty());
    assert!(!social.links.is_empty());
    assert!(!social.support.is_empty());
}

#[test]
fn gamepad_icon_name_maps_to_gamepad() {
    let pixel = projects().iter().find(|p| p.id == "pixel-quest").expect("pixel-quest");
    assert_eq!(pixel.icon(), ProjectIcon::Gamepad);
}

// =============================================================
// validation
// =============================================================

#[test]
fn duplicate_ids_are_rejected() {
    let raw = format!("[{},{}]", project_json("a", "A", "https://a"), project_json("a", "B", "https://b"));
    assert_eq!(parse_projects(&raw), Err(ContentError::DuplicateProjectId("a".into())));
}

#[test]
fn blank_title_is_rejected() {
    let raw = format!("[{}]", project_json("a", "  ", "https://a"));
    assert_eq!(parse_projects(&raw), Err(ContentError::EmptyField { id: "a".into(), field: "title" }));
}

#[test]
fn empty_url_is_rejected() {
    let raw = format!("[{}]", project_json("a", "A", ""));
    assert_eq!(parse_projects(&raw), Err(ContentError::EmptyField { id: "a".into(), field: "url" }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(parse_projects("[{"), Err(ContentError::Parse(_))));
    assert!(matches!(parse_social("{}"), Err(ContentError::Parse(_))));
}

#[test]
fn empty_list_is_valid() {
    assert_eq!(parse_projects("[]"), Ok(Vec::new()));
}

// =============================================================
// presentation keys
// =============================================================

#[test]
fn unknown_status_keeps_raw_label_with_neutral_badge() {
    let raw = r#"[{"id":"x","title":"X","description":"","url":"https://x","iconName":"Cpu","status":"archived"}]"#;
    let parsed = parse_projects(raw).expect("parse");
    assert_eq!(parsed[0].status, ProjectStatus::Other("archived".into()));
    assert_eq!(parsed[0].status.label(), "archived");
    assert_eq!(parsed[0].status.badge_modifier(), "neutral");
}

#[test]
fn unknown_icon_falls_back_to_box() {
    assert_eq!(ProjectIcon::from_name("Rocket"), ProjectIcon::Box);
    assert_eq!(ProjectIcon::from_name(""), ProjectIcon::Box);
    assert_eq!(ProjectIcon::from_name("Leaf"), ProjectIcon::Leaf);
}

#[test]
fn optional_fields_default_when_absent() {
    let raw = format!("[{}]", project_json("a", "A", "https://a"));
    let project = &parse_projects(&raw).expect("parse")[0];
    assert!(project.github_url.is_none());
    assert!(project.article_url.is_none());
    assert!(project.tags.is_empty());
    assert!(!project.featured);
}
