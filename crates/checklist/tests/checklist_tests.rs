//! Integration tests for the checklist widgets.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use checklist::prelude::*;
use checklist::widgets::{ChecklistRow, TextRow};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn users_json() -> &'static str {
    r#"[
        {"value": "1", "label": "Bill Johnson", "tip": "Accounting"},
        {"value": "42", "label": "Mark Jones", "title": "Manager"},
        {"value": "7", "label": "Billy Jean", "checked": true}
    ]"#
}

fn labels(list: &Checklist) -> Vec<String> {
    list.visible_rows()
        .map(|row: &ChecklistRow| row.label().to_string())
        .collect()
}

#[test]
fn test_full_render() {
    setup();
    let config = ChecklistConfig::default()
        .with_id("users")
        .with_title("Users")
        .with_prefix("cl-");
    let list = Checklist::from_json(users_json(), config).unwrap();

    let view = list.render();
    assert_eq!(view.frame.id, "users-frame");
    assert_eq!(view.frame.classes, vec!["cl-frame".to_string()]);

    let header = view.header.unwrap();
    assert_eq!(header.class, "cl-header");
    assert_eq!(header.title.as_deref(), Some("Users"));

    let search = view.search.unwrap();
    assert_eq!(search.class, "cl-search");
    assert_eq!(search.text, "search");
    assert_eq!(search.color, "#999");

    assert_eq!(view.body.class, "cl-body");
    let rows = &view.body.rows;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].tip.as_deref(), Some("Accounting"));
    assert_eq!(rows[1].title.as_deref(), Some("Manager"));
    assert_eq!(rows[0].class, "uncheck");
    assert_eq!(rows[2].class, "check");
    assert!(rows[2].checked);

    let summary = view.summary.unwrap();
    assert_eq!(summary.class, "cl-summary");
    assert_eq!(summary.text, "1 selected");

    let footer = view.footer.unwrap();
    assert_eq!(footer.class, "cl-footer");
    assert_eq!((footer.all_label.as_str(), footer.none_label.as_str()), ("All", "None"));
}

#[test]
fn test_hidden_regions() {
    setup();
    let config = ChecklistConfig::default().with_regions(false, false, false, false);
    let mut list = Checklist::from_json(users_json(), config).unwrap();

    let view = list.render();
    assert!(view.header.is_none());
    assert!(view.search.is_none());
    assert!(view.summary.is_none());
    assert!(view.footer.is_none());

    // Without a footer the select all/none actions are unavailable
    list.select_all();
    assert_eq!(list.checked_count(), 1);

    // Without a search box typing does nothing, but searching still works
    list.key_up(Key::Char('m'), "m");
    assert_eq!(labels(&list).len(), 3);
    list.search("m");
    assert_eq!(labels(&list), vec!["Mark Jones"]);
}

#[test]
fn test_none_checked_class() {
    setup();
    let mut list = Checklist::from_json(users_json(), ChecklistConfig::default()).unwrap();
    assert!(!list.render().frame.classes.contains(&"nonechecked".to_string()));

    list.select_none();
    assert!(list.render().frame.classes.contains(&"nonechecked".to_string()));
    assert_eq!(list.summary_text(), "0 selected");
}

#[test]
fn test_typing_in_search_box() {
    setup();
    let mut list = Checklist::from_json(users_json(), ChecklistConfig::default()).unwrap();

    list.search_click();
    list.key_up(Key::Char('b'), "b");
    list.key_up(Key::Char('i'), "bi");
    assert_eq!(labels(&list), vec!["Bill Johnson", "Billy Jean"]);

    let search = list.render().search.unwrap();
    assert_eq!(search.text, "bi");
    assert_eq!(search.color, "#000");

    list.key_up(Key::Erase, "");
    assert_eq!(labels(&list).len(), 3);

    list.search_blur();
    assert_eq!(list.render().search.unwrap().text, "search");
}

#[test]
fn test_clear_filter_resets_search_box() {
    setup();
    let mut list = Checklist::from_json(users_json(), ChecklistConfig::default()).unwrap();
    list.search_click();
    list.key_up(Key::Char('x'), "x");
    assert!(labels(&list).is_empty());

    list.clear_filter();
    assert_eq!(labels(&list).len(), 3);
    assert_eq!(list.render().search.unwrap().text, "");
}

#[test]
fn test_one_notification_per_operation() {
    setup();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();
    let mut list = Checklist::from_json(users_json(), ChecklistConfig::default())
        .unwrap()
        .with_on_check(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

    list.select_all();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    list.set_checked(["1", "42", "7"]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    list.select_none();
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    // Searching and reordering never notify
    list.search("b");
    list.bubble_checked();
    list.clear_filter();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_bubble_checked_while_filtered() {
    setup();
    let mut list = Checklist::new(
        ["Ann", "Bob", "Abe", "Amy"].map(|name| Descriptor::new(name.to_lowercase()).with_label(name)),
        ChecklistConfig::default(),
    )
    .unwrap();
    list.set_checked(["amy", "bob"]);
    list.search("a");

    list.bubble_checked();
    assert_eq!(labels(&list), vec!["Amy", "Ann", "Abe"]);
    assert_eq!(list.group().items().iter().filter(|item| item.is_visible()).count(), 3);

    list.clear_filter();
    assert_eq!(labels(&list), vec!["Ann", "Bob", "Abe", "Amy"]);
}

#[test]
fn test_malformed_descriptors() {
    setup();
    let err = Checklist::from_json(r#"[{"value": ""}]"#, ChecklistConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingValue { index: 0 }));

    let err = Checklist::from_json(r#"[{"label": "x"}]"#, ChecklistConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = Checklist::from_json("not json", ChecklistConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_empty_checklist() {
    setup();
    let mut list = Checklist::new(Vec::new(), ChecklistConfig::default()).unwrap();
    list.select_all();
    list.search("a");
    list.bubble_checked();
    assert_eq!(list.checked_count(), 0);
    assert_eq!(list.summary_text(), "0 selected");
    assert!(list.render().body.rows.is_empty());
}

#[test]
fn test_view_serializes_to_json() {
    setup();
    let list = Checklist::from_json(users_json(), ChecklistConfig::default()).unwrap();
    let json = list.render().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["frame"]["id"], "checklist-frame");
    assert_eq!(value["summary"]["text"], "1 selected");
    assert_eq!(value["body"]["rows"][1]["value"], "42");
}

#[test]
fn test_standalone_filter_on_plain_rows() {
    setup();
    let mut filter = ItemFilter::new(
        ["Bill Johnson", "Mark Jones", "Billy Jean"].map(TextRow::new),
        ItemFilterConfig::from_json(r#"{"filter_on": "text", "search_box": false}"#).unwrap(),
    );

    filter.search("Bil");
    let shown: Vec<&str> = filter.visible_rows().map(TextRow::text).collect();
    assert_eq!(shown, vec!["Bill Johnson", "Billy Jean"]);

    filter.search("xyz");
    assert_eq!(filter.visible_len(), 0);

    filter.search("");
    assert_eq!(filter.visible_len(), 3);
}
