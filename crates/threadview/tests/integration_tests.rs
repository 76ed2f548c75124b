//! Integration tests for the threadview crate
//!
//! These tests verify the complete flow from stored copies to a rendered
//! thread layout.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;
use std::sync::Arc;
use threadview::query::build_index_from_unread;
use threadview::{
    ActionHandler, DisplayEntry, Folder, FolderCatalog, InMemoryMailStore, MessageIdentity,
    MessageStore, RawMessage, RenderConfig, ThreadId, ThreadNotFoundError, load_thread,
};

fn now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 7, 18, 15, 30, 0)
        .unwrap()
}

/// Helper to create a stored copy received `age` before `now()`
fn make_message(id: &str, identity: &str, folder: &str, age: Duration, seen: bool) -> RawMessage {
    RawMessage::builder(id, "t1")
        .account_id(1)
        .identity(identity)
        .folder(folder)
        .seen(seen)
        .from("John D. <john@abc.org>")
        .to("Jane <jane@xyz.org>, bob@xyz.org")
        .subject("Quarterly report")
        .body_text(format!("Message {id}\r\nDetails at example.com/reports/{id}"))
        .received_at(now().with_timezone(&Utc) - age)
        .build()
}

fn setup_store() -> InMemoryMailStore {
    let _ = env_logger::builder().is_test(true).try_init();

    let store = InMemoryMailStore::new();
    store.upsert_folder(Folder::new("INBOX", "Inbox")).unwrap();
    store.upsert_folder(Folder::new("SENT", "Sent")).unwrap();
    store.upsert_folder(Folder::mailbox("ALL", "All mail")).unwrap();
    store
}

fn load(store: &InMemoryMailStore) -> anyhow::Result<threadview::Thread> {
    load_thread(store, store, 1, &ThreadId::new("t1"), &RenderConfig::default(), &now())
}

#[test]
fn test_full_thread_render() {
    let store = setup_store();

    let ages = [
        Duration::days(200),
        Duration::days(10),
        Duration::days(9),
        Duration::days(8),
        Duration::days(7),
        Duration::hours(2),
    ];
    for (i, age) in ages.into_iter().enumerate() {
        let id = format!("m{i}");
        let identity = format!("<{i}@abc.org>");
        store
            .upsert_message(make_message(&id, &identity, "INBOX", age, i != 5))
            .unwrap();
        // Every message also has an All-mail copy
        store
            .upsert_message(make_message(&format!("{id}-all"), &identity, "ALL", age, true))
            .unwrap();
    }

    let thread = load(&store).unwrap();
    assert_eq!(thread.message_count, 6);
    assert_eq!(thread.subject, "Quarterly report");
    assert_eq!(thread.folders.len(), 1);
    assert_eq!(thread.folders[0].id.as_str(), "INBOX");

    let labels: Vec<&str> = thread.messages.iter().map(|m| m.relative_date.as_str()).collect();
    assert_eq!(labels, vec!["31/12/2023", "8 Jul", "9 Jul", "10 Jul", "11 Jul", "13:30"]);

    let first = thread.primary();
    assert_eq!(first.sender_name, "John D.");
    assert_eq!(first.sender_email, "<john@abc.org>");
    assert_eq!(first.recipient_names, "Jane, bob@xyz.org");
    assert!(first.body_html.contains(
        r#"<a href="example.com/reports/m0" target="_blank" title="example.com/reports/m0">"#
    ));

    assert_eq!(
        thread.index,
        vec![
            DisplayEntry::Message { position: 0, open: false, current: false },
            DisplayEntry::Group { positions: vec![1, 2, 3], collapsed: true },
            DisplayEntry::Message { position: 4, open: false, current: false },
            DisplayEntry::Message { position: 5, open: true, current: true },
        ]
    );

    let grouped: Vec<&str> = thread
        .entry_messages(&thread.index[1])
        .map(|m| m.id().as_str())
        .collect();
    assert_eq!(grouped, vec!["m1", "m2", "m3"]);
}

#[test]
fn test_single_message_thread_is_open() {
    let store = setup_store();
    store
        .upsert_message(make_message("m1", "<1@abc.org>", "INBOX", Duration::hours(1), true))
        .unwrap();

    let thread = load(&store).unwrap();
    assert_eq!(
        thread.index,
        vec![DisplayEntry::Message { position: 0, open: true, current: false }]
    );
}

#[test]
fn test_two_unread_messages() {
    let store = setup_store();
    store
        .upsert_message(make_message("m1", "<1@abc.org>", "INBOX", Duration::hours(3), false))
        .unwrap();
    store
        .upsert_message(make_message("m2", "<2@abc.org>", "SENT", Duration::hours(1), false))
        .unwrap();

    let thread = load(&store).unwrap();
    assert_eq!(thread.unread.len(), 2);
    assert_eq!(
        thread.index,
        vec![
            DisplayEntry::Message { position: 0, open: true, current: false },
            DisplayEntry::Message { position: 1, open: true, current: true },
        ]
    );
}

#[test]
fn test_missing_thread_is_not_found() {
    let store = setup_store();
    let err = load(&store).unwrap_err();
    assert!(err.downcast_ref::<ThreadNotFoundError>().is_some());
}

#[test]
fn test_reload_is_stable() {
    let store = setup_store();
    store
        .upsert_message(make_message("m1", "<1@abc.org>", "SENT", Duration::hours(3), true))
        .unwrap();
    store
        .upsert_message(make_message("m1-inbox", "<1@abc.org>", "INBOX", Duration::hours(3), false))
        .unwrap();

    let first = load(&store).unwrap();
    let second = load(&store).unwrap();
    assert_eq!(first.messages, second.messages);
    assert_eq!(first.message_count, 1);
    assert_eq!(first.primary().id().as_str(), "m1");
    // Badges follow catalog order, not discovery order
    let badges: Vec<&str> = first.folders.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(badges, vec!["INBOX", "SENT"]);
}

#[test]
fn test_delete_removes_message_from_thread() {
    let store = Arc::new(setup_store());
    store
        .upsert_message(make_message("m1", "<1@abc.org>", "INBOX", Duration::hours(3), true))
        .unwrap();
    store
        .upsert_message(make_message("m2", "<2@abc.org>", "SENT", Duration::hours(2), true))
        .unwrap();
    store
        .upsert_message(make_message("m2-inbox", "<2@abc.org>", "INBOX", Duration::hours(2), true))
        .unwrap();

    let handler = ActionHandler::new(store.clone());
    let changed = handler
        .delete_message(1, &MessageIdentity::new("<2@abc.org>"), None)
        .unwrap();
    assert_eq!(changed, 2);

    let thread = load(&store).unwrap();
    assert_eq!(thread.message_count, 1);
    assert_eq!(thread.folders.len(), 1);
    assert_eq!(store.list_folders().unwrap().len(), 3);
    assert_eq!(
        store.get_thread_messages(1, &ThreadId::new("t1")).unwrap().len(),
        1
    );
}

proptest! {
    #[test]
    fn prop_index_covers_every_message_once(unread in prop::collection::vec(any::<bool>(), 1..=50)) {
        let index = build_index_from_unread(&unread);

        let covered: Vec<usize> = index
            .iter()
            .flat_map(|entry| entry.positions().to_vec())
            .collect();
        prop_assert_eq!(covered, (0..unread.len()).collect::<Vec<_>>());

        // Unread messages and the last message are never folded away
        for entry in &index {
            if let DisplayEntry::Group { positions, collapsed } = entry {
                prop_assert!(*collapsed);
                prop_assert!(!positions.is_empty());
                for &pos in positions {
                    prop_assert!(!unread[pos]);
                    prop_assert!(pos != 0 && pos + 2 < unread.len());
                }
            }
        }

        let current: Vec<&DisplayEntry> = index
            .iter()
            .filter(|e| matches!(e, DisplayEntry::Message { current: true, .. }))
            .collect();
        prop_assert!(current.len() <= 1);
    }

    #[test]
    fn prop_snippet_is_bounded(body in ".{0,400}", limit in 0usize..200) {
        let snippet = threadview::enrich::truncated_snippet(&body, limit);
        prop_assert!(snippet.chars().count() <= limit);
    }
}
