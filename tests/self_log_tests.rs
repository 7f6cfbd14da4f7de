//! Self-log notices emitted while capturing
//!
//! The handler is process-wide, so everything that touches it lives in a
//! single test.

use parking_lot::Mutex;
use rust_log_capture::prelude::*;
use rust_log_capture::self_log;
use std::sync::Arc;

#[derive(Debug)]
struct Catalog {
    name: &'static str,
}

impl LogValue for Catalog {
    fn members(&self) -> Option<Vec<Member<'_>>> {
        Some(vec![
            Member::field("Name", &self.name),
            Member::indexer("Item"),
            Member::getter("Count", || Err(CaptureError::member_access("Count", "not loaded"))),
        ])
    }
}

#[test]
fn test_notices_reach_handler() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&messages);
    self_log::enable(move |message| sink.lock().push(message.to_string()));
    assert!(self_log::is_enabled());

    let converter = PropertyValueConverter::builder()
        .maximum_destructuring_depth(0)
        .build()
        .unwrap();
    let value = converter.convert(&Catalog { name: "books" }, Destructuring::Destructure);
    let structure = value.as_structure().unwrap();
    assert!(structure.get("Item").is_none());
    assert!(structure.get("Count").is_some());

    {
        let messages = messages.lock();
        assert!(messages.iter().any(|m| m.contains("Catalog.Item") && m.contains("indexer")));
        assert!(messages.iter().any(|m| m.contains("Catalog.Count") && m.contains("not loaded")));
        assert!(messages.iter().any(|m| m.contains("Maximum destructuring depth 0")));
    }

    self_log::disable();
    assert!(!self_log::is_enabled());
    let before = messages.lock().len();
    converter.convert(&Catalog { name: "maps" }, Destructuring::Destructure);
    assert_eq!(messages.lock().len(), before);
}
