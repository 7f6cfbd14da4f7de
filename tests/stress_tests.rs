//! Stress tests for concurrent capture
//!
//! These tests verify:
//! - One converter can be shared across threads
//! - Results under contention match single-threaded results
//! - Large and deeply nested inputs stay bounded

use rust_log_capture::prelude::*;
use rust_log_capture::log_struct;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
struct Event {
    id: u64,
    tags: Vec<String>,
    attributes: HashMap<String, i64>,
}
log_struct!(Event { id => "Id", tags => "Tags", attributes => "Attributes" });

fn event(id: u64) -> Event {
    let mut attributes = HashMap::new();
    attributes.insert("attempt".to_string(), (id % 3) as i64);
    Event {
        id,
        tags: vec![format!("t{}", id), "shared".to_string()],
        attributes,
    }
}

/// Test that concurrent conversions through a shared converter agree with
/// sequential ones
#[test]
fn test_shared_converter_across_threads() {
    let converter = Arc::new(
        PropertyValueConverter::builder()
            .maximum_destructuring_depth(4)
            .maximum_collection_count(16)
            .build()
            .expect("valid configuration"),
    );
    let converted = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let converter = Arc::clone(&converter);
            let converted = Arc::clone(&converted);
            thread::spawn(move || {
                for i in 0..500u64 {
                    let id = t * 1000 + i;
                    let value = converter.convert(&event(id), Destructuring::Destructure);
                    let structure = value.as_structure().expect("destructured event");
                    assert_eq!(structure.type_tag(), Some("Event"));
                    assert_eq!(
                        structure.get("Id"),
                        Some(&PropertyValue::from(ScalarValue::new(Scalar::U64(id))))
                    );
                    converted.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
    assert_eq!(converted.load(Ordering::Relaxed), 8 * 500);

    let sequential = converter.convert(&event(42), Destructuring::Destructure);
    let again = converter.convert(&event(42), Destructuring::Destructure);
    assert_eq!(sequential, again);
}

/// Test that a large collection is cut to the configured count
#[test]
fn test_large_collection_is_capped() {
    let converter = PropertyValueConverter::builder()
        .maximum_collection_count(1000)
        .build()
        .unwrap();
    let values: Vec<u32> = (0..1_000_000).collect();

    let value = converter.convert(&values, Destructuring::Default);
    assert_eq!(value.as_sequence().unwrap().len(), 1000);
}

#[derive(Debug)]
struct Nest {
    children: Vec<Nest>,
}

impl LogValue for Nest {
    fn as_sequence(&self) -> Option<Box<dyn Iterator<Item = &dyn LogValue> + '_>> {
        Some(Box::new(self.children.iter().map(|c| c as &dyn LogValue)))
    }
}

/// Test that very deep nesting is flattened rather than recursed into
#[test]
fn test_deep_nesting_is_flattened() {
    let mut nested = Nest { children: vec![] };
    for _ in 0..200 {
        nested = Nest {
            children: vec![nested],
        };
    }

    let converter = PropertyValueConverter::builder()
        .maximum_destructuring_depth(5)
        .build()
        .unwrap();
    let value = converter.convert(&nested, Destructuring::Destructure);

    let mut levels = 0;
    let mut current = &value;
    while let Some(seq) = current.as_sequence() {
        levels += 1;
        current = &seq.elements()[0];
    }
    assert_eq!(levels, 6);
    assert!(current.as_scalar().is_some());
}

/// Test that large byte payloads are summarized
#[test]
fn test_large_byte_payload_is_summarized() {
    let payload = bytes::Bytes::from(vec![0x5au8; 1 << 20]);
    let converter = PropertyValueConverter::builder().build().unwrap();

    let value = converter.convert(&payload, Destructuring::Default);
    let text = value.as_scalar().unwrap().value().as_str().unwrap().to_string();
    assert!(text.starts_with(&"5A".repeat(16)));
    assert!(text.ends_with(&format!("... ({} bytes)", 1 << 20)));
}
