//! Log and event callbacks fired by buffer loads and saves.
//!
//! The callbacks are process-global, so this binary holds a single test.

use std::sync::{Arc, Mutex};

use lined::{
    LOADED_EVENT, LineBuffer, LogLevel, MemorySource, SAVED_EVENT, set_event_callback,
    set_log_callback,
};
use serde_json::{Value, json};

#[test]
fn load_and_save_report_through_callbacks() {
    let logs: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::default();
    let events: Arc<Mutex<Vec<(String, String)>>> = Arc::default();

    let sink = Arc::clone(&logs);
    set_log_callback(move |level, msg| {
        sink.lock().unwrap().push((level, msg.to_string()));
    });
    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        sink.lock().unwrap().push((name.to_string(), data.to_string()));
    });

    let mut buf = LineBuffer::from_source(MemorySource::from("a\nb\n")).unwrap();
    buf.save().unwrap();

    let logs = logs.lock().unwrap();
    assert!(
        logs.iter()
            .any(|(level, msg)| *level == LogLevel::Debug && msg.starts_with("loaded 2 lines"))
    );
    assert!(logs.iter().any(|(_, msg)| msg == "saved 2 lines (4 bytes)"));

    let events = events.lock().unwrap();
    let names: Vec<&str> = events.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, [LOADED_EVENT, SAVED_EVENT]);

    let loaded: Value = serde_json::from_str(&events[0].1).expect("load payload is JSON");
    assert_eq!(loaded, json!({ "lines": 2, "trailing_terminator": true }));

    let saved: Value = serde_json::from_str(&events[1].1).expect("save payload is JSON");
    assert_eq!(
        saved,
        json!({ "lines": 2, "bytes": 4, "trailing_terminator": true })
    );
}
