// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::fake::FakeStore;
use crate::memory::MemoryStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn traced_store_delegates() {
    let inner = MemoryStore::new();
    let store = TracedStore::new(inner.clone());

    store.set("notes", "{}").await.unwrap();
    assert_eq!(inner.get("notes").await.unwrap().as_deref(), Some("{}"));

    store.remove_many(&["notes"]).await.unwrap();
    assert!(store.inner().is_empty());
}

#[test]
fn overlapping_writes_log_in_their_own_span() {
    let fake = FakeStore::new();
    fake.set_write_delay(Some(Duration::from_millis(10)));
    let store = TracedStore::new(fake);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(async {
                let (a, b) = tokio::join!(store.set("notes", "{}"), store.set("practiceTime", "5"));
                a.unwrap();
                b.unwrap();
            })
    });

    let contents = String::from_utf8_lossy(&logs.logs.lock().unwrap()).to_string();
    let written: Vec<_> = contents.lines().filter(|l| l.contains("written")).collect();
    assert_eq!(written.len(), 2, "{contents}");
    for line in written {
        assert_eq!(line.matches("store.set{").count(), 1, "span leaked: {line}");
    }
}
