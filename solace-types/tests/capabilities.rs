use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use solace_types::{Composer, DisplaySink, IdentityStore, StoreError};

// --- DisplaySink ---

#[derive(Default)]
struct Buffer(String);

impl DisplaySink for Buffer {
    fn reset(&mut self) {
        self.0.clear();
    }

    fn append_text(&mut self, text: &str) {
        self.0.push_str(text);
    }
}

#[test]
fn notice_appends_by_default() {
    let mut sink = Buffer::default();
    sink.append_text("a");
    sink.notice("!");
    assert_eq!(sink.0, "a!");
}

/// Writes through a shared buffer so boxed use stays observable.
#[derive(Clone, Default)]
struct Shared(Arc<Mutex<Vec<String>>>);

impl DisplaySink for Shared {
    fn reset(&mut self) {
        self.0.lock().unwrap().push("reset".into());
    }

    fn append_text(&mut self, text: &str) {
        self.0.lock().unwrap().push(format!("append:{text}"));
    }

    fn notice(&mut self, text: &str) {
        self.0.lock().unwrap().push(format!("notice:{text}"));
    }
}

impl Composer for Shared {
    fn set_enabled(&mut self, enabled: bool) {
        self.0.lock().unwrap().push(format!("enabled:{enabled}"));
    }

    fn clear_input(&mut self) {
        self.0.lock().unwrap().push("clear".into());
    }
}

#[test]
fn boxed_sink_forwards_every_call() {
    let log = Shared::default();
    let mut sink: Box<dyn DisplaySink> = Box::new(log.clone());
    sink.reset();
    sink.append_text("fresh");
    sink.notice("careful");

    assert_eq!(
        *log.0.lock().unwrap(),
        vec!["reset", "append:fresh", "notice:careful"]
    );
}

#[test]
fn boxed_composer_forwards_every_call() {
    let log = Shared::default();
    let mut composer: Box<dyn Composer> = Box::new(log.clone());
    composer.set_enabled(false);
    composer.set_enabled(true);
    composer.clear_input();

    assert_eq!(
        *log.0.lock().unwrap(),
        vec!["enabled:false", "enabled:true", "clear"]
    );
}

// --- IdentityStore ---

#[derive(Default)]
struct MapStore(Mutex<HashMap<String, String>>);

#[async_trait]
impl IdentityStore for MapStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.0.lock().unwrap().remove(key);
        Ok(())
    }
}

#[tokio::test]
async fn arc_store_shares_state() {
    let store = Arc::new(MapStore::default());
    let handle: Arc<dyn IdentityStore> = store.clone();

    handle.write("k", "v").await.unwrap();
    assert_eq!(store.read("k").await.unwrap().as_deref(), Some("v"));

    IdentityStore::delete(&handle, "k").await.unwrap();
    assert_eq!(store.read("k").await.unwrap(), None);
}
