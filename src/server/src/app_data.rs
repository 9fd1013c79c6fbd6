use std::sync::Arc;

use libformdrop::storage::EntryStore;

#[derive(Clone)]
pub struct FormdropAppData {
    pub store: Arc<dyn EntryStore>,
}

impl FormdropAppData {
    pub fn new(store: impl EntryStore + 'static) -> FormdropAppData {
        FormdropAppData {
            store: Arc::new(store),
        }
    }
}
