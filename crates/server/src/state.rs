use service::SharedStore;

/// Shared handler state; the store is built once in `startup::run`.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}
