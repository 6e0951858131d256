use std::sync::Arc;

use crate::store::ResponseStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn ResponseStore>,
}
