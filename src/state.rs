use std::sync::Arc;

use crate::db::SubmissionStore;
use crate::notify::SlackNotifier;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn SubmissionStore>,
    pub notifier: Arc<SlackNotifier>,
}
