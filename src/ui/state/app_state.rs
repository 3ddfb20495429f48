use dioxus::prelude::{use_signal, Signal};

use crate::config::EditorConfig;
use crate::usecase::session::EditorSession;

pub struct AppState {
    pub session: Signal<EditorSession>,
    pub busy: Signal<bool>,
    pub progress_rows: Signal<usize>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(config: &EditorConfig) -> Self {
        let config = config.clone();
        Self {
            session: use_signal(move || EditorSession::new(&config)),
            busy: use_signal(|| false),
            progress_rows: use_signal(|| 0_usize),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
