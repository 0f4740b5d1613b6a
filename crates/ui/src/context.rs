use std::sync::Arc;

use services::{PairingService, ShuffleSound};

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn pairing(&self) -> Arc<PairingService>;
    fn shuffle_sound(&self) -> Option<Arc<ShuffleSound>>;
}

#[derive(Clone)]
pub struct AppContext {
    pairing: Arc<PairingService>,
    shuffle_sound: Option<Arc<ShuffleSound>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            pairing: app.pairing(),
            shuffle_sound: app.shuffle_sound(),
        }
    }

    #[must_use]
    pub fn pairing(&self) -> Arc<PairingService> {
        Arc::clone(&self.pairing)
    }

    #[must_use]
    pub fn shuffle_sound(&self) -> Option<Arc<ShuffleSound>> {
        self.shuffle_sound.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
///
/// The context is provided by the composition root (`crates/app`).
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
