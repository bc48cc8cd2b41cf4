// ============================================================================
// USE SESSION HOOK - read the session and re-render on every change
// ============================================================================

use yew::prelude::*;

use crate::models::Credentials;
use crate::services::ApiClient;
use crate::state::Session;
use crate::stores::{LoginOutcome, SessionStore};

#[derive(Clone)]
pub struct UseSessionHandle {
    pub store: SessionStore,
    /// Snapshot taken at render time
    pub session: Session,
}

impl UseSessionHandle {
    /// Fires the remote login; `on_settled` gets the outcome once it resolves
    pub fn login(&self, credentials: Credentials, on_settled: Callback<LoginOutcome>) {
        let store = self.store.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            let outcome = store.login(&api, &credentials).await;
            on_settled.emit(outcome);
        });
    }
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let store = use_context::<SessionStore>()
        .expect("use_session() called outside of <SessionProvider>");
    let force_update = use_force_update();

    {
        let store = store.clone();
        use_effect_with(store.clone(), move |_| {
            let id = store.subscribe(move || force_update.force_update());
            move || store.unsubscribe(id)
        });
    }

    UseSessionHandle {
        session: store.snapshot(),
        store,
    }
}
