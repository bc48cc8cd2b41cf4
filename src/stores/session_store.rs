// ============================================================================
// SESSION STORE - single writer of the session token
// ============================================================================
// The guard and the views only read `snapshot()` and subscribe to changes.
// Login is split in begin/settle so the state machine runs without a browser.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::models::Credentials;
use crate::routing::Route;
use crate::services::{ApiError, AuthApi};
use crate::state::{AuthError, Session, SubscriptionId, Subscribers};
use crate::stores::scheduler::{Deferred, Scheduler};
use crate::utils::TokenStorage;

/// Result of a settled login. Navigation is the caller's job.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated { redirect: Route },
    Rejected(AuthError),
}

struct StoreInner {
    session: RefCell<Session>,
    storage: Box<dyn TokenStorage>,
    scheduler: Box<dyn Scheduler>,
    error_banner_ms: u32,
    banner_timer: RefCell<Option<Box<dyn Deferred>>>,
    banner_generation: Cell<u64>,
    subscribers: Subscribers,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    /// Builds the store and adopts any persisted token without asking the
    /// server whether it is still valid.
    pub fn restore(
        storage: Box<dyn TokenStorage>,
        scheduler: Box<dyn Scheduler>,
        error_banner_ms: u32,
    ) -> Self {
        let token = match storage.load() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Could not read persisted token: {}", e);
                None
            }
        };
        if token.is_some() {
            log::info!("💾 [SESSION] Token restored from storage");
        }

        Self {
            inner: Rc::new(StoreInner {
                session: RefCell::new(Session::restored(token)),
                storage,
                scheduler,
                error_banner_ms,
                banner_timer: RefCell::new(None),
                banner_generation: Cell::new(0),
                subscribers: Subscribers::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.session.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.session.borrow().token.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.session.borrow().loading
    }

    pub fn last_error(&self) -> Option<AuthError> {
        self.inner.session.borrow().last_error
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.inner.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.subscribers.unsubscribe(id);
    }

    /// Full login round trip against the remote auth call
    pub async fn login<A: AuthApi>(&self, api: &A, credentials: &Credentials) -> LoginOutcome {
        self.begin_login();
        let result = api.sign_in(credentials).await;
        self.settle_login(result)
    }

    /// Marks a login attempt in flight. A pending banner clear is canceled:
    /// this attempt owns the error state from now on.
    pub fn begin_login(&self) {
        self.cancel_banner_timer();
        {
            let mut session = self.inner.session.borrow_mut();
            session.loading = true;
            session.last_error = None;
        }
        self.inner.subscribers.notify();
    }

    /// Applies the result of the remote auth call. The latest call to settle
    /// decides token and error state.
    pub fn settle_login(&self, result: Result<String, ApiError>) -> LoginOutcome {
        let outcome = match result {
            Ok(token) => {
                if let Err(e) = self.inner.storage.save(&token) {
                    log::warn!("⚠️ [SESSION] Token not persisted: {}", e);
                }
                self.cancel_banner_timer();
                let mut session = self.inner.session.borrow_mut();
                session.token = Some(token);
                session.last_error = None;
                session.loading = false;
                log::info!("✅ [SESSION] Login succeeded");
                LoginOutcome::Authenticated {
                    redirect: Route::Home,
                }
            }
            Err(e) => {
                log::error!("❌ [SESSION] Login failed: {}", e);
                {
                    let mut session = self.inner.session.borrow_mut();
                    session.last_error = Some(AuthError::InvalidCredentials);
                    session.loading = false;
                }
                self.schedule_banner_clear();
                LoginOutcome::Rejected(AuthError::InvalidCredentials)
            }
        };
        self.inner.subscribers.notify();
        outcome
    }

    /// Drops a token the server no longer accepts
    pub fn expire(&self) {
        if let Err(e) = self.inner.storage.clear() {
            log::warn!("⚠️ [SESSION] Could not clear persisted token: {}", e);
        }
        let had_token = self.inner.session.borrow_mut().token.take().is_some();
        if had_token {
            log::info!("🔒 [SESSION] Token expired, sign-in required");
            self.inner.subscribers.notify();
        }
    }

    fn cancel_banner_timer(&self) {
        self.inner
            .banner_generation
            .set(self.inner.banner_generation.get() + 1);
        if let Some(timer) = self.inner.banner_timer.borrow_mut().take() {
            timer.cancel();
        }
    }

    fn schedule_banner_clear(&self) {
        self.cancel_banner_timer();
        let generation = self.inner.banner_generation.get();
        let store: Weak<StoreInner> = Rc::downgrade(&self.inner);

        let timer = self.inner.scheduler.defer(
            self.inner.error_banner_ms,
            Box::new(move || {
                let Some(inner) = store.upgrade() else {
                    return;
                };
                // a newer attempt took over the error state
                if inner.banner_generation.get() != generation {
                    return;
                }
                inner.session.borrow_mut().last_error = None;
                inner.subscribers.notify();
            }),
        );
        *self.inner.banner_timer.borrow_mut() = Some(timer);
    }
}
