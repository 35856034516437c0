use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::{Ignite, Rocket, Sentinel};

use crate::loader::{FetchMode, LoadOutcome, Loader};
use crate::models::content::{
    AboutContent, ContactContent, Education, Experience, FooterContent, NavItem, PersonalInfo,
    PortfolioContent, Project, SeoData, SkillCategory, SkillsContent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Immutable view of the store at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub content: Arc<PortfolioContent>,
    pub phase: Phase,
    pub is_loading: bool,
    pub error: Option<String>,
}

struct Inner {
    loader: Loader,
    state: RwLock<Snapshot>,
    in_flight: AtomicUsize,
    started: AtomicBool,
    closed: AtomicBool,
}

/// Page-lifetime holder of the current content. Cloning shares the store.
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<Inner>,
}

impl ContentStore {
    /// With `initial` the store is ready immediately; without it the
    /// default content is shown as a placeholder until `start` lands.
    pub fn new(loader: Loader, initial: Option<PortfolioContent>) -> Self {
        let preloaded = initial.is_some();
        let snapshot = match initial {
            Some(content) => Snapshot {
                content: Arc::new(content),
                phase: Phase::Ready,
                is_loading: false,
                error: None,
            },
            None => Snapshot {
                content: Arc::new(PortfolioContent::default()),
                phase: Phase::Loading,
                is_loading: true,
                error: None,
            },
        };
        ContentStore {
            inner: Arc::new(Inner {
                loader,
                state: RwLock::new(snapshot),
                in_flight: AtomicUsize::new(0),
                started: AtomicBool::new(preloaded),
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        match self.inner.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Initial load. Runs at most once per store, and not at all when
    /// content was supplied at construction.
    pub async fn start(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return;
        }
        self.run_load(FetchMode::Server).await;
    }

    /// Reload from the source. Concurrent calls are not merged: whichever
    /// load resolves last decides the content.
    pub async fn refetch(&self) -> Snapshot {
        self.inner.started.store(true, Ordering::SeqCst);
        self.run_load(FetchMode::Client).await;
        self.snapshot()
    }

    /// Stop applying results; loads still in flight are dropped on arrival.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    async fn run_load(&self, mode: FetchMode) {
        if self.is_closed() {
            return;
        }
        self.begin_load();
        let outcome = self.inner.loader.load_outcome(mode).await;
        self.finish_load(outcome);
    }

    fn begin_load(&self) {
        self.inner.in_flight.fetch_add(1, Ordering::SeqCst);
        self.write(|s| {
            s.phase = Phase::Loading;
            s.is_loading = true;
            s.error = None;
        });
    }

    fn finish_load(&self, outcome: LoadOutcome) {
        let remaining = self.inner.in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
        if self.is_closed() {
            log::debug!("[content] Store closed, discarding late load result");
            return;
        }
        let content = Arc::new(outcome.content);
        let error = outcome.error.map(|e| e.to_string());
        self.write(move |s| {
            s.content = content;
            s.error = error;
            if remaining == 0 {
                s.phase = Phase::Ready;
                s.is_loading = false;
            }
        });
    }

    fn write(&self, f: impl FnOnce(&mut Snapshot)) {
        match self.inner.state.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

// ── Request guard ─────────────────────────────────────

/// One snapshot per request; every section of a response renders from it.
pub struct Portfolio(pub Snapshot);

#[derive(Debug)]
pub struct MissingContentStore;

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Portfolio {
    type Error = MissingContentStore;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.rocket().state::<ContentStore>() {
            Some(store) => Outcome::Success(Portfolio(store.snapshot())),
            None => {
                log::error!("Portfolio accessed without a managed ContentStore");
                Outcome::Error((Status::InternalServerError, MissingContentStore))
            }
        }
    }
}

impl Sentinel for Portfolio {
    fn abort(rocket: &Rocket<Ignite>) -> bool {
        if rocket.state::<ContentStore>().is_none() {
            log::error!("Portfolio is used by a route but no ContentStore is managed; refusing to launch");
            return true;
        }
        false
    }
}

impl Portfolio {
    pub fn content(&self) -> &PortfolioContent {
        &self.0.content
    }

    pub fn is_loading(&self) -> bool {
        self.0.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.0.error.as_deref()
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.0.content.personal_info
    }

    pub fn about_content(&self) -> &AboutContent {
        &self.0.content.about_content
    }

    pub fn contact_content(&self) -> &ContactContent {
        &self.0.content.contact_content
    }

    pub fn skills_content(&self) -> &SkillsContent {
        &self.0.content.skills_content
    }

    pub fn footer_content(&self) -> &FooterContent {
        &self.0.content.footer_content
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.0.content.experiences
    }

    pub fn education(&self) -> &[Education] {
        &self.0.content.education
    }

    pub fn projects(&self) -> &[Project] {
        &self.0.content.projects
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.0.content.skill_categories
    }

    pub fn nav_items(&self) -> &[NavItem] {
        &self.0.content.nav_items
    }

    pub fn seo(&self) -> &SeoData {
        &self.0.content.seo
    }
}
