use std::sync::Arc;

use anyhow::Result;
use times_of_fashion_shared::{
    facade::{ContentBackend, MockContentBackend},
    ArticleStore,
};

use crate::{auth::AdminAuth, config::AppConfig, newsletter::NewsletterDispatch};

#[derive(Clone)]
pub struct AppState {
    /// Bundled article catalogue
    store: &'static ArticleStore,
    /// Persistence facade for admin and signup records
    backend: Arc<dyn ContentBackend>,
    newsletter: Arc<NewsletterDispatch>,
    auth: Arc<AdminAuth>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_parts(
            ArticleStore::global(),
            Arc::new(MockContentBackend::new()),
            NewsletterDispatch::new(config.newsletter.clone())?,
            AdminAuth::new(config.admin.clone()),
        ))
    }

    pub fn with_parts(
        store: &'static ArticleStore,
        backend: Arc<dyn ContentBackend>,
        newsletter: NewsletterDispatch,
        auth: AdminAuth,
    ) -> Self {
        Self {
            store,
            backend,
            newsletter: Arc::new(newsletter),
            auth: Arc::new(auth),
        }
    }

    pub fn store(&self) -> &'static ArticleStore {
        self.store
    }

    pub fn backend(&self) -> &dyn ContentBackend {
        self.backend.as_ref()
    }

    pub fn newsletter(&self) -> &NewsletterDispatch {
        &self.newsletter
    }

    pub fn auth(&self) -> &AdminAuth {
        &self.auth
    }

    pub fn article_count(&self) -> usize {
        self.store.len()
    }
}
