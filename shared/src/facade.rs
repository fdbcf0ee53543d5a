//! Persistence interface for posts, subscribers, users and settings.
//!
//! [`MockContentBackend`] is the only implementation. Every call logs a
//! warning and succeeds with an empty value or a placeholder id, so callers
//! always observe success.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{
    AdminSettings, AuthUser, BlogPost, BlogPostPatch, BlogPostQuery, NewBlogPost, NewSubscription,
    NewUserAccount, NewsletterSubscription, SiteAnalytics, SubscriptionStatus, UserAccount,
    UserAccountPatch,
};

/// Id returned by [`MockContentBackend::create_blog_post`].
pub const MOCK_POST_ID: &str = "mock-id";
/// Id returned by [`MockContentBackend::add_newsletter_subscription`].
pub const MOCK_SUBSCRIPTION_ID: &str = "mock-subscription-id";
/// Id returned by [`MockContentBackend::create_user_account`].
pub const MOCK_USER_ID: &str = "mock-user-id";
/// User id returned by sign-in and sign-up.
pub const MOCK_UID: &str = "mock-uid";
/// URL returned by [`MockContentBackend::upload_image`].
pub const MOCK_IMAGE_URL: &str = "mock-image-url";

/// Content storage used by the admin panel and the signup flow.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Stores a new post and returns its id.
    async fn create_blog_post(&self, post: NewBlogPost) -> Result<String>;
    /// Applies `patch` to the post `id`.
    async fn update_blog_post(&self, id: &str, patch: BlogPostPatch) -> Result<()>;
    /// Removes the post `id`.
    async fn delete_blog_post(&self, id: &str) -> Result<()>;
    /// Lists posts matching `query`.
    async fn get_blog_posts(&self, query: BlogPostQuery) -> Result<Vec<BlogPost>>;
    /// Fetches one post.
    async fn get_blog_post(&self, id: &str) -> Result<Option<BlogPost>>;

    /// Stores a newsletter signup and returns its id.
    async fn add_newsletter_subscription(&self, subscription: NewSubscription) -> Result<String>;
    /// Changes the delivery state of every subscription for `email`.
    async fn update_subscription_status(&self, email: &str, status: SubscriptionStatus)
        -> Result<()>;
    /// Lists subscriptions, optionally only those in `status`.
    async fn get_newsletter_subscriptions(
        &self,
        status: Option<SubscriptionStatus>,
    ) -> Result<Vec<NewsletterSubscription>>;

    /// Stores a user and returns its id.
    async fn create_user_account(&self, account: NewUserAccount) -> Result<String>;
    /// Applies `patch` to the user `id`.
    async fn update_user_account(&self, id: &str, patch: UserAccountPatch) -> Result<()>;
    /// Fetches one user.
    async fn get_user_account(&self, id: &str) -> Result<Option<UserAccount>>;

    /// Registers credentials together with a profile.
    async fn sign_up(&self, email: &str, password: &str, profile: NewUserAccount)
        -> Result<AuthUser>;
    /// Authenticates credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;
    /// Ends the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Replaces the site settings.
    async fn update_admin_settings(&self, settings: AdminSettings) -> Result<()>;
    /// Fetches the site settings.
    async fn get_admin_settings(&self) -> Result<Option<AdminSettings>>;

    /// Stores an image under `path` and returns its public URL.
    async fn upload_image(&self, bytes: Vec<u8>, path: &str) -> Result<String>;
    /// Dashboard counters.
    async fn get_analytics(&self) -> Result<SiteAnalytics>;
}

/// Stand-in backend that stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockContentBackend;

impl MockContentBackend {
    /// Creates the mock.
    pub fn new() -> Self {
        Self
    }
}

fn disabled(method: &str) {
    tracing::warn!("content backend disabled - {method} called");
}

#[async_trait]
impl ContentBackend for MockContentBackend {
    async fn create_blog_post(&self, post: NewBlogPost) -> Result<String> {
        disabled("create_blog_post");
        tracing::debug!(title = %post.title, "discarding blog post");
        Ok(MOCK_POST_ID.to_string())
    }

    async fn update_blog_post(&self, id: &str, _patch: BlogPostPatch) -> Result<()> {
        disabled("update_blog_post");
        tracing::debug!(id, "discarding blog post update");
        Ok(())
    }

    async fn delete_blog_post(&self, id: &str) -> Result<()> {
        disabled("delete_blog_post");
        tracing::debug!(id, "nothing to delete");
        Ok(())
    }

    async fn get_blog_posts(&self, _query: BlogPostQuery) -> Result<Vec<BlogPost>> {
        disabled("get_blog_posts");
        Ok(Vec::new())
    }

    async fn get_blog_post(&self, _id: &str) -> Result<Option<BlogPost>> {
        disabled("get_blog_post");
        Ok(None)
    }

    async fn add_newsletter_subscription(&self, subscription: NewSubscription) -> Result<String> {
        disabled("add_newsletter_subscription");
        tracing::debug!(source = %subscription.source, "discarding subscription");
        Ok(MOCK_SUBSCRIPTION_ID.to_string())
    }

    async fn update_subscription_status(
        &self,
        _email: &str,
        _status: SubscriptionStatus,
    ) -> Result<()> {
        disabled("update_subscription_status");
        Ok(())
    }

    async fn get_newsletter_subscriptions(
        &self,
        _status: Option<SubscriptionStatus>,
    ) -> Result<Vec<NewsletterSubscription>> {
        disabled("get_newsletter_subscriptions");
        Ok(Vec::new())
    }

    async fn create_user_account(&self, _account: NewUserAccount) -> Result<String> {
        disabled("create_user_account");
        Ok(MOCK_USER_ID.to_string())
    }

    async fn update_user_account(&self, _id: &str, _patch: UserAccountPatch) -> Result<()> {
        disabled("update_user_account");
        Ok(())
    }

    async fn get_user_account(&self, _id: &str) -> Result<Option<UserAccount>> {
        disabled("get_user_account");
        Ok(None)
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        _profile: NewUserAccount,
    ) -> Result<AuthUser> {
        disabled("sign_up");
        Ok(AuthUser {
            uid: MOCK_UID.to_string(),
            email: email.to_string(),
        })
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<AuthUser> {
        disabled("sign_in");
        Ok(AuthUser {
            uid: MOCK_UID.to_string(),
            email: email.to_string(),
        })
    }

    async fn sign_out(&self) -> Result<()> {
        disabled("sign_out");
        Ok(())
    }

    async fn update_admin_settings(&self, _settings: AdminSettings) -> Result<()> {
        disabled("update_admin_settings");
        Ok(())
    }

    async fn get_admin_settings(&self) -> Result<Option<AdminSettings>> {
        disabled("get_admin_settings");
        Ok(None)
    }

    async fn upload_image(&self, bytes: Vec<u8>, path: &str) -> Result<String> {
        disabled("upload_image");
        tracing::debug!(path, size = bytes.len(), "discarding image upload");
        Ok(MOCK_IMAGE_URL.to_string())
    }

    async fn get_analytics(&self) -> Result<SiteAnalytics> {
        disabled("get_analytics");
        Ok(SiteAnalytics::default())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{
        ContentBackend, MockContentBackend, MOCK_IMAGE_URL, MOCK_POST_ID, MOCK_SUBSCRIPTION_ID,
        MOCK_UID, MOCK_USER_ID,
    };
    use crate::models::{
        AdminSettings, BlogPostPatch, BlogPostQuery, BlogPostStatus, NewBlogPost,
        NewSubscription, NewUserAccount, NewsletterFrequency, NewsletterSettings,
        SubscriptionStatus, UserAccountPatch, UserPreferences,
    };

    fn sample_account() -> NewUserAccount {
        NewUserAccount {
            email: "reader@example.com".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            role: Default::default(),
            preferences: UserPreferences {
                email_notifications: true,
                push_notifications: false,
                newsletter: true,
            },
        }
    }

    #[tokio::test]
    async fn post_methods_return_placeholders() -> Result<()> {
        let backend = MockContentBackend::new();
        let id = backend
            .create_blog_post(NewBlogPost {
                title: "Title".to_string(),
                content: "Body".to_string(),
                excerpt: String::new(),
                category: "fashion".to_string(),
                tags: vec!["a".to_string()],
                featured_image: None,
                author: "Times of Fashion Admin".to_string(),
                status: BlogPostStatus::Draft,
                published_at: None,
            })
            .await?;
        assert_eq!(id, MOCK_POST_ID);
        backend.update_blog_post("x", BlogPostPatch::default()).await?;
        backend.delete_blog_post("x").await?;
        assert!(backend.get_blog_posts(BlogPostQuery::default()).await?.is_empty());
        assert!(backend.get_blog_post("x").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn subscription_and_user_methods_return_placeholders() -> Result<()> {
        let backend = MockContentBackend::new();
        let id = backend
            .add_newsletter_subscription(NewSubscription {
                email: "reader@example.com".to_string(),
                first_name: None,
                last_name: None,
                source: "website-newsletter".to_string(),
                status: SubscriptionStatus::Active,
                preferences: Default::default(),
            })
            .await?;
        assert_eq!(id, MOCK_SUBSCRIPTION_ID);
        backend
            .update_subscription_status("reader@example.com", SubscriptionStatus::Bounced)
            .await?;
        assert!(backend.get_newsletter_subscriptions(None).await?.is_empty());

        assert_eq!(backend.create_user_account(sample_account()).await?, MOCK_USER_ID);
        backend.update_user_account("u", UserAccountPatch::default()).await?;
        assert!(backend.get_user_account("u").await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn auth_settings_and_analytics_never_fail() -> Result<()> {
        let backend = MockContentBackend::new();
        let user = backend.sign_in("", "").await?;
        assert_eq!(user.uid, MOCK_UID);
        let user = backend.sign_up("new@example.com", "pw", sample_account()).await?;
        assert_eq!(user.email, "new@example.com");
        backend.sign_out().await?;

        backend
            .update_admin_settings(AdminSettings {
                id: None,
                site_name: "Times of Fashion".to_string(),
                site_description: String::new(),
                contact_email: "hello@example.com".to_string(),
                social_media: Default::default(),
                newsletter_settings: NewsletterSettings {
                    enabled: true,
                    frequency: NewsletterFrequency::Weekly,
                    template: "default".to_string(),
                },
                seo_settings: Default::default(),
                updated_at: 0,
                updated_by: "admin".to_string(),
            })
            .await?;
        assert!(backend.get_admin_settings().await?.is_none());
        assert_eq!(backend.upload_image(vec![1, 2, 3], "covers/a.png").await?, MOCK_IMAGE_URL);

        let analytics = backend.get_analytics().await?;
        assert_eq!(analytics.total_blogs, 0);
        assert_eq!(analytics.total_subscriptions, 0);
        assert_eq!(analytics.total_users, 0);
        assert!(analytics.recent_activity.is_empty());
        Ok(())
    }
}
