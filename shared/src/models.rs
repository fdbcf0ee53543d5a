//! Records exchanged with the content backend.
//!
//! These mirror what a real CMS would store. Nothing persists them yet; see
//! [`crate::facade`]. Timestamps are Unix milliseconds.

use serde::{Deserialize, Serialize};

/// Publication state of a [`BlogPost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    /// Not visible to readers.
    Draft,
    /// Live on the site.
    #[default]
    Published,
    /// Retired but kept.
    Archived,
}

impl BlogPostStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            BlogPostStatus::Draft => "draft",
            BlogPostStatus::Published => "published",
            BlogPostStatus::Archived => "archived",
        }
    }
}

/// A post managed from the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Backend-assigned id.
    #[serde(default)]
    pub id: Option<String>,
    /// Headline.
    pub title: String,
    /// Body.
    pub content: String,
    /// Teaser.
    pub excerpt: String,
    /// Category slug.
    pub category: String,
    /// Tags.
    pub tags: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Byline.
    pub author: String,
    /// Publication state.
    pub status: BlogPostStatus,
    /// Set when the post went live.
    #[serde(default)]
    pub published_at: Option<i64>,
    /// Creation time.
    pub created_at: i64,
    /// Last modification time.
    pub updated_at: i64,
    /// Page views.
    pub view_count: u64,
    /// Likes.
    pub likes: u64,
}

/// Fields supplied when creating a [`BlogPost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBlogPost {
    /// Headline.
    pub title: String,
    /// Body.
    pub content: String,
    /// Teaser.
    #[serde(default)]
    pub excerpt: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Byline.
    pub author: String,
    /// Publication state.
    #[serde(default)]
    pub status: BlogPostStatus,
    /// Publication time when created already published.
    #[serde(default)]
    pub published_at: Option<i64>,
}

/// Partial update of a [`BlogPost`]; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    /// New headline.
    #[serde(default)]
    pub title: Option<String>,
    /// New body.
    #[serde(default)]
    pub content: Option<String>,
    /// New teaser.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// New category slug.
    #[serde(default)]
    pub category: Option<String>,
    /// New tags.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// New cover image.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// New publication state.
    #[serde(default)]
    pub status: Option<BlogPostStatus>,
}

/// Listing options for blog posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostQuery {
    /// Only posts in this category.
    #[serde(default)]
    pub category: Option<String>,
    /// Only posts in this state.
    #[serde(default)]
    pub status: Option<BlogPostStatus>,
    /// Maximum number of posts.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Field to order by, e.g. `created_at`.
    #[serde(default)]
    pub order_by: Option<String>,
}

/// Delivery state of a newsletter subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Receiving mail.
    #[default]
    Active,
    /// Opted out.
    Unsubscribed,
    /// Address rejected mail.
    Bounced,
}

impl SubscriptionStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Unsubscribed => "unsubscribed",
            SubscriptionStatus::Bounced => "bounced",
        }
    }
}

/// Which newsletter content a subscriber wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPreferences {
    /// The weekly digest.
    pub weekly_newsletter: bool,
    /// Trend reports.
    pub fashion_trends: bool,
    /// Beauty tips.
    pub beauty_tips: bool,
    /// Sale announcements.
    pub sales_alerts: bool,
}

impl Default for ContentPreferences {
    fn default() -> Self {
        Self {
            weekly_newsletter: true,
            fashion_trends: true,
            beauty_tips: true,
            sales_alerts: false,
        }
    }
}

/// A stored newsletter subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    /// Backend-assigned id.
    #[serde(default)]
    pub id: Option<String>,
    /// Subscriber address. Not validated beyond what the form enforces.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Where the signup happened, e.g. `website-newsletter`.
    pub source: String,
    /// Delivery state.
    pub status: SubscriptionStatus,
    /// Signup time.
    pub subscribed_at: i64,
    /// Content choices.
    pub preferences: ContentPreferences,
}

/// Fields supplied when adding a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubscription {
    /// Subscriber address.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Signup origin.
    pub source: String,
    /// Initial state.
    #[serde(default)]
    pub status: SubscriptionStatus,
    /// Content choices.
    #[serde(default)]
    pub preferences: ContentPreferences,
}

/// Permission level of a [`UserAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Reader.
    #[default]
    User,
    /// Newsletter reader.
    Subscriber,
    /// Writer.
    Contributor,
    /// Site administrator.
    Admin,
}

/// Social profile links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Instagram handle or URL.
    #[serde(default)]
    pub instagram: Option<String>,
    /// Twitter handle or URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// LinkedIn URL.
    #[serde(default)]
    pub linkedin: Option<String>,
}

/// Notification settings of a [`UserAccount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Mail notifications.
    pub email_notifications: bool,
    /// Push notifications.
    pub push_notifications: bool,
    /// Newsletter opt-in.
    pub newsletter: bool,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Backend-assigned id.
    #[serde(default)]
    pub id: Option<String>,
    /// Login address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Permission level.
    pub role: UserRole,
    /// Avatar URL.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Short biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Social profiles.
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Notification settings.
    pub preferences: UserPreferences,
    /// Registration time.
    pub created_at: i64,
    /// Most recent login.
    #[serde(default)]
    pub last_login_at: Option<i64>,
}

/// Fields supplied when creating a [`UserAccount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserAccount {
    /// Login address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Permission level.
    #[serde(default)]
    pub role: UserRole,
    /// Notification settings.
    pub preferences: UserPreferences,
}

/// Partial update of a [`UserAccount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserAccountPatch {
    /// New given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// New permission level.
    #[serde(default)]
    pub role: Option<UserRole>,
    /// New avatar.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// New biography.
    #[serde(default)]
    pub bio: Option<String>,
}

/// Identity returned by sign-in and sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Auth provider user id.
    pub uid: String,
    /// Login address.
    pub email: String,
}

/// Site-wide social accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    /// Instagram URL.
    #[serde(default)]
    pub instagram: Option<String>,
    /// Twitter URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// Facebook URL.
    #[serde(default)]
    pub facebook: Option<String>,
    /// Pinterest URL.
    #[serde(default)]
    pub pinterest: Option<String>,
}

/// How often the newsletter goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsletterFrequency {
    /// Every day.
    Daily,
    /// Every week.
    #[default]
    Weekly,
    /// Every month.
    Monthly,
}

/// Newsletter section of [`AdminSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSettings {
    /// Whether signups are accepted.
    pub enabled: bool,
    /// Send cadence.
    pub frequency: NewsletterFrequency,
    /// Template identifier.
    pub template: String,
}

/// Search engine metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoSettings {
    /// `<title>` of the home page.
    pub meta_title: String,
    /// Meta description.
    pub meta_description: String,
    /// Meta keywords.
    pub keywords: Vec<String>,
}

/// Site configuration edited from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Backend-assigned id.
    #[serde(default)]
    pub id: Option<String>,
    /// Site name.
    pub site_name: String,
    /// Tagline.
    pub site_description: String,
    /// Public contact address.
    pub contact_email: String,
    /// Social accounts.
    #[serde(default)]
    pub social_media: SocialMedia,
    /// Newsletter options.
    pub newsletter_settings: NewsletterSettings,
    /// SEO metadata.
    #[serde(default)]
    pub seo_settings: SeoSettings,
    /// Last change time.
    #[serde(default)]
    pub updated_at: i64,
    /// Who made the last change.
    #[serde(default)]
    pub updated_by: String,
}

/// Dashboard counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteAnalytics {
    /// Stored blog posts.
    pub total_blogs: usize,
    /// Stored subscriptions.
    pub total_subscriptions: usize,
    /// Registered users.
    pub total_users: usize,
    /// Recent events, newest first.
    pub recent_activity: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::{BlogPostStatus, ContentPreferences, NewBlogPost, NewSubscription};

    #[test]
    fn new_post_defaults_to_published() {
        let post: NewBlogPost = serde_json::from_str(
            r#"{"title":"Hello","content":"Body","author":"Times of Fashion Admin"}"#,
        )
        .expect("valid post json");
        assert_eq!(post.status, BlogPostStatus::Published);
        assert!(post.tags.is_empty());
        assert_eq!(BlogPostStatus::Archived.as_str(), "archived");
    }

    #[test]
    fn subscription_preferences_default_to_site_signup_choices() {
        let subscription: NewSubscription =
            serde_json::from_str(r#"{"email":"a@b.co","source":"website"}"#)
                .expect("valid subscription json");
        assert_eq!(subscription.preferences, ContentPreferences::default());
        assert!(!subscription.preferences.sales_alerts);
        let status = serde_json::to_string(&subscription.status).expect("serializes");
        assert_eq!(status, "\"active\"");
    }
}
