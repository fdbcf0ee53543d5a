//! Data model and content logic shared by the Times of Fashion frontend and
//! backend.
//!
//! Article content is bundled into the binary ([`store`]), filtered by
//! category ([`filter`]) and rendered by the client. Persistence goes through
//! the [`facade::ContentBackend`] trait, whose only implementation today is a
//! mock.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod facade;
pub mod filter;
pub mod models;
pub mod newsletter;
pub mod store;

pub use filter::{articles_for_category_page, articles_for_listing, split_featured};
pub use store::ArticleStore;

/// A bundled editorial article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique within its category group, e.g. `beauty-1`.
    pub id: String,
    /// Headline.
    pub title: String,
    /// One or two sentence teaser shown on cards.
    pub excerpt: String,
    /// Body text; paragraphs are separated by a blank line.
    pub content: String,
    /// Cover image URL.
    pub image: String,
    /// Byline.
    pub author: String,
    /// Publish date as `YYYY-MM-DD`.
    pub date: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    /// Free-form tags, at least one per article.
    pub tags: Vec<String>,
    /// Shown in the "Featured Articles" section of its category page.
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Body split into non-empty paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }

    /// Human readable reading time, e.g. `6 min read`.
    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time)
    }
}

/// List entry served by the article endpoints: an article without its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    /// Article id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Teaser.
    pub excerpt: String,
    /// Cover image URL.
    pub image: String,
    /// Byline.
    pub author: String,
    /// Publish date as `YYYY-MM-DD`.
    pub date: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    /// Tags.
    pub tags: Vec<String>,
    /// Featured flag.
    pub featured: bool,
    /// Slug of the group the article belongs to.
    pub category: String,
}

impl ArticleListItem {
    /// Builds a list entry for an article of `category`.
    pub fn from_article(article: &Article, category: Category) -> Self {
        ArticleListItem {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            image: article.image.clone(),
            author: article.author.clone(),
            date: article.date.clone(),
            read_time: article.read_time,
            tags: article.tags.clone(),
            featured: article.featured,
            category: category.slug().to_string(),
        }
    }
}

/// The fixed set of editorial sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Runway, trends and the business of clothing.
    Fashion,
    /// Skincare and makeup.
    Beauty,
    /// Living, budgets and wardrobes.
    Lifestyle,
    /// Stars and their styling.
    Celebrity,
    /// Fashion meets social movements.
    Culture,
    /// Mindful beauty and style.
    Wellness,
}

impl Category {
    /// Every category in navigation order.
    pub const ALL: [Category; 6] = [
        Category::Fashion,
        Category::Beauty,
        Category::Lifestyle,
        Category::Celebrity,
        Category::Culture,
        Category::Wellness,
    ];

    /// Parses a category key, ignoring case and surrounding whitespace.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(key))
    }

    /// Lowercase key used in URLs and the API.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Beauty => "beauty",
            Category::Lifestyle => "lifestyle",
            Category::Celebrity => "celebrity",
            Category::Culture => "culture",
            Category::Wellness => "wellness",
        }
    }

    /// Short label used in navigation and filter buttons.
    pub fn label(self) -> &'static str {
        match self {
            Category::Fashion => "Fashion",
            Category::Beauty => "Beauty",
            Category::Lifestyle => "Lifestyle",
            Category::Celebrity => "Celebrity",
            Category::Culture => "Culture",
            Category::Wellness => "Wellness",
        }
    }

    /// Title of the category landing page.
    pub fn page_title(self) -> &'static str {
        match self {
            Category::Fashion => "Fashion Intelligence",
            Category::Beauty => "Beauty Revolution",
            Category::Lifestyle => "Life Elevated",
            Category::Celebrity => "Icon Intelligence",
            Category::Culture => "Cultural Currents",
            Category::Wellness => "Wellness & Style Harmony",
        }
    }

    /// Strapline under the landing page title.
    pub fn description(self) -> &'static str {
        match self {
            Category::Fashion => {
                "Where data meets design and tomorrow's trends are decoded today"
            },
            Category::Beauty => {
                "Where science meets artistry and skincare becomes the ultimate form of \
                 self-expression"
            },
            Category::Lifestyle => {
                "Curated living for the modern professional who refuses to compromise on style"
            },
            Category::Celebrity => {
                "Behind the red carpet: how the world's most watched wardrobes are really built"
            },
            Category::Culture => {
                "Where fashion collides with technology, society and the movements shaping \
                 how we dress"
            },
            Category::Wellness => {
                "Where inner transformation meets outer expression through mindful beauty and \
                 healing-focused style practices"
            },
        }
    }

    /// Hero image of the landing page, relative to the site root.
    pub fn hero_image(self) -> &'static str {
        match self {
            Category::Fashion => "/assets/fashion.png",
            Category::Beauty => "/assets/beauty.png",
            Category::Lifestyle => "/assets/lifestyle.png",
            Category::Celebrity => "/assets/celebrity.png",
            Category::Culture => "/assets/culture.png",
            Category::Wellness => "/assets/wellness.png",
        }
    }

    /// Tailwind colour used for the "Featured" badge.
    pub fn accent_color(self) -> &'static str {
        match self {
            Category::Fashion => "rose-500",
            Category::Beauty => "purple-500",
            Category::Lifestyle => "amber-500",
            Category::Celebrity => "pink-500",
            Category::Culture => "indigo-500",
            Category::Wellness => "teal-500",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::{Article, ArticleListItem, Category};

    #[test]
    fn category_parse_ignores_case_and_whitespace() {
        assert_eq!(Category::parse("Beauty"), Some(Category::Beauty));
        assert_eq!(Category::parse("  WELLNESS "), Some(Category::Wellness));
        assert_eq!(Category::parse("wellness honours"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn paragraphs_skip_blank_chunks() {
        let article = Article {
            id: "fashion-9".to_string(),
            title: "t".to_string(),
            excerpt: "e".to_string(),
            content: "first\n\n\n\nsecond\n\n".to_string(),
            image: String::new(),
            author: "a".to_string(),
            date: "2024-08-01".to_string(),
            read_time: 4,
            tags: vec!["x".to_string()],
            featured: false,
        };
        let paragraphs: Vec<&str> = article.paragraphs().collect();
        assert_eq!(paragraphs, vec!["first", "second"]);
        assert_eq!(article.read_time_label(), "4 min read");

        let item = ArticleListItem::from_article(&article, Category::Fashion);
        assert_eq!(item.category, "fashion");
        assert_eq!(item.id, "fashion-9");
    }
}
