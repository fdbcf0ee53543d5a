//! Category filtering for the two places that list articles.
//!
//! The call sites disagree on unknown keys and keep doing so: a category
//! page for a key that is not a category has nothing to show, while the
//! "all articles" listing treats anything it does not recognize as "All".

use crate::{Article, ArticleStore, Category};

/// Value of the listing filter that selects every category.
pub const ALL_FILTER: &str = "all";

/// One button of the listing filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    /// Button label.
    pub label: &'static str,
    /// Value passed back to [`articles_for_listing`].
    pub value: &'static str,
}

/// "All" followed by every category, in navigation order.
pub fn listing_filter_options() -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        label: "All",
        value: ALL_FILTER,
    })
    .chain(Category::ALL.into_iter().map(|category| FilterOption {
        label: category.label(),
        value: category.slug(),
    }))
    .collect()
}

/// Articles for a category landing page. Unknown keys yield nothing.
pub fn articles_for_category_page<'a>(store: &'a ArticleStore, key: &str) -> &'a [Article] {
    store.articles_by_category(key)
}

/// Articles for the "all articles" listing.
///
/// `None`, [`ALL_FILTER`] and unknown keys select every article; a known
/// category key selects that group only.
pub fn articles_for_listing(store: &ArticleStore, selection: Option<&str>) -> Vec<Article> {
    match selection.and_then(Category::parse) {
        Some(category) => store.group(category).to_vec(),
        None => store.all_articles(),
    }
}

/// Splits articles into featured and regular ones, keeping their order.
pub fn split_featured(articles: &[Article]) -> (Vec<&Article>, Vec<&Article>) {
    articles.iter().partition(|article| article.featured)
}

/// Up to `limit` other articles from the same group as `article_id`.
pub fn related_articles<'a>(
    store: &'a ArticleStore,
    article_id: &str,
    limit: usize,
) -> Vec<&'a Article> {
    let Some((category, _)) = store.find_article(article_id) else {
        return Vec::new();
    };
    store
        .group(category)
        .iter()
        .filter(|article| article.id != article_id)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        articles_for_category_page, articles_for_listing, listing_filter_options, related_articles,
        split_featured, ALL_FILTER,
    };
    use crate::{ArticleStore, Category};

    #[test]
    fn every_category_returns_only_its_own_group() {
        let store = ArticleStore::global();
        for category in Category::ALL {
            let page = articles_for_category_page(store, category.slug());
            assert!(!page.is_empty());
            assert_eq!(page, store.group(category));
            assert!(page
                .iter()
                .all(|article| article.id.starts_with(&format!("{}-", category.slug()))));

            let listing = articles_for_listing(store, Some(category.slug()));
            assert_eq!(listing.as_slice(), page);
        }
    }

    #[test]
    fn category_page_with_unknown_key_is_empty() {
        let store = ArticleStore::global();
        assert!(articles_for_category_page(store, "luxury").is_empty());
        assert!(articles_for_category_page(store, ALL_FILTER).is_empty());
        assert!(articles_for_category_page(store, "").is_empty());
    }

    #[test]
    fn listing_with_unknown_or_absent_key_returns_everything() {
        let store = ArticleStore::global();
        let everything = store.all_articles();
        assert_eq!(articles_for_listing(store, None), everything);
        assert_eq!(articles_for_listing(store, Some(ALL_FILTER)), everything);
        assert_eq!(articles_for_listing(store, Some("luxury")), everything);
    }

    #[test]
    fn split_featured_keeps_source_order() {
        let articles = ArticleStore::global().group(Category::Wellness);
        let (featured, regular) = split_featured(articles);
        let featured: Vec<&str> = featured.iter().map(|a| a.id.as_str()).collect();
        let regular: Vec<&str> = regular.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(featured, vec!["wellness-1"]);
        assert_eq!(regular, vec!["wellness-2", "wellness-3"]);
    }

    #[test]
    fn filter_options_start_with_all() {
        let options = listing_filter_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].value, ALL_FILTER);
        assert_eq!(options[2].label, "Beauty");
    }

    #[test]
    fn related_articles_exclude_the_article_itself() {
        let store = ArticleStore::global();
        let related = related_articles(store, "lifestyle-2", 3);
        let ids: Vec<&str> = related.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["lifestyle-1", "lifestyle-3"]);
        assert!(related_articles(store, "missing", 3).is_empty());
    }
}
