use times_of_fashion_shared::{
    articles_for_category_page, split_featured, Article, ArticleStore, Category,
};
use yew::prelude::*;

use crate::{
    components::article_card::{ArticleCard, CardVariant},
    hooks::use_scroll_to_top,
};

const ALL_TITLE: &str = "All Articles";
const ALL_DESCRIPTION: &str =
    "Explore our complete collection of fashion, beauty, and lifestyle content";
const ALL_HERO: &str = "/assets/hero1.jpg";

#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    /// Category key from the URL; `None` lists every article.
    #[prop_or_default]
    pub category: Option<String>,
}

/// What a category landing page shows for a given key.
#[derive(Debug, PartialEq)]
struct CategoryView {
    title: String,
    description: String,
    hero_image: &'static str,
    accent: Option<&'static str>,
    articles: Vec<Article>,
}

fn category_view(store: &ArticleStore, key: Option<&str>) -> CategoryView {
    let Some(key) = key else {
        return CategoryView {
            title: ALL_TITLE.to_string(),
            description: ALL_DESCRIPTION.to_string(),
            hero_image: ALL_HERO,
            accent: None,
            articles: store.all_articles(),
        };
    };

    match Category::parse(key) {
        Some(category) => CategoryView {
            title: category.page_title().to_string(),
            description: category.description().to_string(),
            hero_image: category.hero_image(),
            accent: Some(category.accent_color()),
            articles: articles_for_category_page(store, category.slug()).to_vec(),
        },
        // Unknown keys keep the layout but list nothing.
        None => CategoryView {
            title: key.to_string(),
            description: String::new(),
            hero_image: ALL_HERO,
            accent: None,
            articles: articles_for_category_page(store, key).to_vec(),
        },
    }
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    use_scroll_to_top();

    let view = category_view(ArticleStore::global(), props.category.as_deref());
    let (featured, regular) = split_featured(&view.articles);
    let accent_class = view.accent.map(|accent| format!("accent-{accent}"));

    html! {
        <main class={classes!("category-page", accent_class)}>
            <section
                class="page-hero"
                style={format!("background-image: url('{}')", view.hero_image)}
            >
                <div class="page-hero-overlay"></div>
                <div class="container page-hero-content">
                    <h1>{ &view.title }</h1>
                    if !view.description.is_empty() {
                        <p>{ &view.description }</p>
                    }
                </div>
            </section>

            if !featured.is_empty() {
                <section class="container featured-section">
                    <h2 class="section-title">{ "Featured Articles" }</h2>
                    <div class="featured-grid">
                        { for featured.into_iter().map(|article| html! {
                            <ArticleCard
                                key={article.id.clone()}
                                article={article.clone()}
                                variant={CardVariant::Featured}
                            />
                        }) }
                    </div>
                </section>
            }

            <section class="container all-section">
                <h2 class="section-title">{ format!("All {} Articles", view.title) }</h2>
                if view.articles.is_empty() {
                    <div class="empty-state">
                        <p>{ "No articles found in this category." }</p>
                    </div>
                } else {
                    <div class="article-grid">
                        { for regular.into_iter().map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} />
                        }) }
                    </div>
                }
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use times_of_fashion_shared::{ArticleStore, Category};

    use super::{category_view, ALL_TITLE};

    #[test]
    fn known_category_uses_its_copy_and_group() {
        let store = ArticleStore::global();
        let view = category_view(store, Some("Beauty"));
        assert_eq!(view.title, Category::Beauty.page_title());
        assert_eq!(view.hero_image, Category::Beauty.hero_image());
        assert_eq!(view.articles, store.group(Category::Beauty));
    }

    #[test]
    fn missing_category_lists_everything() {
        let store = ArticleStore::global();
        let view = category_view(store, None);
        assert_eq!(view.title, ALL_TITLE);
        assert_eq!(view.articles.len(), store.len());
    }

    #[test]
    fn unknown_category_lists_nothing() {
        let view = category_view(ArticleStore::global(), Some("press"));
        assert!(view.articles.is_empty());
        assert_eq!(view.accent, None);
    }
}
