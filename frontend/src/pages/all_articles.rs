use times_of_fashion_shared::{
    filter::{articles_for_listing, listing_filter_options, ALL_FILTER},
    ArticleStore, Category,
};
use yew::prelude::*;

use crate::{components::article_card::ArticleCard, hooks::use_scroll_to_top};

#[function_component(AllArticlesPage)]
pub fn all_articles_page() -> Html {
    use_scroll_to_top();
    let selected = use_state(|| ALL_FILTER.to_string());

    let articles = articles_for_listing(ArticleStore::global(), Some(selected.as_str()));
    let summary = listing_summary(articles.len(), &selected);

    html! {
        <main class="all-articles-page">
            <section class="page-hero page-hero-plain">
                <div class="container page-hero-content">
                    <h1>{ "All " }<span class="text-accent">{ "Articles" }</span></h1>
                    <p>
                        { "Explore our complete collection of fashion insights, beauty tips, and \
                           lifestyle inspiration" }
                    </p>
                </div>
            </section>

            <section class="container listing">
                <div class="filter-bar" role="toolbar" aria-label="Filter by category">
                    { for listing_filter_options().into_iter().map(|option| {
                        let active = selected.as_str() == option.value;
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(option.value.to_string()))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("filter-button", active.then_some("filter-button-active"))}
                                aria-pressed={active.to_string()}
                                {onclick}
                            >
                                { option.label }
                            </button>
                        }
                    }) }
                </div>

                <p class="listing-summary">{ summary }</p>

                if articles.is_empty() {
                    <div class="empty-state">
                        <p>{ "No articles found in this category." }</p>
                    </div>
                } else {
                    <div class="article-grid">
                        { for articles.into_iter().map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} />
                        }) }
                    </div>
                }
            </section>
        </main>
    }
}

/// "Showing 3 articles in Beauty"; the category suffix is omitted for "All".
fn listing_summary(count: usize, selection: &str) -> String {
    let noun = if count == 1 { "article" } else { "articles" };
    match Category::parse(selection) {
        Some(category) => format!("Showing {count} {noun} in {}", category.label()),
        None => format!("Showing {count} {noun}"),
    }
}

#[cfg(test)]
mod tests {
    use super::listing_summary;

    #[test]
    fn summary_names_the_selected_category() {
        assert_eq!(listing_summary(18, "all"), "Showing 18 articles");
        assert_eq!(listing_summary(3, "beauty"), "Showing 3 articles in Beauty");
        assert_eq!(listing_summary(1, "culture"), "Showing 1 article in Culture");
    }
}
