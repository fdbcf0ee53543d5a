use times_of_fashion_shared::{ArticleStore, Category};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// Grid of category cards on the home page.
#[function_component(CategoryHighlights)]
pub fn category_highlights() -> Html {
    let store = ArticleStore::global();

    html! {
        <section class="category-highlights">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Discover Our Categories" }</h2>
                    <p>{ "Multiple worlds of style intelligence, infinite possibilities for transformation" }</p>
                </div>
                <div class="category-grid">
                    { for Category::ALL.into_iter().map(|category| {
                        let count = store.group(category).len();
                        html! {
                            <Link<Route> to={Route::for_category(category)} classes={classes!("category-card")}>
                                <img src={category.hero_image()} alt={category.label()} loading="lazy" />
                                <div class="category-card-overlay">
                                    <span class="category-count">{ article_count_label(count) }</span>
                                    <h3>{ category.label() }</h3>
                                    <p>{ category.description() }</p>
                                    <span class="category-cta">
                                        { "Explore Category" }
                                        <i class="fas fa-arrow-right" aria-hidden="true"></i>
                                    </span>
                                </div>
                            </Link<Route>>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

/// Zero-padded count, e.g. `03 articles`.
fn article_count_label(count: usize) -> String {
    format!("{count:02} {}", if count == 1 { "article" } else { "articles" })
}

#[cfg(test)]
mod tests {
    use super::article_count_label;

    #[test]
    fn counts_are_zero_padded() {
        assert_eq!(article_count_label(3), "03 articles");
        assert_eq!(article_count_label(1), "01 article");
        assert_eq!(article_count_label(12), "12 articles");
    }
}
