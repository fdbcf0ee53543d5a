use times_of_fashion_shared::{filter::related_articles, ArticleStore};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        article_card::{long_date, ArticleCard},
        toast::ToastMessage,
    },
    hooks::{use_scroll_to_top, use_toast},
    router::Route,
    share::{share_page, ShareOutcome},
};

const RELATED_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct ArticleDetailProps {
    pub id: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    use_scroll_to_top();
    let toast = use_toast();
    let store = ArticleStore::global();

    let Some((category, article)) = store.find_article(&props.id) else {
        return html! { <Redirect<Route> to={Route::Home} /> };
    };
    let related = related_articles(store, &article.id, RELATED_LIMIT);
    let category_route = Route::for_category(category);

    let on_share = {
        let title = article.title.clone();
        let excerpt = article.excerpt.clone();
        Callback::from(move |_: MouseEvent| {
            if share_page(&title, &excerpt) == ShareOutcome::Copied {
                toast.emit(ToastMessage::info("Link copied", "The article link is on your clipboard."));
            }
        })
    };

    html! {
        <main class="article-page">
            <div class="container article-breadcrumb">
                <Link<Route> to={category_route.clone()} classes={classes!("back-link")}>
                    <i class="fas fa-arrow-left" aria-hidden="true"></i>
                    { format!("Back to {}", category.label()) }
                </Link<Route>>
            </div>

            <article class="container article-body">
                <header class="article-header">
                    if article.featured {
                        <span class={classes!("badge", "badge-featured", format!("accent-{}", category.accent_color()))}>
                            { "Featured Article" }
                        </span>
                    }
                    <h1 class="article-heading">{ &article.title }</h1>
                    <p class="article-lead">{ &article.excerpt }</p>
                    <div class="article-meta">
                        <span class="post-meta-item">
                            <i class="fas fa-user" aria-hidden="true"></i>
                            { &article.author }
                        </span>
                        <span class="post-meta-item">
                            <i class="far fa-calendar-alt" aria-hidden="true"></i>
                            { long_date(&article.date) }
                        </span>
                        <span class="post-meta-item">
                            <i class="far fa-clock" aria-hidden="true"></i>
                            { article.read_time_label() }
                        </span>
                        <button type="button" class="btn btn-ghost share-button" onclick={on_share}>
                            <i class="fas fa-share-alt" aria-hidden="true"></i>
                            { "Share" }
                        </button>
                    </div>
                </header>

                <img class="article-hero-image" src={article.image.clone()} alt={article.title.clone()} />

                <div class="article-content">
                    { for article.paragraphs().map(|paragraph| html! { <p>{ paragraph }</p> }) }
                </div>

                if !article.tags.is_empty() {
                    <section class="article-tags">
                        <h3>{ "Related Topics" }</h3>
                        <ul class="post-tags">
                            { for article.tags.iter().map(|tag| html! {
                                <li><span class="tag-pill">{ tag }</span></li>
                            }) }
                        </ul>
                    </section>
                }

                <section class="author-box">
                    <div class="author-avatar" aria-hidden="true">
                        { author_initials(&article.author) }
                    </div>
                    <div>
                        <h4>{ &article.author }</h4>
                        <p class="text-muted">{ "Fashion & Lifestyle Writer" }</p>
                    </div>
                </section>
            </article>

            if !related.is_empty() {
                <section class="container related-section">
                    <h2 class="section-title">{ format!("More {} Articles", category.label()) }</h2>
                    <div class="article-grid">
                        { for related.into_iter().map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} />
                        }) }
                    </div>
                    <div class="section-footer">
                        <Link<Route> to={category_route} classes={classes!("btn", "btn-outline")}>
                            { format!("More {} Articles", category.label()) }
                        </Link<Route>>
                    </div>
                </section>
            }
        </main>
    }
}

fn author_initials(author: &str) -> String {
    author
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::author_initials;

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(author_initials("Elena Rodriguez"), "ER");
        assert_eq!(author_initials("dr. maya lin park"), "DM");
        assert_eq!(author_initials(""), "");
    }
}
