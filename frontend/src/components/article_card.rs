use chrono::NaiveDate;
use times_of_fashion_shared::Article;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

const CARD_TAG_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    /// Large card in a "Featured Articles" section: full excerpt, date and
    /// every tag.
    Featured,
    #[default]
    Standard,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    #[prop_or_default]
    pub variant: CardVariant,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let featured_section = props.variant == CardVariant::Featured;
    let detail_route = Route::Article {
        id: article.id.clone(),
    };
    let tag_limit = if featured_section { article.tags.len() } else { CARD_TAG_LIMIT };

    html! {
        <article class={classes!("article-card", featured_section.then_some("article-card-featured"))}>
            <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                <img src={article.image.clone()} alt={article.title.clone()} loading="lazy" />
                if article.featured {
                    <span class="badge badge-featured">{ "Featured" }</span>
                }
            </Link<Route>>
            <div class="article-card-body">
                <h3 class="article-title">
                    <Link<Route> to={detail_route} classes={classes!("article-title-link")}>
                        { &article.title }
                    </Link<Route>>
                </h3>
                <p class="article-excerpt">{ &article.excerpt }</p>
                <div class="post-meta">
                    <span class="post-meta-item">
                        <i class="fas fa-user" aria-hidden="true"></i>
                        { &article.author }
                    </span>
                    if featured_section {
                        <span class="post-meta-item">
                            <i class="far fa-calendar-alt" aria-hidden="true"></i>
                            { short_date(&article.date) }
                        </span>
                    }
                    <span class="post-meta-item">
                        <i class="far fa-clock" aria-hidden="true"></i>
                        { article.read_time_label() }
                    </span>
                </div>
                <ul class="post-tags">
                    { for visible_tags(&article.tags, tag_limit).iter().map(|tag| html! {
                        <li><span class="tag-pill">{ tag }</span></li>
                    }) }
                </ul>
            </div>
        </article>
    }
}

pub fn visible_tags(tags: &[String], limit: usize) -> &[String] {
    &tags[..tags.len().min(limit)]
}

/// `2024-03-15` as `March 15, 2024`. Unparseable input is returned as-is.
pub fn long_date(date: &str) -> String {
    format_date(date, "%B %-d, %Y")
}

/// `2024-03-15` as `Mar 15, 2024`.
pub fn short_date(date: &str) -> String {
    format_date(date, "%b %-d, %Y")
}

fn format_date(date: &str, pattern: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(day) => day.format(pattern).to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_date, short_date, visible_tags};

    #[test]
    fn cards_show_at_most_three_tags() {
        let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|t| t.to_string()).collect();
        assert_eq!(visible_tags(&tags, 3), &tags[..3]);
        assert_eq!(visible_tags(&tags[..1], 3), &tags[..1]);
    }

    #[test]
    fn dates_render_in_english() {
        assert_eq!(long_date("2024-03-15"), "March 15, 2024");
        assert_eq!(short_date("2024-12-01"), "Dec 1, 2024");
        assert_eq!(long_date("2024-13-01"), "2024-13-01");
        assert_eq!(short_date("soon"), "soon");
        assert_eq!(long_date("2023-02-30"), "2023-02-30");
        assert_eq!(long_date("2024-02-29"), "February 29, 2024");
    }
}
