use std::rc::Rc;

use gloo_timers::callback::Interval;
use times_of_fashion_shared::{Article, ArticleStore, Category};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        article_card::{ArticleCard, CardVariant},
        category_highlights::CategoryHighlights,
        newsletter_form::NewsletterForm,
    },
    hooks::{scroll_to_element, use_scroll_to_top},
    router::Route,
};

const HERO_IMAGES: [&str; 5] = [
    "/assets/hero1.jpg",
    "/assets/hero5.jpg",
    "/assets/hero3.jpg",
    "/assets/hero4.jpg",
    "/assets/hero2.jpg",
];
const HERO_ROTATE_MS: u32 = 5000;
const LATEST_SECTION_ID: &str = "latest-articles";

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="home-page">
            <Hero />
            <LatestArticles />
            <CategoryHighlights />
            <section class="newsletter-section">
                <div class="container newsletter-inner">
                    <div class="section-heading">
                        <h2>{ "Stay In Style" }</h2>
                        <p>
                            { "Get the week's most important stories on fashion, beauty and \
                               culture delivered straight to your inbox." }
                        </p>
                    </div>
                    <NewsletterForm />
                </div>
            </section>
        </main>
    }
}

/// Index of the visible hero slide.
#[derive(Default, PartialEq)]
struct Slide(usize);

impl Reducible for Slide {
    /// Uniform random roll in `[0, 1)`.
    type Action = f64;

    fn reduce(self: Rc<Self>, roll: f64) -> Rc<Self> {
        Rc::new(Slide(next_slide(self.0, HERO_IMAGES.len(), roll)))
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let slide = use_reducer(Slide::default);
    let current = slide.0;

    {
        let dispatcher = slide.dispatcher();
        use_effect_with((), move |_| {
            let interval = Interval::new(HERO_ROTATE_MS, move || {
                dispatcher.dispatch(js_sys::Math::random());
            });
            move || drop(interval)
        });
    }

    let explore = Callback::from(|_: MouseEvent| scroll_to_element(LATEST_SECTION_ID));

    html! {
        <section class="hero">
            <div class="hero-slides">
                { for HERO_IMAGES.iter().enumerate().map(|(index, src)| html! {
                    <img
                        src={*src}
                        alt={format!("Slide {index}")}
                        class={classes!("hero-slide", (index == current).then_some("hero-slide-active"))}
                    />
                }) }
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    { "When Style" }
                    <span class="hero-title-accent">{ "Becomes Story" }</span>
                </h1>
                <p class="hero-subtitle">
                    { "Dive into the pulse of fashion's most coveted secrets - where runway dreams \
                       become street reality" }
                </p>
                <div class="hero-actions">
                    <button type="button" class="btn btn-primary btn-lg" onclick={explore}>
                        { "Explore Latest Trends" }
                    </button>
                    <Link<Route> to={Route::About} classes={classes!("btn", "btn-ghost", "btn-lg")}>
                        { "About Us" }
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[function_component(LatestArticles)]
fn latest_articles() -> Html {
    let articles = latest_articles_from(ArticleStore::global());
    let mut articles = articles.into_iter();
    let lead = articles.next();

    html! {
        <section id={LATEST_SECTION_ID} class="latest-articles">
            <div class="container">
                <div class="section-heading">
                    <h2>{ "Style " }<span class="text-accent">{ "Chronicles" }</span></h2>
                    <p>
                        { "Stay ahead of the curve with our curated selection of fashion insights, \
                           beauty revelations, and lifestyle inspiration" }
                    </p>
                </div>
                <div class="latest-grid">
                    if let Some(lead) = lead {
                        <ArticleCard article={lead} variant={CardVariant::Featured} />
                    }
                    <div class="latest-list">
                        { for articles.map(|article| html! {
                            <ArticleCard key={article.id.clone()} article={article.clone()} />
                        }) }
                    </div>
                </div>
                <div class="section-footer">
                    <Link<Route> to={Route::AllArticles} classes={classes!("btn", "btn-outline")}>
                        { "View All Articles" }
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

/// Lead article of each category, featured ones first.
fn latest_articles_from(store: &ArticleStore) -> Vec<Article> {
    let mut picks: Vec<Article> = Category::ALL
        .into_iter()
        .filter_map(|category| store.group(category).first().cloned())
        .collect();
    picks.sort_by_key(|article| !article.featured);
    picks
}

/// Random slide other than `current`; `roll` is uniform in `[0, 1)`.
fn next_slide(current: usize, len: usize, roll: f64) -> usize {
    if len < 2 {
        return 0;
    }
    let pick = ((roll * (len - 1) as f64) as usize).min(len - 2);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}

#[cfg(test)]
mod tests {
    use times_of_fashion_shared::ArticleStore;

    use super::{latest_articles_from, next_slide};

    #[test]
    fn next_slide_never_repeats() {
        for current in 0..5 {
            for step in 0..10 {
                let next = next_slide(current, 5, step as f64 / 10.0);
                assert_ne!(next, current);
                assert!(next < 5);
            }
        }
        assert_eq!(next_slide(0, 1, 0.7), 0);
        assert_eq!(next_slide(1, 5, 0.999), 4);
    }

    #[test]
    fn latest_lists_one_article_per_category_featured_first() {
        let latest = latest_articles_from(ArticleStore::global());
        assert_eq!(latest.len(), 6);
        let first_regular = latest.iter().position(|article| !article.featured);
        if let Some(first_regular) = first_regular {
            assert!(latest[first_regular..].iter().all(|article| !article.featured));
        }
    }
}
