use times_of_fashion_shared::Category;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/collaboration")]
    Collaboration,
    #[at("/all-articles")]
    AllArticles,
    #[at("/blog")]
    Blog,
    #[at("/blog/:category")]
    BlogCategory { category: String },
    #[at("/fashion")]
    Fashion,
    #[at("/beauty")]
    Beauty,
    #[at("/lifestyle")]
    Lifestyle,
    #[at("/celebrity")]
    Celebrity,
    #[at("/culture")]
    Culture,
    #[at("/wellness")]
    Wellness,
    #[at("/article/:id")]
    Article { id: String },
    #[at("/newsletter")]
    Newsletter,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Landing page of a category.
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Fashion => Route::Fashion,
            Category::Beauty => Route::Beauty,
            Category::Lifestyle => Route::Lifestyle,
            Category::Celebrity => Route::Celebrity,
            Category::Culture => Route::Culture,
            Category::Wellness => Route::Wellness,
        }
    }

    /// Category whose landing page this route is.
    pub fn category(&self) -> Option<Category> {
        match self {
            Route::Fashion => Some(Category::Fashion),
            Route::Beauty => Some(Category::Beauty),
            Route::Lifestyle => Some(Category::Lifestyle),
            Route::Celebrity => Some(Category::Celebrity),
            Route::Culture => Some(Category::Culture),
            Route::Wellness => Some(Category::Wellness),
            _ => None,
        }
    }
}

fn switch(route: Route) -> Html {
    if let Some(category) = route.category() {
        return html! { <pages::category::CategoryPage category={Some(category.slug().to_string())} /> };
    }
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::Contact | Route::Collaboration => html! { <pages::contact::ContactPage /> },
        Route::AllArticles => html! { <pages::all_articles::AllArticlesPage /> },
        Route::Blog => html! { <pages::category::CategoryPage /> },
        Route::BlogCategory {
            category,
        } => {
            html! { <pages::category::CategoryPage category={Some(category)} /> }
        },
        Route::Article {
            id,
        } => {
            html! { <pages::article_detail::ArticleDetailPage id={id} /> }
        },
        Route::Newsletter => html! { <pages::newsletter::NewsletterPage /> },
        Route::AdminLogin => html! { <pages::admin_login::AdminLoginPage /> },
        Route::Admin => html! { <pages::admin::AdminPage /> },
        _ => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <Header />
                <div class="app-main">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use times_of_fashion_shared::Category;
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn category_routes_round_trip() {
        for category in Category::ALL {
            let route = Route::for_category(category);
            assert_eq!(route.category(), Some(category));
            assert_eq!(route.to_path(), format!("/{}", category.slug()));
        }
        assert_eq!(Route::Blog.category(), None);
    }

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!(Route::recognize("/collaboration"), Some(Route::Collaboration));
        assert_eq!(
            Route::recognize("/blog/beauty"),
            Some(Route::BlogCategory {
                category: "beauty".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/article/culture-2"),
            Some(Route::Article {
                id: "culture-2".to_string()
            })
        );
        assert_eq!(Route::recognize("/admin/login"), Some(Route::AdminLogin));
        assert_eq!(Route::recognize("/press"), Some(Route::NotFound));
    }
}
