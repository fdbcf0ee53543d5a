use chrono::DateTime;
use times_of_fashion_shared::{
    models::{
        AdminSettings, BlogPost, BlogPostPatch, BlogPostStatus, NewBlogPost, NewsletterFrequency,
        NewsletterSettings, NewsletterSubscription, SeoSettings, SiteAnalytics, SocialMedia,
    },
    Category,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, AdminApiError},
    components::{
        loading_spinner::LoadingSpinner, stats_card::StatsCard, toast::ToastMessage,
    },
    config::{CONTACT_EMAIL, SITE_NAME},
    hooks::use_toast,
    router::Route,
    session::{self, AdminSession},
};

const DEFAULT_AUTHOR: &str = "Times of Fashion Admin";
const CSV_FILE_NAME: &str = "newsletter-subscriptions.csv";
const CSV_HEADER: [&str; 5] = ["Email", "First Name", "Source", "Subscribed Date", "Status"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Posts,
    Subscribers,
    Analytics,
    Settings,
}

impl AdminTab {
    const ALL: [AdminTab; 4] =
        [AdminTab::Posts, AdminTab::Subscribers, AdminTab::Analytics, AdminTab::Settings];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Posts => "Blog Management",
            AdminTab::Subscribers => "Subscribers",
            AdminTab::Analytics => "Analytics",
            AdminTab::Settings => "Settings",
        }
    }
}

/// Shared by every tab: what to do when the backend rejects the token.
#[derive(Properties, PartialEq)]
struct TabProps {
    session: AdminSession,
    on_unauthorized: Callback<()>,
    /// Fired after a change that affects the dashboard counters.
    #[prop_or_default]
    on_changed: Callback<()>,
}

fn report_failure(
    err: AdminApiError,
    context: &str,
    toast: &Callback<ToastMessage>,
    on_unauthorized: &Callback<()>,
) {
    match err {
        AdminApiError::Unauthorized => on_unauthorized.emit(()),
        AdminApiError::Other(message) => {
            web_sys::console::error_1(&format!("{context}: {message}").into());
            toast.emit(ToastMessage::error("Error", context.to_string()));
        },
    }
}

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let navigator = use_navigator();
    let toast = use_toast();
    let admin_session = use_state(session::load_session);
    let tab = use_state(|| AdminTab::Posts);
    let analytics = use_state(SiteAnalytics::default);
    let analytics_seq = use_state(|| 0u32);

    {
        let navigator = navigator.clone();
        use_effect_with(admin_session.is_some(), move |signed_in| {
            if !*signed_in {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::AdminLogin);
                }
            }
            || ()
        });
    }

    let end_session = {
        let admin_session = admin_session.clone();
        let navigator = navigator.clone();
        let toast = toast.clone();
        move |message: ToastMessage| {
            session::clear_session();
            admin_session.set(None);
            toast.emit(message);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AdminLogin);
            }
        }
    };

    let on_logout = {
        let end_session = end_session.clone();
        Callback::from(move |_: MouseEvent| {
            end_session(ToastMessage::info("Logged Out", "You have been logged out successfully."))
        })
    };

    let on_unauthorized = Callback::from(move |_: ()| {
        end_session(ToastMessage::error("Session Expired", "Please sign in again."))
    });

    let on_changed = {
        let analytics_seq = analytics_seq.clone();
        Callback::from(move |_: ()| analytics_seq.set(analytics_seq.wrapping_add(1)))
    };

    {
        let analytics = analytics.clone();
        let admin_session = (*admin_session).clone();
        let on_unauthorized = on_unauthorized.clone();
        let toast = toast.clone();
        use_effect_with((*analytics_seq, admin_session), move |(_, admin_session)| {
            if let Some(admin_session) = admin_session.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_admin_analytics(&admin_session).await {
                        Ok(counters) => analytics.set(counters),
                        Err(err) => report_failure(
                            err,
                            "Failed to load analytics",
                            &toast,
                            &on_unauthorized,
                        ),
                    }
                });
            }
            || ()
        });
    }

    let Some(active) = (*admin_session).clone() else {
        return html! {};
    };

    html! {
        <main class="admin-page">
            <header class="admin-header">
                <div class="container admin-header-inner">
                    <div>
                        <h1>{ "Times of Fashion Admin" }</h1>
                        <p class="text-muted">
                            { "Manage your fashion blog and newsletter subscriptions" }
                        </p>
                        <p class="admin-welcome">{ format!("Welcome back, {}", active.email) }</p>
                    </div>
                    <button type="button" class="btn btn-outline" onclick={on_logout}>
                        <i class="fas fa-sign-out-alt" aria-hidden="true"></i>
                        { "Logout" }
                    </button>
                </div>
            </header>

            <div class="container admin-body">
                <div class="stats-grid">
                    <StatsCard title="Total Blog Posts" value={analytics.total_blogs} icon="fa-file-alt" />
                    <StatsCard
                        title="Newsletter Subscribers"
                        value={analytics.total_subscriptions}
                        icon="fa-envelope"
                    />
                    <StatsCard title="Registered Users" value={analytics.total_users} icon="fa-users" />
                </div>

                <nav class="admin-tabs" role="tablist">
                    { for AdminTab::ALL.into_iter().map(|entry| {
                        let selected = *tab == entry;
                        let onclick = {
                            let tab = tab.clone();
                            Callback::from(move |_: MouseEvent| tab.set(entry))
                        };
                        html! {
                            <button
                                type="button"
                                role="tab"
                                class={classes!("admin-tab", selected.then_some("admin-tab-active"))}
                                aria-selected={selected.to_string()}
                                {onclick}
                            >
                                { entry.label() }
                            </button>
                        }
                    }) }
                </nav>

                {
                    match *tab {
                        AdminTab::Posts => html! {
                            <PostsTab
                                session={active.clone()}
                                on_unauthorized={on_unauthorized.clone()}
                                on_changed={on_changed.clone()}
                            />
                        },
                        AdminTab::Subscribers => html! {
                            <SubscribersTab session={active.clone()} on_unauthorized={on_unauthorized.clone()} />
                        },
                        AdminTab::Analytics => html! {
                            <AnalyticsTab analytics={(*analytics).clone()} />
                        },
                        AdminTab::Settings => html! {
                            <SettingsTab session={active.clone()} on_unauthorized={on_unauthorized.clone()} />
                        },
                    }
                }
            </div>
        </main>
    }
}

#[derive(Clone, Copy)]
enum PostField {
    Title,
    Content,
    Excerpt,
    Category,
    Tags,
    Author,
    Status,
}

/// Editable copy of a post; tags are kept as the comma separated input.
#[derive(Clone, Debug, PartialEq)]
struct PostForm {
    title: String,
    content: String,
    excerpt: String,
    category: String,
    tags: String,
    author: String,
    status: BlogPostStatus,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            category: String::new(),
            tags: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            status: BlogPostStatus::Published,
        }
    }
}

impl PostForm {
    fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            tags: post.tags.join(", "),
            author: post.author.clone(),
            status: post.status,
        }
    }

    fn with(&self, field: PostField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            PostField::Title => next.title = value,
            PostField::Content => next.content = value,
            PostField::Excerpt => next.excerpt = value,
            PostField::Category => next.category = value,
            PostField::Tags => next.tags = value,
            PostField::Author => next.author = value,
            PostField::Status => next.status = parse_status(&value),
        }
        next
    }

    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    fn to_new_post(&self, now_ms: i64) -> NewBlogPost {
        NewBlogPost {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            excerpt: self.excerpt.trim().to_string(),
            category: self.category.clone(),
            tags: split_tags(&self.tags),
            featured_image: None,
            author: self.author.trim().to_string(),
            status: self.status,
            published_at: (self.status == BlogPostStatus::Published).then_some(now_ms),
        }
    }

    fn to_patch(&self) -> BlogPostPatch {
        BlogPostPatch {
            title: Some(self.title.trim().to_string()),
            content: Some(self.content.clone()),
            excerpt: Some(self.excerpt.trim().to_string()),
            category: Some(self.category.clone()),
            tags: Some(split_tags(&self.tags)),
            featured_image: None,
            status: Some(self.status),
        }
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_status(value: &str) -> BlogPostStatus {
    match value {
        "draft" => BlogPostStatus::Draft,
        "archived" => BlogPostStatus::Archived,
        _ => BlogPostStatus::Published,
    }
}

fn field_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(PostsTab)]
fn posts_tab(props: &TabProps) -> Html {
    let toast = use_toast();
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let form = use_state(PostForm::default);
    let editing = use_state(|| None::<String>);
    let show_form = use_state(|| false);
    let reload_seq = use_state(|| 0u32);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        use_effect_with(*reload_seq, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_admin_posts(&session).await {
                    Ok(items) => posts.set(items),
                    Err(err) => {
                        report_failure(err, "Failed to load blog posts", &toast, &on_unauthorized)
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let reload = {
        let reload_seq = reload_seq.clone();
        let on_changed = props.on_changed.clone();
        move || {
            reload_seq.set(reload_seq.wrapping_add(1));
            on_changed.emit(());
        }
    };

    let reset_form = {
        let form = form.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        move || {
            form.set(PostForm::default());
            editing.set(None);
            show_form.set(false);
        }
    };

    let on_field = |field: PostField| {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = field_value(&event) {
                form.set(form.with(field, value));
            }
        })
    };
    let on_input = |field: PostField| on_field(field).reform(|event: InputEvent| event.into());

    let on_new = {
        let reset_form = reset_form.clone();
        let show_form = show_form.clone();
        Callback::from(move |_: MouseEvent| {
            reset_form();
            show_form.set(true);
        })
    };

    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form())
    };

    let on_submit = {
        let form = form.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let toast = toast.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        let reload = reload.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !form.is_complete() {
                toast.emit(ToastMessage::error("Missing Fields", "Please fill in title and content"));
                return;
            }
            saving.set(true);

            let draft = (*form).clone();
            let editing_id = (*editing).clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let session = session.clone();
            let on_unauthorized = on_unauthorized.clone();
            let reload = reload.clone();
            let reset_form = reset_form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &editing_id {
                    Some(id) => api::update_admin_post(&session, id, &draft.to_patch()).await,
                    None => api::create_admin_post(&session, &draft.to_new_post(session::now_ms()))
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        let description = if editing_id.is_some() {
                            "Blog post updated successfully!"
                        } else {
                            "Blog post created successfully!"
                        };
                        toast.emit(ToastMessage::info("Success", description));
                        reset_form();
                        reload();
                    },
                    Err(err) => {
                        report_failure(err, "Failed to save blog post", &toast, &on_unauthorized)
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_edit = {
        let form = form.clone();
        let editing = editing.clone();
        let show_form = show_form.clone();
        Callback::from(move |post: BlogPost| {
            form.set(PostForm::from_post(&post));
            editing.set(post.id.clone());
            show_form.set(true);
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this blog post?") {
                return;
            }
            let toast = toast.clone();
            let session = session.clone();
            let on_unauthorized = on_unauthorized.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_admin_post(&session, &id).await {
                    Ok(()) => {
                        toast.emit(ToastMessage::info("Success", "Blog post deleted successfully!"));
                        reload();
                    },
                    Err(err) => {
                        report_failure(err, "Failed to delete blog post", &toast, &on_unauthorized)
                    },
                }
            });
        })
    };

    let busy = *saving;

    html! {
        <section class="card admin-panel">
            <div class="admin-panel-header">
                <h2>{ "Blog Posts" }</h2>
                <button type="button" class="btn btn-primary" onclick={on_new}>
                    <i class="fas fa-plus" aria-hidden="true"></i>
                    { "New Post" }
                </button>
            </div>

            if *show_form {
                <form class="admin-post-form" onsubmit={on_submit}>
                    <h3>{ if editing.is_some() { "Edit Blog Post" } else { "Create New Blog Post" } }</h3>
                    <div class="form-row">
                        <label class="form-field">
                            <span>{ "Title *" }</span>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Enter blog title"
                                value={form.title.clone()}
                                oninput={on_input(PostField::Title)}
                                disabled={busy}
                            />
                        </label>
                        <label class="form-field">
                            <span>{ "Category" }</span>
                            <select class="form-input" onchange={on_field(PostField::Category)} disabled={busy}>
                                <option value="" selected={form.category.is_empty()}>{ "Select category" }</option>
                                { for Category::ALL.into_iter().map(|category| html! {
                                    <option value={category.slug()} selected={form.category == category.slug()}>
                                        { category.label() }
                                    </option>
                                }) }
                            </select>
                        </label>
                    </div>
                    <label class="form-field">
                        <span>{ "Excerpt" }</span>
                        <textarea
                            class="form-input"
                            rows="2"
                            placeholder="Brief description of the post"
                            value={form.excerpt.clone()}
                            oninput={on_input(PostField::Excerpt)}
                            disabled={busy}
                        />
                    </label>
                    <label class="form-field">
                        <span>{ "Content *" }</span>
                        <textarea
                            class="form-input form-textarea-tall"
                            rows="12"
                            placeholder="Write your blog content here..."
                            value={form.content.clone()}
                            oninput={on_input(PostField::Content)}
                            disabled={busy}
                        />
                    </label>
                    <div class="form-row form-row-3">
                        <label class="form-field">
                            <span>{ "Tags (comma separated)" }</span>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="fashion, style, trends"
                                value={form.tags.clone()}
                                oninput={on_input(PostField::Tags)}
                                disabled={busy}
                            />
                        </label>
                        <label class="form-field">
                            <span>{ "Author" }</span>
                            <input
                                type="text"
                                class="form-input"
                                placeholder="Author name"
                                value={form.author.clone()}
                                oninput={on_input(PostField::Author)}
                                disabled={busy}
                            />
                        </label>
                        <label class="form-field">
                            <span>{ "Status" }</span>
                            <select class="form-input" onchange={on_field(PostField::Status)} disabled={busy}>
                                { for [BlogPostStatus::Draft, BlogPostStatus::Published, BlogPostStatus::Archived]
                                    .into_iter()
                                    .map(|status| html! {
                                        <option value={status.as_str()} selected={form.status == status}>
                                            { status_label(status) }
                                        </option>
                                    }) }
                            </select>
                        </label>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            {
                                if busy {
                                    "Saving..."
                                } else if editing.is_some() {
                                    "Update Post"
                                } else {
                                    "Create Post"
                                }
                            }
                        </button>
                        <button type="button" class="btn btn-outline" onclick={on_cancel} disabled={busy}>
                            { "Cancel" }
                        </button>
                    </div>
                </form>
            }

            if *loading {
                <LoadingSpinner label="Loading posts..." />
            } else if posts.is_empty() {
                <div class="empty-state">
                    <p>{ "No blog posts yet" }</p>
                    <p class="text-muted">{ "Create your first blog post to get started" }</p>
                </div>
            } else {
                <ul class="admin-post-list">
                    { for posts.iter().map(|post| {
                        let edit = {
                            let on_edit = on_edit.clone();
                            let post = post.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(post.clone()))
                        };
                        let delete = post.id.clone().map(|id| {
                            let on_delete = on_delete.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        });
                        html! {
                            <li class="admin-post-row">
                                <div class="admin-post-main">
                                    <div class="admin-post-title">
                                        <h4>{ &post.title }</h4>
                                        <span class={classes!("status-badge", format!("status-{}", post.status.as_str()))}>
                                            { post.status.as_str() }
                                        </span>
                                    </div>
                                    <p class="text-muted">{ &post.excerpt }</p>
                                    <div class="post-meta">
                                        <span class="post-meta-item">
                                            <i class="far fa-calendar-alt" aria-hidden="true"></i>
                                            { post_date_label(post) }
                                        </span>
                                        <span class="post-meta-item">
                                            <i class="fas fa-user" aria-hidden="true"></i>
                                            { &post.author }
                                        </span>
                                        <span class="post-meta-item">
                                            <i class="fas fa-eye" aria-hidden="true"></i>
                                            { format!("{} views", post.view_count) }
                                        </span>
                                    </div>
                                </div>
                                <div class="admin-post-actions">
                                    <button type="button" class="btn btn-outline btn-sm" aria-label="Edit" onclick={edit}>
                                        <i class="fas fa-edit"></i>
                                    </button>
                                    if let Some(delete) = delete {
                                        <button type="button" class="btn btn-danger btn-sm" aria-label="Delete" onclick={delete}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    }
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            }
        </section>
    }
}

fn status_label(status: BlogPostStatus) -> &'static str {
    match status {
        BlogPostStatus::Draft => "Draft",
        BlogPostStatus::Published => "Published",
        BlogPostStatus::Archived => "Archived",
    }
}

fn post_date_label(post: &BlogPost) -> String {
    match post.published_at.or((post.created_at > 0).then_some(post.created_at)) {
        Some(ms) => format_day(ms),
        None => "Draft".to_string(),
    }
}

#[function_component(SubscribersTab)]
fn subscribers_tab(props: &TabProps) -> Html {
    let toast = use_toast();
    let subscriptions = use_state(Vec::<NewsletterSubscription>::new);
    let loading = use_state(|| true);

    {
        let subscriptions = subscriptions.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_admin_subscriptions(&session, None).await {
                    Ok(items) => subscriptions.set(items),
                    Err(err) => report_failure(
                        err,
                        "Failed to load subscriptions",
                        &toast,
                        &on_unauthorized,
                    ),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_export = {
        let subscriptions = subscriptions.clone();
        Callback::from(move |_: MouseEvent| {
            let exported = subscriptions_csv(&subscriptions)
                .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))
                .and_then(|csv| download_text(CSV_FILE_NAME, "text/csv", &csv));
            if let Err(err) = exported {
                web_sys::console::error_1(&err);
                toast.emit(ToastMessage::error("Export Failed", "Could not create the CSV file."));
            }
        })
    };

    html! {
        <section class="card admin-panel">
            <div class="admin-panel-header">
                <h2>{ format!("Newsletter Subscribers ({})", subscriptions.len()) }</h2>
                <button
                    type="button"
                    class="btn btn-outline"
                    onclick={on_export}
                    disabled={subscriptions.is_empty()}
                >
                    <i class="fas fa-download" aria-hidden="true"></i>
                    { "Export CSV" }
                </button>
            </div>
            if *loading {
                <LoadingSpinner label="Loading subscribers..." />
            } else if subscriptions.is_empty() {
                <div class="empty-state">
                    <p>{ "No subscribers yet" }</p>
                </div>
            } else {
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>{ "Email" }</th>
                            <th>{ "First Name" }</th>
                            <th>{ "Source" }</th>
                            <th>{ "Subscribed" }</th>
                            <th>{ "Status" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for subscriptions.iter().map(|subscription| html! {
                            <tr>
                                <td>{ &subscription.email }</td>
                                <td>{ subscription.first_name.clone().unwrap_or_default() }</td>
                                <td>{ &subscription.source }</td>
                                <td>{ format_day(subscription.subscribed_at) }</td>
                                <td>
                                    <span class={classes!("status-badge", format!("status-{}", subscription.status.as_str()))}>
                                        { subscription.status.as_str() }
                                    </span>
                                </td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            }
        </section>
    }
}

/// CSV export of the subscriber list, header row included.
fn subscriptions_csv(subscriptions: &[NewsletterSubscription]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for subscription in subscriptions {
        writer.write_record([
            subscription.email.as_str(),
            subscription.first_name.as_deref().unwrap_or_default(),
            subscription.source.as_str(),
            format_day(subscription.subscribed_at).as_str(),
            subscription.status.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `YYYY-MM-DD` (UTC) of a Unix millisecond timestamp.
fn format_day(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|moment| moment.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn download_text(file_name: &str, mime: &str, body: &str) -> Result<(), wasm_bindgen::JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("document unavailable"))?;

    let parts = js_sys::Array::of1(&body.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

#[derive(Properties, PartialEq)]
struct AnalyticsProps {
    analytics: SiteAnalytics,
}

#[function_component(AnalyticsTab)]
fn analytics_tab(props: &AnalyticsProps) -> Html {
    let analytics = &props.analytics;
    html! {
        <section class="card admin-panel">
            <div class="admin-panel-header">
                <h2>{ "Analytics" }</h2>
            </div>
            <dl class="analytics-list">
                <dt>{ "Blog posts" }</dt>
                <dd>{ analytics.total_blogs }</dd>
                <dt>{ "Newsletter subscriptions" }</dt>
                <dd>{ analytics.total_subscriptions }</dd>
                <dt>{ "Registered users" }</dt>
                <dd>{ analytics.total_users }</dd>
            </dl>
            <h3>{ "Recent Activity" }</h3>
            if analytics.recent_activity.is_empty() {
                <p class="text-muted">{ "No recent activity" }</p>
            } else {
                <ul class="activity-list">
                    { for analytics.recent_activity.iter().map(|event| html! {
                        <li><code>{ event.to_string() }</code></li>
                    }) }
                </ul>
            }
        </section>
    }
}

fn default_settings() -> AdminSettings {
    AdminSettings {
        id: None,
        site_name: SITE_NAME.to_string(),
        site_description: "Your ultimate destination for fashion trends and beauty tips"
            .to_string(),
        contact_email: CONTACT_EMAIL.to_string(),
        social_media: SocialMedia::default(),
        newsletter_settings: NewsletterSettings {
            enabled: true,
            frequency: NewsletterFrequency::Weekly,
            template: "default".to_string(),
        },
        seo_settings: SeoSettings::default(),
        updated_at: 0,
        updated_by: String::new(),
    }
}

fn parse_frequency(value: &str) -> NewsletterFrequency {
    match value {
        "daily" => NewsletterFrequency::Daily,
        "monthly" => NewsletterFrequency::Monthly,
        _ => NewsletterFrequency::Weekly,
    }
}

fn frequency_value(frequency: NewsletterFrequency) -> &'static str {
    match frequency {
        NewsletterFrequency::Daily => "daily",
        NewsletterFrequency::Weekly => "weekly",
        NewsletterFrequency::Monthly => "monthly",
    }
}

#[function_component(SettingsTab)]
fn settings_tab(props: &TabProps) -> Html {
    let toast = use_toast();
    let settings = use_state(default_settings);
    let saving = use_state(|| false);

    {
        let settings = settings.clone();
        let toast = toast.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_admin_settings(&session).await {
                    Ok(Some(stored)) => settings.set(stored),
                    Ok(None) => {},
                    Err(err) => {
                        report_failure(err, "Failed to load settings", &toast, &on_unauthorized)
                    },
                }
            });
            || ()
        });
    }

    let edit = |apply: fn(&mut AdminSettings, String)| {
        let settings = settings.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = field_value(&event) {
                let mut next = (*settings).clone();
                apply(&mut next, value);
                settings.set(next);
            }
        })
    };

    let on_site_name = edit(|s, v| s.site_name = v).reform(|event: InputEvent| event.into());
    let on_description =
        edit(|s, v| s.site_description = v).reform(|event: InputEvent| event.into());
    let on_contact = edit(|s, v| s.contact_email = v).reform(|event: InputEvent| event.into());
    let on_frequency = edit(|s, v| s.newsletter_settings.frequency = parse_frequency(&v));
    let on_enabled = {
        let settings = settings.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*settings).clone();
                next.newsletter_settings.enabled = input.checked();
                settings.set(next);
            }
        })
    };

    let on_submit = {
        let settings = settings.clone();
        let saving = saving.clone();
        let session = props.session.clone();
        let on_unauthorized = props.on_unauthorized.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            saving.set(true);
            let draft = (*settings).clone();
            let saving = saving.clone();
            let toast = toast.clone();
            let session = session.clone();
            let on_unauthorized = on_unauthorized.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_admin_settings(&session, &draft).await {
                    Ok(()) => toast.emit(ToastMessage::info("Settings Saved", "Site settings updated.")),
                    Err(err) => {
                        report_failure(err, "Failed to save settings", &toast, &on_unauthorized)
                    },
                }
                saving.set(false);
            });
        })
    };

    let busy = *saving;

    html! {
        <section class="card admin-panel">
            <div class="admin-panel-header">
                <h2>{ "Site Settings" }</h2>
            </div>
            <form class="admin-settings-form" onsubmit={on_submit}>
                <div class="form-row">
                    <label class="form-field">
                        <span>{ "Site Name" }</span>
                        <input
                            type="text"
                            class="form-input"
                            value={settings.site_name.clone()}
                            oninput={on_site_name}
                            disabled={busy}
                        />
                    </label>
                    <label class="form-field">
                        <span>{ "Admin Email" }</span>
                        <input type="email" class="form-input" value={props.session.email.clone()} disabled=true />
                    </label>
                </div>
                <label class="form-field">
                    <span>{ "Site Description" }</span>
                    <input
                        type="text"
                        class="form-input"
                        value={settings.site_description.clone()}
                        oninput={on_description}
                        disabled={busy}
                    />
                </label>
                <label class="form-field">
                    <span>{ "Contact Email" }</span>
                    <input
                        type="email"
                        class="form-input"
                        value={settings.contact_email.clone()}
                        oninput={on_contact}
                        disabled={busy}
                    />
                </label>
                <div class="form-row">
                    <label class="form-field form-check">
                        <input
                            type="checkbox"
                            checked={settings.newsletter_settings.enabled}
                            onchange={on_enabled}
                            disabled={busy}
                        />
                        <span>{ "Accept newsletter signups" }</span>
                    </label>
                    <label class="form-field">
                        <span>{ "Newsletter Frequency" }</span>
                        <select class="form-input" onchange={on_frequency} disabled={busy}>
                            { for [NewsletterFrequency::Daily, NewsletterFrequency::Weekly, NewsletterFrequency::Monthly]
                                .into_iter()
                                .map(|frequency| html! {
                                    <option
                                        value={frequency_value(frequency)}
                                        selected={settings.newsletter_settings.frequency == frequency}
                                    >
                                        { frequency_value(frequency) }
                                    </option>
                                }) }
                        </select>
                    </label>
                </div>
                if settings.updated_at > 0 {
                    <p class="form-note">
                        { format!("Last updated {} by {}", format_day(settings.updated_at), settings.updated_by) }
                    </p>
                }
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        { if busy { "Saving..." } else { "Save Settings" } }
                    </button>
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use times_of_fashion_shared::models::{
        BlogPostStatus, ContentPreferences, NewsletterSubscription, SubscriptionStatus,
    };

    use super::{format_day, split_tags, subscriptions_csv, PostField, PostForm, DEFAULT_AUTHOR};

    fn subscription(email: &str, first_name: Option<&str>) -> NewsletterSubscription {
        NewsletterSubscription {
            id: None,
            email: email.to_string(),
            first_name: first_name.map(str::to_string),
            last_name: None,
            source: "website-newsletter".to_string(),
            status: SubscriptionStatus::Active,
            subscribed_at: 1_725_012_000_000,
            preferences: ContentPreferences::default(),
        }
    }

    #[test]
    fn tags_split_on_commas_and_drop_blanks() {
        assert_eq!(split_tags(" fashion, style ,,trends "), vec!["fashion", "style", "trends"]);
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn post_form_requires_title_and_content() {
        let form = PostForm::default();
        assert_eq!(form.author, DEFAULT_AUTHOR);
        assert!(!form.is_complete());

        let form = form
            .with(PostField::Title, "Runway Notes".to_string())
            .with(PostField::Content, "   ".to_string());
        assert!(!form.is_complete());
        assert!(form.with(PostField::Content, "Body".to_string()).is_complete());
    }

    #[test]
    fn only_published_posts_get_a_publish_time() {
        let form = PostForm::default()
            .with(PostField::Title, "Title".to_string())
            .with(PostField::Content, "Body".to_string())
            .with(PostField::Tags, "a, b".to_string());
        let published = form.to_new_post(42);
        assert_eq!(published.published_at, Some(42));
        assert_eq!(published.tags, vec!["a", "b"]);

        let draft = form.with(PostField::Status, "draft".to_string()).to_new_post(42);
        assert_eq!(draft.status, BlogPostStatus::Draft);
        assert_eq!(draft.published_at, None);
    }

    #[test]
    fn days_format_in_utc() {
        assert_eq!(format_day(0), "1970-01-01");
        assert_eq!(format_day(1_725_012_000_000), "2024-08-30");
        assert_eq!(format_day(951_782_400_000), "2000-02-29");
        assert_eq!(format_day(-86_400_000), "1969-12-31");
    }

    #[test]
    fn csv_has_header_and_escapes_fields() {
        let csv = subscriptions_csv(&[
            subscription("a@b.co", None),
            subscription("c@d.co", Some("Smith, \"Jo\"")),
        ])
        .expect("csv in memory");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Email,First Name,Source,Subscribed Date,Status");
        assert_eq!(lines[1], "a@b.co,,website-newsletter,2024-08-30,active");
        assert_eq!(lines[2], "c@d.co,\"Smith, \"\"Jo\"\"\",website-newsletter,2024-08-30,active");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let csv = subscriptions_csv(&[]).expect("csv in memory");
        assert_eq!(csv.trim_end(), "Email,First Name,Source,Subscribed Date,Status");
    }
}
