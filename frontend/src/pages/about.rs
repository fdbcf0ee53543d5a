use yew::prelude::*;

use crate::hooks::use_scroll_to_top;

struct Value {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        icon: "fas fa-heart",
        title: "Authenticity",
        description: "Real insights, no filler, zero compromises",
    },
    Value {
        icon: "fas fa-star",
        title: "Quality",
        description: "We transform information into wisdom",
    },
    Value {
        icon: "fas fa-users",
        title: "Access",
        description: "Insider information made irresistibly accessible",
    },
    Value {
        icon: "fas fa-award",
        title: "Impact",
        description: "Every story changes how you see style forever",
    },
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="about-page">
            <section class="page-hero page-hero-tall" style="background-image: url('/assets/about.png')">
                <div class="page-hero-overlay"></div>
                <div class="container page-hero-content">
                    <h1>{ "About " }<span class="text-accent">{ "Times of Fashion" }</span></h1>
                    <p>
                        { "Times of Fashion stands as your premier destination for fashion \
                           intelligence, beauty innovation, and lifestyle elevation. We transform \
                           the complex world of style into accessible insights that empower \
                           authentic self-expression while keeping you ahead of tomorrow's trends." }
                    </p>
                </div>
            </section>

            <section class="about-mission">
                <div class="container two-column">
                    <div>
                        <h2>{ "Our " }<span class="text-accent">{ "Mission" }</span></h2>
                        <p>
                            { "To democratize fashion intelligence by making insider knowledge \
                               accessible, actionable, and inspiring for style enthusiasts at every \
                               level of their journey." }
                        </p>
                        <h2>{ "Our " }<span class="text-accent">{ "Vision" }</span></h2>
                        <p>
                            { "To become the world's most trusted source for fashion intelligence \
                               that empowers individuals to express their authentic selves while \
                               staying ahead of cultural shifts and style evolution." }
                        </p>
                    </div>
                    <img src="/assets/hero3.jpg" alt="Fashion editorial" class="rounded-image" loading="lazy" />
                </div>
            </section>

            <section class="about-values">
                <div class="container">
                    <div class="section-heading">
                        <h2>{ "Our " }<span class="text-accent">{ "Values" }</span></h2>
                    </div>
                    <div class="values-grid">
                        { for VALUES.iter().map(|value| html! {
                            <div class="value-card">
                                <i class={classes!(value.icon, "value-icon")} aria-hidden="true"></i>
                                <h3>{ value.title }</h3>
                                <p>{ value.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>
        </main>
    }
}
