use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: usize,
    /// Font Awesome icon class, e.g. `fa-envelope`.
    pub icon: &'static str,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class="stats-card" role="status">
            <div>
                <p class="stats-card-title">{ props.title.clone() }</p>
                <strong class="stats-card-value">{ props.value }</strong>
            </div>
            <i class={classes!("fas", props.icon, "stats-card-icon")} aria-hidden="true"></i>
        </div>
    }
}
