use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from("Loading..."));

    html! {
        <div class="loading-spinner" role="status" aria-live="polite" aria-busy="true">
            <div class="loading-spinner-ring" />
            <span class="sr-only">{ label }</span>
        </div>
    }
}
