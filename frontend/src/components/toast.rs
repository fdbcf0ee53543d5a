use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

const TOAST_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl ToastMessage {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub show: Callback<ToastMessage>,
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum ToastAction {
    Show(ToastMessage),
    Dismiss(u32),
}

/// The visible toast and the sequence number of the last one shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    seq: u32,
    current: Option<(u32, ToastMessage)>,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => {
                let seq = self.seq.wrapping_add(1);
                Rc::new(Self {
                    seq,
                    current: Some((seq, message)),
                })
            },
            ToastAction::Dismiss(seq) => match &self.current {
                Some((current, _)) if *current == seq => Rc::new(Self {
                    seq: self.seq,
                    current: None,
                }),
                _ => self,
            },
        }
    }
}

/// Holds the single visible toast; a new toast replaces the current one.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Each toast gets a fresh key so an identical message re-arms its timer.
    let state = use_reducer(ToastState::default);

    let show = {
        let state = state.dispatcher();
        Callback::from(move |message: ToastMessage| state.dispatch(ToastAction::Show(message)))
    };

    let context = ToastContext {
        show,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { props.children.clone() }
            <div class="toast-viewport" aria-live="polite">
                {
                    if let Some((seq, message)) = state.current.clone() {
                        let on_close = {
                            let state = state.dispatcher();
                            Callback::from(move |()| state.dispatch(ToastAction::Dismiss(seq)))
                        };
                        html! { <Toast key={seq} message={message} on_close={on_close} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), TOAST_DISMISS_MS);
    }

    let classes = classes!(
        "toast",
        (props.message.variant == ToastVariant::Destructive).then_some("toast-destructive")
    );

    html! {
        <div class={classes} role="status">
            <div class="toast-body">
                <p class="toast-title">{ &props.message.title }</p>
                <p class="toast-description">{ &props.message.description }</p>
            </div>
            <button
                type="button"
                class="toast-close"
                aria-label="Dismiss notification"
                onclick={dismiss.reform(|_: MouseEvent| ())}
            >
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use yew::functional::Reducible;

    use super::{ToastAction, ToastMessage, ToastState};

    fn shown(state: &Rc<ToastState>) -> Option<(u32, &str)> {
        state.current.as_ref().map(|(seq, message)| (*seq, message.title.as_str()))
    }

    #[test]
    fn back_to_back_toasts_get_distinct_keys() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::Show(ToastMessage::info("Saved", "")));
        let state = state.reduce(ToastAction::Show(ToastMessage::info("Saved", "")));
        assert_eq!(shown(&state), Some((2, "Saved")));
    }

    #[test]
    fn stale_dismissals_leave_the_newer_toast() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Show(ToastMessage::info("First", "")))
            .reduce(ToastAction::Show(ToastMessage::error("Second", "")));
        let state = state.reduce(ToastAction::Dismiss(1));
        assert_eq!(shown(&state), Some((2, "Second")));

        let state = state.reduce(ToastAction::Dismiss(2));
        assert_eq!(shown(&state), None);

        let state = state.reduce(ToastAction::Show(ToastMessage::info("Third", "")));
        assert_eq!(shown(&state), Some((3, "Third")));
    }
}
