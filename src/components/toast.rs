use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::notify::{
    Notifier, NotifyOptions, Placement, Toast, ToastAction, ToastKind, ToastList,
};

/// [`Notifier`] backed by the page's toast list.
#[derive(Clone)]
pub struct ToastNotifier {
    toasts: UseReducerDispatcher<ToastList>,
}

impl ToastNotifier {
    pub fn new(toasts: UseReducerDispatcher<ToastList>) -> Self {
        Self { toasts }
    }

    fn push(&self, kind: ToastKind, message: &str, opts: NotifyOptions) {
        self.toasts.dispatch(ToastAction::Push {
            kind,
            message: message.to_string(),
            opts,
        });
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str, opts: NotifyOptions) {
        self.push(ToastKind::Success, message, opts);
    }

    fn notify_failure(&self, message: &str, opts: NotifyOptions) {
        self.push(ToastKind::Failure, message, opts);
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastOverlayProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<ToastAction>,
}

#[function_component(ToastOverlay)]
pub fn toast_overlay(props: &ToastOverlayProps) -> Html {
    let corners = [
        Placement::TopLeft,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomRight,
    ];
    html! {
        <>
        { for corners.iter().map(|&corner| {
            let here: Vec<&Toast> = props.toasts.iter().filter(|t| t.placement == corner).collect();
            if here.is_empty() {
                return html! {};
            }
            html! {
                <div style={format!("position:fixed; {} display:flex; flex-direction:column; gap:8px; z-index:100;", corner.css())}>
                    { for here.into_iter().map(|t| html! {
                        <ToastCard key={t.id} toast={t.clone()} on_dismiss={props.on_dismiss.clone()} />
                    }) }
                </div>
            }
        }) }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<ToastAction>,
}

#[function_component(ToastCard)]
fn toast_card(props: &ToastCardProps) -> Html {
    // Auto-dismiss; dropping the timeout on unmount cancels it.
    {
        let (delay, dismiss) = props.toast.expiry();
        let cb = props.on_dismiss.clone();
        use_effect_with(props.toast.id, move |_| {
            let timer = Timeout::new(delay, move || cb.emit(dismiss));
            move || drop(timer)
        });
    }
    let border = match props.toast.kind {
        ToastKind::Success => "#3fb950",
        ToastKind::Failure => "#f85149",
    };
    html! {
        <div style={format!(
            "background:rgba(22,27,34,0.95); border:1px solid {}; border-left:4px solid {}; color:#e6edf3; padding:10px 14px; border-radius:8px; min-width:220px; font-size:14px;",
            border, border
        )}>
            { props.toast.message.clone() }
        </div>
    }
}
