//! Notification boundary.
//!
//! The game only calls [`Notifier`]; how a message is shown is up to the
//! implementation. [`ToastList`] is the in-page list the toast overlay renders.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::state::Verdict;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Placement {
    pub fn css(self) -> &'static str {
        match self {
            Placement::TopLeft => "top:16px; left:16px;",
            Placement::TopRight => "top:16px; right:16px;",
            Placement::BottomLeft => "bottom:16px; left:16px;",
            Placement::BottomRight => "bottom:16px; right:16px;",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyOptions {
    pub placement: Placement,
    pub duration_ms: u32,
}

/// Fire-and-forget sink for round outcomes.
pub trait Notifier {
    fn notify_success(&self, message: &str, opts: NotifyOptions);
    fn notify_failure(&self, message: &str, opts: NotifyOptions);
}

/// Routes a judged answer to the matching notifier call.
pub fn announce(notifier: &impl Notifier, verdict: &Verdict, unit: &str, opts: NotifyOptions) {
    let message = verdict.message(unit);
    if verdict.is_success() {
        notifier.notify_success(&message, opts);
    } else {
        notifier.notify_failure(&message, opts);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub placement: Placement,
    pub duration_ms: u32,
}

impl Toast {
    /// Delay until this toast dismisses itself, and the action that does it.
    pub fn expiry(&self) -> (u32, ToastAction) {
        (self.duration_ms, ToastAction::Dismiss { id: self.id })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Push {
        kind: ToastKind,
        message: String,
        opts: NotifyOptions,
    },
    Dismiss { id: u64 },
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ToastAction::Push { kind, message, opts } => {
                new.toasts.push(Toast {
                    id: new.next_id,
                    kind,
                    message,
                    placement: opts.placement,
                    duration_ms: opts.duration_ms,
                });
                new.next_id += 1;
            }
            ToastAction::Dismiss { id } => {
                if !new.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                new.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(ToastKind, String)>>);

    impl Notifier for Recorder {
        fn notify_success(&self, message: &str, _opts: NotifyOptions) {
            self.0.borrow_mut().push((ToastKind::Success, message.to_string()));
        }
        fn notify_failure(&self, message: &str, _opts: NotifyOptions) {
            self.0.borrow_mut().push((ToastKind::Failure, message.to_string()));
        }
    }

    fn opts() -> NotifyOptions {
        NotifyOptions { placement: Placement::TopRight, duration_ms: 1500 }
    }

    fn push(list: Rc<ToastList>, kind: ToastKind, msg: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push { kind, message: msg.to_string(), opts: opts() })
    }

    #[test]
    fn announce_picks_success_or_failure() {
        let rec = Recorder::default();
        announce(&rec, &Verdict::Correct { item_id: ItemId(3), weight: 7.0 }, "kg", opts());
        announce(&rec, &Verdict::Incorrect { expected: 9.0, guess: Some(9.1) }, "kg", opts());
        let got = rec.0.into_inner();
        assert_eq!(
            got,
            vec![
                (ToastKind::Success, "Correct!".to_string()),
                (ToastKind::Failure, "Wrong. The correct weight is 9 kg".to_string()),
            ]
        );
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let list = Rc::new(ToastList::default());
        let list = push(list, ToastKind::Success, "a");
        let list = push(list, ToastKind::Failure, "b");
        let ids: Vec<u64> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(list.next_id, 2);
        assert_eq!(list.toasts[1].kind, ToastKind::Failure);
        assert_eq!(list.toasts[1].duration_ms, 1500);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = Rc::new(ToastList::default());
        let list = push(list, ToastKind::Success, "a");
        let list = push(list, ToastKind::Success, "b");
        let list = list.reduce(ToastAction::Dismiss { id: 0 });
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].message, "b");
    }

    #[test]
    fn dismissing_unknown_id_keeps_state() {
        let list = push(Rc::new(ToastList::default()), ToastKind::Success, "a");
        let after = list.clone().reduce(ToastAction::Dismiss { id: 42 });
        assert!(Rc::ptr_eq(&list, &after));
    }

    #[test]
    fn placement_reads_kebab_case() {
        let p: Placement = serde_json::from_str("\"bottom-left\"").unwrap();
        assert_eq!(p, Placement::BottomLeft);
    }

    #[test]
    fn toast_expires_after_its_duration() {
        let list = push(Rc::new(ToastList::default()), ToastKind::Success, "a");
        let quick = NotifyOptions { placement: Placement::BottomLeft, duration_ms: 900 };
        let list = list.reduce(ToastAction::Push {
            kind: ToastKind::Failure,
            message: "b".into(),
            opts: quick,
        });
        assert_eq!(list.toasts[0].expiry(), (1500, ToastAction::Dismiss { id: 0 }));
        let (delay, dismiss) = list.toasts[1].expiry();
        assert_eq!(delay, 900);
        let list = list.reduce(dismiss);
        let ids: Vec<u64> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0]);
    }
}
