use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn alert_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert-success",
            NotificationKind::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// Toast queue shared by the pages below [`Layout`](super::Layout).
///
/// Each toast removes itself after
/// [`NOTIFICATION_TIMEOUT_MS`](crate::client::constant::NOTIFICATION_TIMEOUT_MS).
#[derive(Clone, Copy)]
pub struct Notifications {
    items: Signal<Vec<Notification>>,
    next_id: Signal<u32>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.write().retain(|notification| notification.id != id);
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.items.write().push(Notification { id, kind, message });

        #[cfg(feature = "web")]
        {
            let mut notifications = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(
                    crate::client::constant::NOTIFICATION_TIMEOUT_MS,
                )
                .await;
                notifications.dismiss(id);
            });
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NotificationList() -> Element {
    let mut notifications = use_context::<Notifications>();
    let items = notifications.items.read().clone();

    rsx!(
        div {
            class: "toast toast-end toast-bottom z-50",
            for notification in items {
                div {
                    key: "{notification.id}",
                    class: "alert {notification.kind.alert_class()} shadow-lg",
                    span { "{notification.message}" }
                    button {
                        class: "btn btn-xs btn-ghost",
                        onclick: move |_| notifications.dismiss(notification.id),
                        "✕"
                    }
                }
            }
        }
    )
}
