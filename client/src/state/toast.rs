//! Transient notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data provided through context as
//! `RwSignal<ToastState>`. The `Toaster` component renders it and owns
//! the auto-dismiss timers, so this module stays testable off the browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts on screen; older ones are evicted first.
pub const TOAST_LIMIT: usize = 3;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// Static text for a notification before it is queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub variant: ToastVariant,
}

/// A queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        if self.toasts.len() >= TOAST_LIMIT {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            id,
            title: notice.title.to_owned(),
            description: notice.description.map(str::to_owned),
            variant: notice.variant,
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored (the toast may already have
    /// been evicted or closed by hand).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
