use uuid::Uuid;

/// Вид уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Single visible toast. Showing a new toast replaces the current one; the
/// auto-hide of a replaced toast must not dismiss its successor, so
/// dismissal is by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast and return its id for the auto-hide timer.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.current = Some(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.show(ToastKind::Error, message)
    }

    /// Hide the toast with this id. Returns false when it was already replaced.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        match &self.current {
            Some(toast) if toast.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_previous() {
        let mut slot = ToastSlot::new();
        let first = slot.success("Password sent");
        let second = slot.error("Failed to send certificate");
        assert_ne!(first, second);

        let current = slot.current().unwrap();
        assert_eq!(current.kind, ToastKind::Error);
        assert_eq!(current.message, "Failed to send certificate");
    }

    #[test]
    fn test_stale_timer_does_not_hide_successor() {
        let mut slot = ToastSlot::new();
        let first = slot.success("Saved");
        let second = slot.success("Saved again");

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|t| t.id), Some(second));

        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }
}
