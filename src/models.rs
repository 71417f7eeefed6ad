//! Frontend Models
//!
//! UI-only data; boards, columns and tasks come from `kanban_core`.

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
        }
    }
}

/// A notification shown in the corner
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    next_id: u32,
    items: Vec<Toast>,
}

impl ToastList {
    /// Append a toast and return its id
    pub fn push(&mut self, kind: ToastKind, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = ToastList::default();
        let a = toasts.push(ToastKind::Success, "Board has been created".to_string());
        let b = toasts.push(ToastKind::Error, "Could not save".to_string());
        assert_ne!(a, b);
        assert_eq!(toasts.items().len(), 2);

        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].id, b);

        // Dismissing twice is harmless
        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
    }
}
