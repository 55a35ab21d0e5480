#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "#10b981",
            ToastKind::Error => "#ef4444",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fa-check-circle",
            ToastKind::Error => "fa-exclamation-circle",
        }
    }
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Showing,
    Leaving,
}

/// Holds at most one toast. A new arrival replaces whatever is there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<(Toast, ToastPhase)>,
    last_id: ToastId,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new toast and returns the one it evicted, if any.
    pub fn offer(&mut self, message: impl Into<String>, kind: ToastKind) -> (Toast, Option<Toast>) {
        self.last_id += 1;
        let toast = Toast {
            id: self.last_id,
            message: message.into(),
            kind,
        };
        let evicted = self
            .current
            .replace((toast.clone(), ToastPhase::Showing))
            .map(|(old, _)| old);
        (toast, evicted)
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    pub fn phase(&self) -> Option<ToastPhase> {
        self.current.as_ref().map(|(_, phase)| *phase)
    }

    pub fn is_current(&self, id: ToastId) -> bool {
        self.current().map_or(false, |toast| toast.id == id)
    }

    /// Moves the current toast into its exit transition. Stale ids are ignored.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some((toast, phase)) if toast.id == id && *phase == ToastPhase::Showing => {
                *phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Empties the slot if `id` is still the occupant.
    pub fn clear(&mut self, id: ToastId) -> Option<Toast> {
        if self.is_current(id) {
            self.current.take().map(|(toast, _)| toast)
        } else {
            None
        }
    }
}
