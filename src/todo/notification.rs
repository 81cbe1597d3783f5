//! Transient notification banner state.
//!
//! The [`Notifier`] holds at most one [`Notice`]. Every call to
//! [`Notifier::show`] replaces whatever is visible and issues a new
//! [`Generation`]; the auto-clear timer is tagged with that generation, and
//! [`Notifier::expire`] only clears the banner when the tag still matches.
//! A clear scheduled for a superseded notice is therefore a no-op.

/// Tag issued on every entry into the showing state.
pub type Generation = u64;

/// Visual class of a notice. Picks the banner colour and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn label(self) -> &'static str {
        match self {
            NoticeKind::Success => "Success!",
            NoticeKind::Error => "Error!",
        }
    }
}

/// An opaque `(message, kind)` pair produced by list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug)]
struct Showing {
    notice: Notice,
    generation: Generation,
}

/// Two-state emitter: empty, or showing one notice.
#[derive(Debug, Default)]
pub struct Notifier {
    showing: Option<Showing>,
    last_generation: Generation,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`, replacing any visible one. Returns the generation the
    /// caller must schedule the auto-clear for.
    pub fn show(&mut self, notice: Notice) -> Generation {
        self.last_generation += 1;
        let generation = self.last_generation;
        tracing::debug!(generation, kind = ?notice.kind, message = %notice.message, "notification shown");
        self.showing = Some(Showing { notice, generation });
        generation
    }

    /// Timer-driven clear. Ignored unless `generation` is the one currently
    /// showing.
    pub fn expire(&mut self, generation: Generation) -> bool {
        if self
            .showing
            .as_ref()
            .is_some_and(|s| s.generation == generation)
        {
            tracing::debug!(generation, "notification expired");
            self.showing = None;
            true
        } else {
            tracing::debug!(generation, "stale notification timer ignored");
            false
        }
    }

    /// User-driven clear. Returns `false` when nothing was showing.
    pub fn dismiss(&mut self) -> bool {
        match self.showing.take() {
            Some(showing) => {
                tracing::debug!(generation = showing.generation, "notification dismissed");
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.showing.as_ref().map(|s| &s.notice)
    }

    pub fn is_showing(&self) -> bool {
        self.showing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let notifier = Notifier::new();
        assert!(!notifier.is_showing());
        assert_eq!(notifier.current(), None);
    }

    #[test]
    fn show_replaces_previous_notice() {
        let mut notifier = Notifier::new();
        let first = notifier.show(Notice::success("Item added successfully!"));
        let second = notifier.show(Notice::error("Item deleted successfully!"));
        assert!(second > first);
        assert_eq!(
            notifier.current(),
            Some(&Notice::error("Item deleted successfully!"))
        );
        assert!(notifier.expire(second));
    }

    #[test]
    fn stale_expiry_does_not_clear_newer_notice() {
        let mut notifier = Notifier::new();
        let first = notifier.show(Notice::success("first"));
        let second = notifier.show(Notice::success("second"));

        assert!(!notifier.expire(first));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("second"));

        assert!(notifier.expire(second));
        assert!(!notifier.is_showing());
    }

    #[test]
    fn expiry_after_dismiss_and_reshow_is_ignored() {
        let mut notifier = Notifier::new();
        let first = notifier.show(Notice::success("first"));
        assert!(notifier.dismiss());
        let second = notifier.show(Notice::success("second"));

        assert!(!notifier.expire(first));
        assert!(notifier.is_showing());
        assert!(notifier.expire(second));
    }

    #[test]
    fn clearing_is_idempotent() {
        let mut notifier = Notifier::new();
        assert!(!notifier.dismiss());
        assert!(!notifier.expire(1));

        let generation = notifier.show(Notice::success("hello"));
        assert!(notifier.dismiss());
        assert!(!notifier.dismiss());
        assert!(!notifier.expire(generation));
        assert!(!notifier.is_showing());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(NoticeKind::Success.label(), "Success!");
        assert_eq!(NoticeKind::Error.label(), "Error!");
    }
}
