use serde::Serialize;

/// One-slot mailbox. A write replaces whatever is waiting (last write wins);
/// a read consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, returning the message it displaced, if any.
    pub fn put(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Remembers which section the reader left when they opened a page without sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollIntentRecord {
    pub section_id: String,
}

/// Per-tab storage that outlives a single page mount, like `sessionStorage`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TabStorage {
    /// Section a cross-page navigation should land on.
    pub pending_section: Slot<String>,
    pub scroll_intent: Slot<ScrollIntentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes() {
        let mut slot = Slot::new();
        slot.put("work".to_string());
        assert_eq!(slot.take().as_deref(), Some("work"));
        assert_eq!(slot.take(), None);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let mut slot = Slot::new();
        assert_eq!(slot.put("value"), None);
        assert_eq!(slot.put("contact"), Some("value"));
        assert_eq!(slot.peek(), Some(&"contact"));
        assert_eq!(slot.take(), Some("contact"));
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut slot = Slot::new();
        slot.put(ScrollIntentRecord {
            section_id: "work".to_string(),
        });
        assert!(slot.peek().is_some());
        assert!(slot.peek().is_some());
        assert!(!slot.is_empty());
    }
}
