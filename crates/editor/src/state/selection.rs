use shared::ObjectId;

/// Single-object selection state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ObjectId>,
}

impl SelectionState {
    /// Currently selected object
    pub fn primary(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Replace the selection
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces() {
        let mut s = SelectionState::default();
        assert!(s.is_empty());
        s.select("a".into());
        s.select("b".into());
        assert_eq!(s.primary().map(String::as_str), Some("b"));
        assert!(s.is_selected("b"));
        assert!(!s.is_selected("a"));
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select("a".into());
        s.clear();
        assert!(s.primary().is_none());
    }
}
