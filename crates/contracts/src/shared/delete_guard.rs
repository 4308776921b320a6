/// State of the delete confirmation dialog.
///
/// `request` remembers which record the user wants to delete and opens the
/// dialog; `begin` hands out the id exactly once per confirmation, so a second
/// click while the DELETE is in flight is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteGuard {
    pending: Option<i64>,
    is_deleting: bool,
}

impl DeleteGuard {
    /// Open the dialog for `id`. Ignored while another delete is running.
    pub fn request(&mut self, id: i64) {
        if !self.is_deleting {
            self.pending = Some(id);
        }
    }

    /// Close the dialog without deleting.
    pub fn cancel(&mut self) {
        if !self.is_deleting {
            self.pending = None;
        }
    }

    /// Confirm: returns the id to delete, or `None` if nothing is pending or a
    /// delete is already in flight.
    pub fn begin(&mut self) -> Option<i64> {
        if self.is_deleting {
            return None;
        }
        let id = self.pending?;
        self.is_deleting = true;
        Some(id)
    }

    /// The DELETE finished (either way); closes the dialog.
    pub fn finish(&mut self) {
        self.is_deleting = false;
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn pending(&self) -> Option<i64> {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_confirm_while_deleting_is_ignored() {
        let mut guard = DeleteGuard::default();
        guard.request(7);
        assert!(guard.is_open());

        assert_eq!(guard.begin(), Some(7));
        assert!(guard.is_deleting());
        assert_eq!(guard.begin(), None);

        guard.finish();
        assert!(!guard.is_open());
        assert!(!guard.is_deleting());
    }

    #[test]
    fn test_begin_without_request() {
        let mut guard = DeleteGuard::default();
        assert_eq!(guard.begin(), None);
        assert!(!guard.is_deleting());
    }

    #[test]
    fn test_cancel_and_request_locked_while_deleting() {
        let mut guard = DeleteGuard::default();
        guard.request(1);
        guard.begin();
        guard.cancel();
        guard.request(2);
        assert_eq!(guard.pending(), Some(1));

        guard.finish();
        guard.request(2);
        guard.cancel();
        assert_eq!(guard.pending(), None);
    }
}
