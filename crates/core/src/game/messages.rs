//! Contextual message banner with dismissal memory.
//! A dismissed text stays hidden until some other text is shown; a new maze forgets both.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct MessageBanner {
    current: Option<&'static str>,
    dismissed: Option<&'static str>,
}

impl MessageBanner {
    pub(super) fn current(&self) -> Option<&'static str> {
        self.current
    }

    /// Returns false when `text` was the last dismissed message.
    pub(super) fn show(&mut self, text: &'static str) -> bool {
        if self.dismissed == Some(text) {
            return false;
        }
        self.current = Some(text);
        self.dismissed = None;
        true
    }

    pub(super) fn dismiss(&mut self) -> bool {
        let Some(text) = self.current.take() else {
            return false;
        };
        self.dismissed = Some(text);
        true
    }

    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
