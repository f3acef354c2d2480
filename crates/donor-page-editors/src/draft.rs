//! Typed-but-uncommitted input.
//!
//! A [`Draft`] keeps the text exactly as typed next to the last value that
//! parsed successfully. An invalid keystroke never discards the committed
//! value, and the text is never rewritten to match it.

/// Two-slot input state: the current text and the last committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<T> {
    text: String,
    committed: Option<T>,
    in_sync: bool,
}

impl<T> Default for Draft<T> {
    fn default() -> Self {
        Self {
            text: String::new(),
            committed: None,
            in_sync: false,
        }
    }
}

impl<T: Clone> Draft<T> {
    /// Starts from a stored value, rendering it with `render`.
    pub fn from_committed(value: Option<T>, render: impl FnOnce(&T) -> String) -> Self {
        match value {
            Some(value) => Self {
                text: render(&value),
                committed: Some(value),
                in_sync: true,
            },
            None => Self::default(),
        }
    }

    /// Records new text and commits it if `parse` accepts it.
    ///
    /// On rejection the previously committed value is kept.
    pub fn input<E>(
        &mut self,
        text: impl Into<String>,
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<T, E> {
        self.text = text.into();
        match parse(&self.text) {
            Ok(value) => {
                self.committed = Some(value.clone());
                self.in_sync = true;
                Ok(value)
            }
            Err(err) => {
                self.in_sync = false;
                Err(err)
            }
        }
    }

    /// The text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The last value that parsed.
    pub fn committed(&self) -> Option<&T> {
        self.committed.as_ref()
    }

    /// Returns `true` if the current text is what produced the committed value.
    pub fn is_in_sync(&self) -> bool {
        self.in_sync
    }
}
