use crate::validation::FormData;

use std::fmt;
use std::sync::Arc;

type Check = dyn Fn(Option<&str>, &FormData) -> bool + Send + Sync;

/// A single validation rule: predicate plus failure message.
#[derive(Clone)]
pub struct Rule {
    check: Arc<Check>,
    message: String,
}

impl Rule {
    pub fn new<F>(message: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&str>, &FormData) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message: message.into(),
        }
    }

    /// Replace the failure message, keeping the predicate.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, value: Option<&str>, form: &FormData) -> bool {
        (self.check)(value, form)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
