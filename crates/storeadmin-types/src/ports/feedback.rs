use async_trait::async_trait;

/// Toast-style notification surface. Page controllers report every outcome
/// through this port; nothing propagates past them.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Outcome of a confirmation dialog. Closing the dialog without answering
/// counts as `Dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Dismissed,
}

/// Copy shown by a confirmation dialog.
#[derive(Debug, Clone)]
pub struct ConfirmPrompt {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    /// The warning dialog shown before any destructive action.
    pub fn delete_warning() -> Self {
        Self {
            title: "Are you sure you want to delete the product?".into(),
            body: "You won't be able to revert this!".into(),
            confirm_label: "Yes, delete it!".into(),
        }
    }
}

/// Modal confirmation gate for destructive actions. Implementations must
/// default to `Dismissed` when no explicit affirmative answer is given.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation;
}
