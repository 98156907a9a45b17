//! Console implementations of the notification and confirmation ports.

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use storeadmin_types::ports::feedback::{ConfirmDialog, ConfirmPrompt, Confirmation, Notifier};

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        println!("[ok] {message}");
    }

    fn error(&self, message: &str) {
        println!("[error] {message}");
    }

    fn info(&self, message: &str) {
        println!("[info] {message}");
    }
}

/// Stdin-backed confirmation dialog. Anything other than an explicit
/// "y"/"yes" dismisses, matching the dialog's default-cancel behaviour.
pub struct ConsoleConfirm;

#[async_trait]
impl ConfirmDialog for ConsoleConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation {
        println!("{}", prompt.title);
        println!("{}", prompt.body);
        print!("{} [y/N] ", prompt.confirm_label);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return Confirmation::Dismissed;
        }
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Confirmation::Confirmed,
            _ => Confirmation::Dismissed,
        }
    }
}
