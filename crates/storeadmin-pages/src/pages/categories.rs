use std::sync::Arc;

use storeadmin_client::CategoriesClient;
use storeadmin_types::domain::category::Category;
use storeadmin_types::ports::feedback::{ConfirmDialog, ConfirmPrompt, Confirmation, Notifier};

use crate::errors::PageError;
use crate::pages::mutate_then_reload;
use crate::view::{TableBody, EMPTY_CATALOG_ROW};

fn required_label(label: &str) -> Result<String, PageError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(PageError::Validation("Please fill up the label".into()));
    }
    Ok(label.to_owned())
}

/// View model for the categories page: the add-form field plus the table.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoriesView {
    pub label_field: String,
    pub body: TableBody<CategoryRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub id: String,
    pub label: String,
}

/// Controller for the category management page.
pub struct CategoriesPage {
    client: CategoriesClient,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmDialog>,
    categories: Vec<Category>,
    label: String,
}

impl CategoriesPage {
    pub fn new(
        client: CategoriesClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDialog>,
    ) -> Self {
        Self {
            client,
            notifier,
            confirm,
            categories: Vec::new(),
            label: String::new(),
        }
    }

    /// Initial fetch. A failure here keeps the empty table and only logs;
    /// the page stays interactive.
    pub async fn mount(&mut self) {
        match self.client.list().await {
            Ok(list) => self.categories = list,
            Err(err) => tracing::warn!(error = %err, "failed to load categories"),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Submit the add-form. An empty label never reaches the network.
    pub async fn submit_new(&mut self) {
        let label = match required_label(&self.label) {
            Ok(label) => label,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return;
            }
        };

        let result = mutate_then_reload(
            async { self.client.create(&label).await.map(|_| ()) },
            self.client.list(),
        )
        .await;
        match result {
            Ok(list) => {
                self.categories = list;
                self.label.clear();
                self.notifier.success("New category has been added");
            }
            Err(err) => self.notifier.error(&err.to_string()),
        }
    }

    /// Rename an existing category. Same validation rule as creation.
    pub async fn rename(&mut self, id: &str, label: &str) {
        let label = match required_label(label) {
            Ok(label) => label,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return;
            }
        };

        let result = mutate_then_reload(
            async { self.client.update(id, &label).await.map(|_| ()) },
            self.client.list(),
        )
        .await;
        match result {
            Ok(list) => {
                self.categories = list;
                self.notifier.info("Category has been updated");
            }
            Err(err) => self.notifier.error(&err.to_string()),
        }
    }

    /// Delete behind the confirmation dialog. A dismissed dialog means no
    /// API call and no state change.
    pub async fn remove(&mut self, id: &str) {
        let prompt = ConfirmPrompt::delete_warning();
        if self.confirm.confirm(&prompt).await != Confirmation::Confirmed {
            return;
        }

        let result = mutate_then_reload(self.client.delete(id), self.client.list()).await;
        match result {
            Ok(list) => {
                self.categories = list;
                self.notifier.success("Category has been removed");
            }
            Err(err) => self.notifier.error(&err.to_string()),
        }
    }

    pub fn view(&self) -> CategoriesView {
        let rows = self
            .categories
            .iter()
            .map(|c| CategoryRow {
                id: c.id.clone(),
                label: c.label.clone(),
            })
            .collect();
        CategoriesView {
            label_field: self.label.clone(),
            body: TableBody::from_rows(rows, EMPTY_CATALOG_ROW),
        }
    }
}
