use std::sync::Arc;

use storeadmin_client::{ProductsClient, UpdateProductRequest};
use storeadmin_types::domain::product::{Product, ProductCategory};
use storeadmin_types::ports::feedback::Notifier;

use crate::errors::PageError;

/// What the caller should do after a submit attempt. `Saved` means the
/// update went through and the user is redirected to the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Rejected,
}

/// View model for the edit page: either the pre-populated form or the
/// terminal not-found screen with its single back action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEditView {
    NotFound {
        message: String,
        back_label: &'static str,
    },
    Form(ProductFormView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormView {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Option<ProductCategory>,
    pub category_options: [ProductCategory; 4],
}

#[derive(Debug, Clone, Default)]
struct ProductForm {
    name: String,
    description: String,
    price: f64,
    category: Option<ProductCategory>,
}

impl ProductForm {
    fn from_product(p: Product) -> Self {
        Self {
            name: p.name,
            description: p.description,
            price: p.price,
            category: Some(p.category),
        }
    }

    fn validated(&self) -> Result<UpdateProductRequest, PageError> {
        let name = self.name.trim();
        match self.category {
            Some(category) if !name.is_empty() && self.price > 0.0 => Ok(UpdateProductRequest {
                name: name.to_owned(),
                description: self.description.clone(),
                price: self.price,
                category,
            }),
            _ => Err(PageError::Validation(
                "Please fill up the required fields".into(),
            )),
        }
    }
}

/// Controller for the single-product edit page. Constructed with the id
/// taken from the navigation context.
pub struct ProductEditPage {
    client: ProductsClient,
    notifier: Arc<dyn Notifier>,
    id: String,
    form: ProductForm,
    error: Option<PageError>,
}

impl ProductEditPage {
    pub fn new(client: ProductsClient, notifier: Arc<dyn Notifier>, id: impl Into<String>) -> Self {
        Self {
            client,
            notifier,
            id: id.into(),
            form: ProductForm::default(),
            error: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_not_found(&self) -> bool {
        self.error.is_some()
    }

    /// Fetch the product. An absent product and a failed fetch both land in
    /// the terminal not-found state; only navigation leaves it.
    pub async fn mount(&mut self) {
        match self.client.get(&self.id).await {
            Ok(Some(product)) => self.form = ProductForm::from_product(product),
            Ok(None) => self.error = Some(PageError::NotFound("Product not found".into())),
            Err(err) => {
                tracing::warn!(error = %err, id = %self.id, "failed to load product");
                self.error = Some(PageError::NotFound("Product not found".into()));
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_price(&mut self, price: f64) {
        self.form.price = price;
    }

    pub fn set_category(&mut self, category: ProductCategory) {
        self.form.category = Some(category);
    }

    /// Submit the form. Required fields are checked before any network
    /// traffic; a successful update notifies and hands navigation back to
    /// the caller instead of reloading.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.error.is_some() {
            return SubmitOutcome::Rejected;
        }
        let req = match self.form.validated() {
            Ok(req) => req,
            Err(err) => {
                self.notifier.error(&err.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        match self.client.update(&self.id, &req).await {
            Ok(_) => {
                self.notifier.success("Product has been updated");
                SubmitOutcome::Saved
            }
            Err(err) => {
                self.notifier.error(&err.to_string());
                SubmitOutcome::Rejected
            }
        }
    }

    pub fn view(&self) -> ProductEditView {
        if let Some(err) = &self.error {
            return ProductEditView::NotFound {
                message: err.to_string(),
                back_label: "Go back to home",
            };
        }
        ProductEditView::Form(ProductFormView {
            name: self.form.name.clone(),
            description: self.form.description.clone(),
            price: self.form.price,
            category: self.form.category,
            category_options: ProductCategory::ALL,
        })
    }
}
