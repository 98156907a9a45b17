use std::io::{self, BufRead, Write};
use std::sync::Arc;

use storeadmin_client::{CreateOrderRequest, StoreApi};
use storeadmin_pages::config::Config;
use storeadmin_pages::pages::{CategoriesPage, OrdersPage, ProductEditPage, SubmitOutcome};
use storeadmin_types::domain::order::{OrderStatus, OrderedProduct};
use storeadmin_types::domain::product::ProductCategory;
use storeadmin_types::ports::feedback::{ConfirmDialog, Notifier};

mod console;
mod render;

use console::{ConsoleConfirm, ConsoleNotifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for API_BASE_URL when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;
    let api = StoreApi::new(&config.api_base_url)?;
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
    let confirm: Arc<dyn ConfirmDialog> = Arc::new(ConsoleConfirm);

    println!("storeadmin dashboard ({})", config.api_base_url);
    println!("type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["categories"] => {
                let mut page = categories_page(&api, &notifier, &confirm);
                page.mount().await;
                render::render_categories(&page.view());
            }
            ["category", "add", label @ ..] if !label.is_empty() => {
                let mut page = categories_page(&api, &notifier, &confirm);
                page.mount().await;
                page.set_label(label.join(" "));
                page.submit_new().await;
                render::render_categories(&page.view());
            }
            ["category", "rename", id, label @ ..] => {
                let mut page = categories_page(&api, &notifier, &confirm);
                page.mount().await;
                page.rename(id, &label.join(" ")).await;
                render::render_categories(&page.view());
            }
            ["category", "delete", id] => {
                let mut page = categories_page(&api, &notifier, &confirm);
                page.mount().await;
                page.remove(id).await;
                render::render_categories(&page.view());
            }
            ["orders"] => {
                let mut page = orders_page(&api, &notifier, &confirm);
                page.mount().await;
                render::render_orders(&page.view());
            }
            ["order", "add", name, email, total, products @ ..] => {
                add_order(&api, &notifier, name, email, total, products).await;
            }
            ["order", "status", id, status] => match status.parse::<OrderStatus>() {
                Ok(status) => {
                    let mut page = orders_page(&api, &notifier, &confirm);
                    page.mount().await;
                    page.set_status(id, status).await;
                    render::render_orders(&page.view());
                }
                Err(err) => notifier.error(&err),
            },
            ["order", "delete", id] => {
                let mut page = orders_page(&api, &notifier, &confirm);
                page.mount().await;
                page.remove(id).await;
                render::render_orders(&page.view());
            }
            ["product", id] => {
                let mut page = ProductEditPage::new(api.products(), notifier.clone(), *id);
                page.mount().await;
                render::render_product_edit(&page.view());
            }
            ["product", "edit", id] => {
                edit_product(&api, &notifier, id).await;
            }
            _ => println!("unknown command; type 'help'"),
        }
    }

    Ok(())
}

fn categories_page(
    api: &StoreApi,
    notifier: &Arc<dyn Notifier>,
    confirm: &Arc<dyn ConfirmDialog>,
) -> CategoriesPage {
    CategoriesPage::new(api.categories(), notifier.clone(), confirm.clone())
}

fn orders_page(
    api: &StoreApi,
    notifier: &Arc<dyn Notifier>,
    confirm: &Arc<dyn ConfirmDialog>,
) -> OrdersPage {
    OrdersPage::new(api.orders(), notifier.clone(), confirm.clone())
}

async fn add_order(
    api: &StoreApi,
    notifier: &Arc<dyn Notifier>,
    name: &str,
    email: &str,
    total: &str,
    products: &[&str],
) {
    let Ok(total_price) = total.parse::<f64>() else {
        notifier.error("total must be a number");
        return;
    };
    let req = CreateOrderRequest {
        customer_name: name.to_owned(),
        customer_email: email.to_owned(),
        products: products
            .iter()
            .map(|p| OrderedProduct {
                name: (*p).to_owned(),
                price: None,
            })
            .collect(),
        total_price,
    };
    match api.orders().create(&req).await {
        Ok(order) => notifier.success(&format!("Order {} has been created", order.id)),
        Err(err) => notifier.error(&err.to_string()),
    }
}

/// Interactive field-by-field edit; an empty answer keeps the current value.
async fn edit_product(api: &StoreApi, notifier: &Arc<dyn Notifier>, id: &str) {
    let mut page = ProductEditPage::new(api.products(), notifier.clone(), id);
    page.mount().await;
    let view = page.view();
    render::render_product_edit(&view);
    if page.is_not_found() {
        return;
    }

    if let Some(name) = ask("Name") {
        page.set_name(name);
    }
    if let Some(description) = ask("Description") {
        page.set_description(description);
    }
    if let Some(price) = ask("Price") {
        match price.parse::<f64>() {
            Ok(price) => page.set_price(price),
            Err(_) => {
                notifier.error("price must be a number");
                return;
            }
        }
    }
    if let Some(category) = ask("Category") {
        match category.parse::<ProductCategory>() {
            Ok(category) => page.set_category(category),
            Err(err) => {
                notifier.error(&err);
                return;
            }
        }
    }

    if page.submit().await == SubmitOutcome::Saved {
        println!("returning to the dashboard home");
    }
}

fn ask(field: &str) -> Option<String> {
    print!("{field} (blank keeps current): ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return None;
    }
    let answer = answer.trim();
    (!answer.is_empty()).then(|| answer.to_owned())
}

fn print_help() {
    println!("commands:");
    println!("  categories                                 show the category table");
    println!("  category add <label>                       create a category");
    println!("  category rename <id> <label>               update a category label");
    println!("  category delete <id>                       delete (asks for confirmation)");
    println!("  orders                                     show the orders table");
    println!("  order add <name> <email> <total> [items]   create a pending order");
    println!("  order status <id> <paid|failed|completed>  change an order status");
    println!("  order delete <id>                          delete (asks for confirmation)");
    println!("  product <id>                               show the edit form for a product");
    println!("  product edit <id>                          edit a product interactively");
    println!("  quit");
}
