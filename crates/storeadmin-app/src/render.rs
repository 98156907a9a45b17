//! Text renderer: pure printing of the page view models. All branching
//! here mirrors the view model; no decisions are made from raw state.

use storeadmin_pages::pages::categories::CategoriesView;
use storeadmin_pages::pages::orders::{OrderRow, OrdersView};
use storeadmin_pages::pages::product_edit::ProductEditView;
use storeadmin_pages::view::TableBody;

pub fn render_categories(view: &CategoriesView) {
    println!("Categories");
    println!("  [Category Name: {:?}] [ADD]", view.label_field);
    println!("  {:<26} {:<24} Actions", "Id", "Name");
    match &view.body {
        TableBody::Empty { placeholder } => println!("  {placeholder}"),
        TableBody::Rows(rows) => {
            for row in rows {
                println!("  {:<26} {:<24} [Edit] [Delete]", row.id, row.label);
            }
        }
    }
}

pub fn render_orders(view: &OrdersView) {
    println!("My Orders");
    println!(
        "  {:<26} {:<24} {:<30} {:>10} {:<34} {:<26} Action",
        "Id", "Customer", "Products", "Total", "Status", "Payment Date"
    );
    match &view.body {
        TableBody::Empty { placeholder } => println!("  {placeholder}"),
        TableBody::Rows(rows) => {
            for row in rows {
                render_order_row(row);
            }
        }
    }
}

fn render_order_row(row: &OrderRow) {
    let customer = format!("{} <{}>", row.customer_name, row.customer_email);
    let products = row.product_names.join(", ");
    let status = if row.status_select.enabled {
        let options: Vec<String> = row
            .status_select
            .options
            .iter()
            .map(|o| {
                if o.enabled {
                    o.status.label().to_string()
                } else {
                    format!("({})", o.status.label())
                }
            })
            .collect();
        format!("{} [{}]", row.status.label(), options.join("|"))
    } else {
        format!("{} (locked)", row.status.label())
    };
    let paid_at = row
        .paid_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".into());
    let action = if row.can_delete { "[Delete]" } else { "" };
    println!(
        "  {:<26} {:<24} {:<30} {:>10.2} {:<34} {:<26} {}",
        row.id, customer, products, row.total_price, status, paid_at, action
    );
}

pub fn render_product_edit(view: &ProductEditView) {
    match view {
        ProductEditView::NotFound {
            message,
            back_label,
        } => {
            println!("{message}");
            println!("  [{back_label}]");
        }
        ProductEditView::Form(form) => {
            println!("Edit Product");
            println!("  Name:        {}", form.name);
            println!("  Description: {}", form.description);
            println!("  Price:       {:.2}", form.price);
            let selected = form
                .category
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| "-".into());
            let options: Vec<&str> = form.category_options.iter().map(|c| c.label()).collect();
            println!("  Category:    {} (one of: {})", selected, options.join(", "));
            println!("  [Update]");
        }
    }
}
