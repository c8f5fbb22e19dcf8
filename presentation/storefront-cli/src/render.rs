use business::domain::cart::model::CartSnapshot;
use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::use_cases::submit::OrderConfirmation;

pub fn cart(snapshot: &CartSnapshot) -> String {
    if snapshot.is_empty() {
        return "Cart is empty".to_string();
    }

    let mut lines: Vec<String> = snapshot
        .items
        .iter()
        .map(|item| {
            format!(
                "{:<12} {:<24} {:>4} x {:>10} = {:>10}",
                item.product_id,
                item.name,
                item.quantity,
                item.unit_price,
                item.line_total()
            )
        })
        .collect();
    lines.push(format!(
        "{} items, total {}",
        snapshot.total_items, snapshot.total_price
    ));
    lines.join("\n")
}

/// Session line for `show`. The role is a display hint only.
pub fn session(logged_in: bool, role: Option<String>) -> String {
    if !logged_in {
        return "Not logged in".to_string();
    }
    format!("Logged in as {}", role.as_deref().unwrap_or("user"))
}

pub fn confirmation(confirmation: &OrderConfirmation) -> String {
    format!(
        "{}\norder: {}\nstatus: {}\ntotal: {}",
        confirmation.message,
        confirmation.order_id.as_deref().unwrap_or("(not reported)"),
        confirmation.status,
        confirmation.total
    )
}

pub fn checkout_error(error: &CheckoutError) -> String {
    match error {
        CheckoutError::EmptyCart => "Cart is empty, nothing to check out".to_string(),
        CheckoutError::SubmissionInProgress => "A checkout is already in progress".to_string(),
        CheckoutError::Network(message) => {
            format!("Could not reach the store, your cart was kept: {message}")
        }
        CheckoutError::Rejected { status: 401, .. } => {
            "Not logged in or session expired, your cart was kept. Run `login` and retry."
                .to_string()
        }
        CheckoutError::Rejected { status, message } => {
            format!("Order rejected ({status}): {message}. Your cart was kept.")
        }
    }
}
