//! Message templates for chat and email notifications.

use rust_decimal::Decimal;

use crate::domain::{
    notifications::models::{
        BankDetails, OrderConfirmation, RenderedEmail, SaleNotice, TransferNotice,
    },
    purchases::data::NewPurchaseItem,
};

const NOT_AVAILABLE: &str = "N/A";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn or_na(value: Option<&str>) -> &str {
    value.filter(|value| !value.is_empty()).unwrap_or(NOT_AVAILABLE)
}

fn money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

fn item_lines(items: &[NewPurchaseItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "- {} x{} @ {}\n",
                item.product_name,
                item.quantity,
                money(item.price)
            )
        })
        .collect()
}

fn item_list_html(items: &[NewPurchaseItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                "<li>{} x{} @ {}</li>",
                escape_html(&item.product_name),
                item.quantity,
                money(item.price)
            )
        })
        .collect()
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Chat message announcing an approved sale to the shop owner.
#[must_use]
pub fn sale_chat_message(sale: &SaleNotice) -> String {
    let net_amount = sale
        .net_amount
        .map_or_else(|| NOT_AVAILABLE.to_string(), money);

    let installments = sale
        .installments
        .map_or_else(|| NOT_AVAILABLE.to_string(), |count| count.to_string());

    format!(
        "New sale!\n\n\
         Amount: {amount}\n\
         Net amount: {net_amount}\n\
         Payment ID: {payment_id}\n\
         Status: {status}\n\
         Method: {method} ({card_type})\n\
         Customer: {customer}\n\
         Description: {description}\n\
         Date: {date}\n\n\
         Details:\n\
         - Installments: {installments}\n\
         - Last 4 digits: {last_digits}",
        amount = money(sale.amount),
        payment_id = sale.payment_id,
        status = sale.status,
        method = sale.payment_method,
        card_type = or_na(sale.card_type.as_deref()),
        customer = sale
            .customer_email
            .as_deref()
            .filter(|email| !email.is_empty())
            .unwrap_or("Not provided"),
        description = or_na(sale.description.as_deref()),
        date = sale.date.strftime(DATE_FORMAT),
        last_digits = or_na(sale.card_last_digits.as_deref()),
    )
}

/// Receipt emailed to the customer after an approved card payment.
#[must_use]
pub fn sale_confirmation_email(sale: &SaleNotice) -> RenderedEmail {
    let text = format!(
        "Thank you for your purchase!\n\n\
         Payment ID: {payment_id}\n\
         Description: {description}\n\
         Amount: {amount}\n\
         Date: {date}\n",
        payment_id = sale.payment_id,
        description = or_na(sale.description.as_deref()),
        amount = money(sale.amount),
        date = sale.date.strftime(DATE_FORMAT),
    );

    RenderedEmail {
        subject: "Your payment was approved".to_string(),
        text,
        html: None,
    }
}

/// Bank transfer instructions emailed to the customer.
#[must_use]
pub fn transfer_instructions_email(transfer: &TransferNotice, bank: &BankDetails) -> RenderedEmail {
    let text = format!(
        "Thank you for your order!\n\n\
         Please transfer {amount} to the following account:\n\n\
         Account holder: {holder}\n\
         Bank: {bank}\n\
         Account: {account}\n\
         Alias: {alias}\n\n\
         Use this reference in the transfer: {reference}\n\n\
         Order:\n{items}",
        amount = money(transfer.amount),
        holder = bank.holder,
        bank = bank.bank,
        account = bank.account,
        alias = bank.alias,
        reference = transfer.reference,
        items = item_lines(&transfer.items),
    );

    let html = format!(
        "<h2>Thank you for your order!</h2>\
         <p>Please transfer <strong>{amount}</strong> to the following account:</p>\
         <ul>\
         <li>Account holder: {holder}</li>\
         <li>Bank: {bank}</li>\
         <li>Account: {account}</li>\
         <li>Alias: {alias}</li>\
         </ul>\
         <p>Use this reference in the transfer: <strong>{reference}</strong></p>\
         <h3>Order</h3><ul>{items}</ul>",
        amount = money(transfer.amount),
        holder = escape_html(&bank.holder),
        bank = escape_html(&bank.bank),
        account = escape_html(&bank.account),
        alias = escape_html(&bank.alias),
        reference = escape_html(&transfer.reference),
        items = item_list_html(&transfer.items),
    );

    RenderedEmail {
        subject: format!("Bank transfer instructions ({})", transfer.reference),
        text,
        html: Some(html),
    }
}

/// Chat message announcing a registered bank transfer to the shop owner.
#[must_use]
pub fn transfer_chat_message(transfer: &TransferNotice) -> String {
    format!(
        "New bank transfer order!\n\n\
         Amount: {amount}\n\
         Reference: {reference}\n\
         Customer: {customer}\n\
         Status: pending\n\n\
         Items:\n{items}",
        amount = money(transfer.amount),
        reference = transfer.reference,
        customer = transfer.customer_email,
        items = item_lines(&transfer.items),
    )
}

/// Order confirmation emailed on request.
#[must_use]
pub fn order_confirmation_email(order: &OrderConfirmation) -> RenderedEmail {
    let text = format!(
        "Thank you for your purchase!\n\n\
         Your order ID is: {order_id}\n\n\
         Order details:\n{items}\n\
         Total: {total}",
        order_id = order.order_id,
        items = item_lines(&order.items),
        total = money(order.total),
    );

    RenderedEmail {
        subject: "Your order confirmation".to_string(),
        text,
        html: None,
    }
}
