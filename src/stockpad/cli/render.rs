//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Layout (widths, truncation,
//! padding) is computed here with Unicode-aware widths; colors come from
//! `colored`, which turns itself off when stdout is not a terminal.

use chrono::{DateTime, Utc};
use colored::Colorize;
use stockpad::api::{CmdMessage, MessageLevel};
use stockpad::config::{StockConfig, KEYS};
use stockpad::index::DisplayRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 90;
const INDEX_WIDTH: usize = 5;
const QTY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 14;
const TIME_WIDTH: usize = 16;

pub fn render_record_list(records: &[DisplayRecord], currency: &str) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let name_width =
        LINE_WIDTH.saturating_sub(INDEX_WIDTH + QTY_WIDTH + PRICE_WIDTH + TIME_WIDTH + 4);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>iw$} {} {:>qw$} {:>pw$} {:>tw$}\n",
        "#",
        pad_to_width("Name", name_width),
        "Qty",
        "Price",
        "Updated",
        iw = INDEX_WIDTH,
        qw = QTY_WIDTH,
        pw = PRICE_WIDTH,
        tw = TIME_WIDTH,
    )
    .dimmed()
    .to_string());

    for dr in records {
        let idx = format!("{:>w$}", format!("{}.", dr.index), w = INDEX_WIDTH);
        let name = pad_to_width(&truncate_to_width(&dr.record.name, name_width), name_width);
        let qty = format!("{:>w$}", dr.record.quantity, w = QTY_WIDTH);
        let price = format!("{:>w$}", format_price(dr.record.price, currency), w = PRICE_WIDTH);
        let time = format!("{:>w$}", format_time_ago(dr.record.updated_at), w = TIME_WIDTH);

        let qty = if dr.record.quantity == 0 {
            qty.red().to_string()
        } else {
            qty
        };

        out.push_str(&format!(
            "{} {} {} {} {}\n",
            idx.yellow(),
            name,
            qty,
            price,
            time.dimmed()
        ));
    }

    out
}

pub fn render_full_records(records: &[DisplayRecord], currency: &str) -> String {
    let mut out = String::new();
    for (i, dr) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} {}\n",
            format!("{}.", dr.index).yellow(),
            dr.record.name.bold()
        ));
        out.push_str(&format!("   Quantity: {}\n", dr.record.quantity));
        out.push_str(&format!(
            "   Price:    {}\n",
            format_price(dr.record.price, currency)
        ));
        out.push_str(&format!(
            "   Added:    {}\n",
            dr.record.added_at.format("%Y-%m-%d %H:%M")
        ));
        out.push_str(&format!(
            "   Updated:  {}\n",
            dr.record.updated_at.format("%Y-%m-%d %H:%M")
        ));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| {
            let line = match m.level {
                MessageLevel::Info => m.content.dimmed(),
                MessageLevel::Success => m.content.green(),
            };
            format!("{}\n", line)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_config(config: &StockConfig) -> String {
    KEYS.iter()
        .map(|key| {
            format!(
                "{} = {}\n",
                key.bold(),
                config.get(key).unwrap_or_default()
            )
        })
        .collect()
}

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
