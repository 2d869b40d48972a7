use console::style;
use tabled::{Table, Tabled, settings::{Style, Alignment}};

use crate::models::{basket::Basket, priced_item::PricedItem, smoothie::Smoothie};

#[derive(Tabled)]
struct SmoothieTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Vegan")]
    vegan: String,
    #[tabled(rename = "Ingredients")]
    ingredients: String,
}

pub fn format_price(price: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, price)
}

pub fn format_menu_table(smoothies: &[Smoothie], currency: &str) -> String {
    if smoothies.is_empty() {
        return String::new();
    }

    let rows: Vec<SmoothieTableRow> = smoothies
        .iter()
        .map(|smoothie| SmoothieTableRow {
            name: smoothie.name().to_string(),
            price: format_price(smoothie.price(), currency),
            vegan: if smoothie.is_vegan() { "yes" } else { "no" }.to_string(),
            ingredients: if smoothie.ingredients().is_empty() {
                "-".to_string()
            } else {
                smoothie.ingredients().join(", ")
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Alignment::left());

    table.to_string()
}

/// Line items followed by the total, ready to print
pub fn format_receipt<T: PricedItem>(basket: &Basket<T>, currency: &str) -> String {
    let mut output = String::new();

    for line in basket.printable_lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output.push_str(&format!(
        "{}: {}\n",
        style("Total").bold(),
        style(format_price(basket.total_price(), currency)).green()
    ));

    output
}

pub fn format_smoothie_detail(smoothie: &Smoothie, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Name").bold(), style(smoothie.name()).green()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Price").bold(),
        style(format_price(smoothie.price(), currency)).yellow()
    ));

    if smoothie.is_vegan() {
        output.push_str(&format!("{}: {}\n", style("Vegan").bold(), style("yes").green()));
    }

    if !smoothie.ingredients().is_empty() {
        output.push_str(&format!(
            "{}: {}\n",
            style("Ingredients").bold(),
            style(smoothie.ingredients().join(", ")).dim()
        ));
    }

    output
}
