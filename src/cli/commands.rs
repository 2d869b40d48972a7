use std::sync::Arc;
use anyhow::{Context, Result};
use console::{style, Emoji};
use serde::Serialize;
use tracing::{error, info};

use crate::{
    cli::args::*,
    models::{priced_item::PricedItem, smoothie::Smoothie},
    repositories::InMemoryMenuRepository,
    services::{MenuService, MenuServiceError, SmoothieFilter, SortKey},
    utils::{
        formatting::{format_menu_table, format_price, format_receipt, format_smoothie_detail},
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CUP: Emoji<'_, '_> = Emoji("🥤 ", "");

#[derive(Serialize)]
struct OrderSummary<'a> {
    items: &'a [Smoothie],
    total: f64,
}

pub struct CliApp {
    config: Config,
    menu_service: Arc<MenuService>,
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        let menu_repo = Arc::new(
            InMemoryMenuRepository::house_menu().context("Failed to build the house menu")?,
        );
        let menu_service = Arc::new(MenuService::new(menu_repo));

        Ok(Self {
            config,
            menu_service,
        })
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Menu { sort, max_price, vegan, ingredient, search, json } => {
                self.handle_menu(sort, max_price, vegan, ingredient, search, json)
            }
            Commands::Show { name } => self.handle_show(&name),
            Commands::Order { names, json } => self.handle_order(&names, json),
            Commands::Total => self.handle_total(),
        }
    }

    fn handle_menu(&self, sort: SortOrder, max_price: Option<f64>, vegan: bool, ingredient: Option<String>, search: Option<String>, json: bool) -> Result<()> {
        let mut filter = SmoothieFilter::new();

        if let Some(price) = max_price {
            if !price.is_finite() {
                anyhow::bail!("--max-price must be a finite number, got {}", price);
            }
            filter = filter.cheaper_than(price);
        }
        if vegan {
            filter = filter.vegan_only();
        }
        if let Some(ingredient) = ingredient {
            filter = filter.with_ingredient(ingredient);
        }
        if let Some(search) = search {
            filter = filter.with_search(search);
        }

        let sort_key = match sort {
            SortOrder::Menu => SortKey::Menu,
            SortOrder::Name => SortKey::Name,
            SortOrder::Price => SortKey::Price,
        };

        let smoothies = self.menu_service.list(&filter, sort_key)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&smoothies)?);
        } else if smoothies.is_empty() {
            println!("{} No smoothies match", INFO);
        } else {
            println!(
                "{} {}",
                CUP,
                style(format!("{}: {} smoothies", self.config.shop_name, smoothies.len())).bold()
            );
            println!("{}", format_menu_table(&smoothies, &self.config.currency_symbol));
        }

        Ok(())
    }

    fn handle_show(&self, name: &str) -> Result<()> {
        match self.menu_service.find(name) {
            Ok(smoothie) => {
                println!("{} {}", INFO, style("Smoothie Details").bold().cyan());
                println!("{}", format_smoothie_detail(&smoothie, &self.config.currency_symbol));
            }
            Err(e) => {
                println!("{} {}", CROSS, style(&e).red());
                error!("Failed to show smoothie: {}", e);
            }
        }

        Ok(())
    }

    fn handle_order(&self, names: &[String], json: bool) -> Result<()> {
        let basket = self.menu_service.order(names).map_err(|e| {
            match &e {
                MenuServiceError::NotFound { name } => {
                    println!("{} '{}' is not on the menu", CROSS, style(name).red());
                }
                other => {
                    println!("{} Order failed: {}", CROSS, style(other).red());
                }
            }
            error!("Order failed: {}", e);
            e
        })?;

        if json {
            let summary = OrderSummary {
                items: basket.items(),
                total: basket.total_price(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{} Order placed at {}", CHECKMARK, style(&self.config.shop_name).cyan());
            print!("{}", format_receipt(&basket, &self.config.currency_symbol));
        }
        info!("Order placed: {} items", basket.len());

        Ok(())
    }

    fn handle_total(&self) -> Result<()> {
        let total = self.menu_service.menu_total()?;
        let cheapest = self.menu_service.list(&SmoothieFilter::new(), SortKey::Price)?;

        println!(
            "{} One of everything costs {}",
            INFO,
            style(format_price(total, &self.config.currency_symbol)).green()
        );
        if let Some(smoothie) = cheapest.first() {
            println!(
                "Cheapest: {} at {}",
                style(smoothie.name()).cyan(),
                format_price(smoothie.price(), &self.config.currency_symbol)
            );
        }

        Ok(())
    }
}
