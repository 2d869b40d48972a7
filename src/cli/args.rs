use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "smoothie-shop")]
#[command(about = "Browse the smoothie menu and total up an order")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the menu with optional filtering and sorting
    Menu {
        /// Sort order
        #[arg(short, long, default_value = "menu")]
        sort: SortOrder,
        /// Only smoothies cheaper than this price
        #[arg(short, long)]
        max_price: Option<f64>,
        /// Show vegan smoothies only
        #[arg(long)]
        vegan: bool,
        /// Only smoothies containing this ingredient
        #[arg(short, long)]
        ingredient: Option<String>,
        /// Search keyword in the name
        #[arg(long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show detailed information about a smoothie
    Show {
        /// Smoothie name
        name: String,
    },
    /// Put smoothies in a basket and print the receipt
    Order {
        /// Smoothie names, repeat a name to order it twice
        #[arg(required = true)]
        names: Vec<String>,
        /// Print JSON instead of a receipt
        #[arg(long)]
        json: bool,
    },
    /// Show the summed price of the whole menu
    Total,
}

#[derive(Clone, ValueEnum)]
pub enum SortOrder {
    Menu,
    Name,
    Price,
}
