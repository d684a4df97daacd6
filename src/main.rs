use clap::Parser;
use dolist::cli::Cli;
use dolist::model::{Category, Config, DateKey};
use dolist::tui;
use dolist::tui::theme::Theme;

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let category = cli
        .category
        .or(config.default_category)
        .unwrap_or(Category::Personal);
    let date = cli.date.unwrap_or_else(DateKey::today);
    let theme = Theme::from_config(&config.ui);

    if let Err(e) = tui::run(category, date, theme) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
