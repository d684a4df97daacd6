use std::path::PathBuf;

use clap::Parser;

use crate::model::{Category, DateKey};

#[derive(Parser)]
#[command(
    name = "dol",
    about = concat!("[v] dolist v", env!("CARGO_PKG_VERSION"), " - your day, one list at a time"),
    version
)]
pub struct Cli {
    /// Date to open with (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub date: Option<DateKey>,

    /// Category tab to open with
    #[arg(short, long, value_enum)]
    pub category: Option<Category>,

    /// Config file with UI color overrides
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "dol",
            "--date",
            "2024-01-01",
            "--category",
            "professional",
        ])
        .unwrap();
        assert_eq!(cli.date, Some("2024-01-01".parse().unwrap()));
        assert_eq!(cli.category, Some(Category::Professional));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["dol"]).unwrap();
        assert!(cli.date.is_none());
        assert!(cli.category.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Cli::try_parse_from(["dol", "--date", "01/02/2024"]).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_category() {
        assert!(Cli::try_parse_from(["dol", "--category", "work"]).is_err());
    }
}
