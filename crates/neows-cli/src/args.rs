//! Command-line arguments for the feed client.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "List near-Earth objects with close approaches in a date window")]
pub struct CliArgs {
    /// First day of the window (format: YYYY-MM-DD).
    #[arg(long)]
    pub start_date: String,

    /// Last day of the window (format: YYYY-MM-DD). Defaults to 7 days after the start.
    #[arg(long, default_value = "")]
    pub end_date: String,

    /// api.nasa.gov key. Falls back to DEMO_KEY when unset.
    #[arg(long, env = "NASA_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Only list potentially hazardous objects.
    #[arg(long)]
    pub hazardous_only: bool,

    /// Print decoded records as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["neows", "--start-date", "2023-01-01"]).unwrap();
        assert_eq!(args.start_date, "2023-01-01");
        assert_eq!(args.end_date, "");
        assert!(!args.hazardous_only);
        assert!(!args.json);
    }

    #[test]
    fn test_start_date_required() {
        assert!(CliArgs::try_parse_from(["neows"]).is_err());
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::try_parse_from([
            "neows",
            "--start-date",
            "2023-01-01",
            "--end-date",
            "2023-01-03",
            "--api-key",
            "abc",
            "--hazardous-only",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.end_date, "2023-01-03");
        assert_eq!(args.api_key, "abc");
        assert!(args.hazardous_only);
        assert!(args.json);
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
