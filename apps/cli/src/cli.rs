use clap::{Args, CommandFactory, Parser, Subcommand};
use guardrail_web::CheckForm;

#[derive(Debug, Parser)]
#[command(
    name = "guardrail",
    version,
    about = "Headless client for the Glocal Policy Guardrail"
)]
pub struct CliArgs {
    /// Base URL of the compliance API (overrides GUARDRAIL_API_URL)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Print the parsed response as JSON instead of HTML
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check content against a country's regulations
    Check(CheckArgs),
    /// Show the compliance detail for one country
    Country {
        /// Country identifier, e.g. south_korea
        id: String,
    },
    /// List recent regulatory updates
    Updates,
    /// Print the analytics chart configurations
    Analytics,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(long, default_value = "")]
    pub country: String,

    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub genre: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    /// The content carries advertising
    #[arg(long)]
    pub ads: bool,

    /// Ad date, YYYY-MM-DD
    #[arg(long = "ad-date", value_name = "DATE", default_value = "")]
    pub ad_date: String,

    /// Ad time, HH:MM
    #[arg(long = "ad-time", value_name = "TIME", default_value = "")]
    pub ad_time: String,
}

impl From<CheckArgs> for CheckForm {
    fn from(args: CheckArgs) -> Self {
        Self {
            country: args.country,
            title: args.title,
            genre: args.genre,
            description: args.description,
            tags: args.tags,
            has_ads: args.ads,
            ad_date: args.ad_date,
            ad_time: args.ad_time,
        }
    }
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("GUARDRAIL_API_URL", url);
        }
        if self.debug {
            std::env::set_var("GUARDRAIL_LOG", "debug");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_subcommands() {
        let help = CliArgs::help_text();
        for name in ["check", "country", "updates", "analytics", "--api-url"] {
            assert!(help.contains(name), "missing {name}");
        }
    }

    #[test]
    fn check_flags_map_onto_form() {
        let args = CliArgs::try_parse_from([
            "guardrail",
            "check",
            "--country",
            "south_korea",
            "--title",
            "Show A",
            "--tags",
            "a, b",
            "--ads",
            "--ad-date",
            "2025-03-01",
            "--ad-time",
            "20:30",
        ])
        .unwrap();

        let CliCommand::Check(check) = args.command else {
            panic!("expected check");
        };
        let form = CheckForm::from(check);
        assert_eq!(form.country, "south_korea");
        assert!(form.has_ads);
        assert_eq!(form.ad_time, "20:30");
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let args =
            CliArgs::try_parse_from(["guardrail", "country", "japan", "--json", "--api-url", "http://x/api"])
                .unwrap();

        assert!(args.json);
        assert_eq!(args.api_url.as_deref(), Some("http://x/api"));
        assert!(matches!(args.command, CliCommand::Country { ref id } if id == "japan"));
    }

    #[test]
    fn country_requires_an_id() {
        assert!(CliArgs::try_parse_from(["guardrail", "country"]).is_err());
    }
}
