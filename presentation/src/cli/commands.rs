//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use inquiry_domain::catalog::codes;
use inquiry_domain::{BUDGET_RANGES, Field, FormState, Language, PROJECT_TYPES};
use std::path::PathBuf;

/// CLI arguments for studio-inquiry
#[derive(Parser, Debug)]
#[command(name = "studio-inquiry")]
#[command(author, version, about = "Contact-form inquiry handler for the studio website")]
#[command(long_about = r#"
studio-inquiry receives contact-form inquiries, stores them and notifies
the studio by email.

Subcommands:
  serve         Run the HTTP inquiry handler
  submit        Send one inquiry to a running handler, as the website form does
  show-config   Show configuration file locations and the resolved settings

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./inquiry.toml      Project-level config
3. ~/.config/studio-inquiry/config.toml   Global config

Secrets are read from INQUIRY_STORE_KEY and INQUIRY_NOTIFY_KEY.

Example:
  studio-inquiry serve --listen 127.0.0.1:8080
  studio-inquiry submit --name "Anna" --phone "+7 900 000 00 00" --project-type apartment
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP inquiry handler
    Serve {
        /// Address to listen on (overrides server.listen)
        #[arg(short, long, value_name = "ADDR")]
        listen: Option<String>,
    },
    /// Submit one inquiry to a running handler
    Submit(SubmitArgs),
    /// Show configuration file locations and the resolved settings
    ShowConfig,
}

/// Form fields of the `submit` subcommand
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Visitor name (required)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long, value_name = "CODE", help = format!("Project type: {}", codes(PROJECT_TYPES)))]
    pub project_type: Option<String>,

    /// Area in m²
    #[arg(long)]
    pub area: Option<String>,

    #[arg(long, value_name = "CODE", help = format!("Budget: {}", codes(BUDGET_RANGES)))]
    pub budget: Option<String>,

    #[arg(short, long)]
    pub message: Option<String>,

    /// Form language, ru or en (overrides client.language)
    #[arg(long, value_name = "LANG")]
    pub language: Option<Language>,

    /// Handler URL (overrides client.endpoint)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl SubmitArgs {
    /// The form as a visitor would have filled it in.
    pub fn to_form(&self) -> FormState {
        let values = [
            (Field::Name, &self.name),
            (Field::Phone, &self.phone),
            (Field::Email, &self.email),
            (Field::City, &self.city),
            (Field::ProjectType, &self.project_type),
            (Field::Area, &self.area),
            (Field::Budget, &self.budget),
            (Field::Message, &self.message),
        ];
        values
            .into_iter()
            .fold(FormState::new(), |form, (field, value)| match value {
                Some(v) => form.with(field, v.as_str()),
                None => form,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit() {
        let cli = Cli::parse_from([
            "studio-inquiry",
            "-vv",
            "submit",
            "--name",
            "Anna",
            "--email",
            "anna@example.com",
            "--project-type",
            "house",
            "--language",
            "en",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.language, Some(Language::En));

        let form = args.to_form();
        assert_eq!(form.get(Field::Name), "Anna");
        assert_eq!(form.get(Field::ProjectType), "house");
        assert_eq!(form.get(Field::Phone), "");
    }

    #[test]
    fn test_parse_serve_with_global_flags() {
        let cli = Cli::parse_from(["studio-inquiry", "serve", "--listen", "127.0.0.1:9000", "--no-config"]);
        assert!(cli.no_config);
        assert!(matches!(
            cli.command,
            Command::Serve { listen: Some(ref addr) } if addr == "127.0.0.1:9000"
        ));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let result = Cli::try_parse_from(["studio-inquiry", "submit", "--language", "de"]);
        assert!(result.is_err());
    }
}
