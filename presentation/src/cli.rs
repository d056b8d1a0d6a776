//! CLI command definitions

use advisor_application::ClientConfig;
use advisor_domain::{Gender, HealthProfile, Model, ProfileError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the recommendation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Summary plus one card per supplement
    Cards,
    /// Only the summary line
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for supplement-advisor
#[derive(Parser, Debug)]
#[command(name = "supplement-advisor")]
#[command(version, about = "Health-profile based supplement recommendations")]
#[command(long_about = r#"
Supplement Advisor collects a health profile and asks a chat-completion
model for personalized supplement recommendations. Without an API key
(or with --mock) a deterministic rule-based recommendation is produced
locally.

Configuration is loaded from (lowest to highest priority):
1. Built-in defaults
2. ~/.config/supplement-advisor/config.toml
3. ./advisor.toml or ./.advisor.toml
4. --config <path>
5. ADVISOR_* environment variables (ADVISOR_MODEL, ADVISOR_USE_MOCK, ...)

The API key comes from OPENAI_API_KEY (or the configured api_key_env).

Example:
  supplement-advisor --age 30 --gender male --weight 70 \
      --concern 피로 --lifestyle 스트레스_높음
  supplement-advisor --age 45 --gender female --weight 58 --smoking --mock
"#)]
pub struct Cli {
    /// Age in years
    #[arg(long, required_unless_present = "list_options")]
    pub age: Option<u32>,

    /// Gender: male, female or other
    #[arg(long, required_unless_present = "list_options")]
    pub gender: Option<Gender>,

    /// Body weight in kilograms
    #[arg(long, required_unless_present = "list_options")]
    pub weight: Option<f64>,

    /// Current smoker
    #[arg(long)]
    pub smoking: bool,

    /// Current medications, free text
    #[arg(long)]
    pub medications: Option<String>,

    /// Health concern (repeatable; see --list-options)
    #[arg(short = 'c', long = "concern", value_name = "CONCERN")]
    pub concerns: Vec<String>,

    /// Lifestyle selection (repeatable; see --list-options)
    #[arg(short = 'l', long = "lifestyle", value_name = "LIFESTYLE")]
    pub lifestyle: Vec<String>,

    /// Force the deterministic mock recommendation
    #[arg(long)]
    pub mock: bool,

    /// Override the configured model
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "cards")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Print the accepted concern/lifestyle options and exit
    #[arg(long)]
    pub list_options: bool,
}

impl Cli {
    /// Build and validate the health profile from the arguments.
    ///
    /// Presence of age/gender/weight is enforced by clap unless
    /// `--list-options` short-circuits; absent values fall through to
    /// validation and fail there.
    pub fn build_profile(&self) -> Result<HealthProfile, ProfileError> {
        let profile = HealthProfile::new(
            self.age.unwrap_or(0),
            self.gender.unwrap_or(Gender::Other),
            self.weight.unwrap_or(0.0),
            self.smoking,
        )
        .with_medications(self.medications.clone().unwrap_or_default())
        .with_concerns(self.concerns.clone())
        .with_lifestyle(self.lifestyle.clone());
        profile.validate()?;
        Ok(profile)
    }

    /// Apply CLI flags on top of the loaded configuration.
    pub fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(model) = &self.model {
            config.model = Model::new(model);
        }
        if self.mock {
            config.use_mock = true;
        }
        config
    }
}
