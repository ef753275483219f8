//! The `generate` command - one trigger runs build-plan, render and export

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

use postplan_core::constants::planner;
use postplan_core::export::{write_csv_file, write_xlsx_file};
use postplan_core::source::LocalRandomSource;
use postplan_core::{
    build_plan, resolve_credential, select_source, ContentSource, CredentialPolicy,
    CredentialStore, PlanRequest,
};

use crate::config::CliConfig;
use crate::table;

/// Which export artifacts to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    #[default]
    Both,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Topic/category to generate content for
    #[arg(short, long, default_value = planner::DEFAULT_TOPIC)]
    pub topic: String,

    /// Number of days
    #[arg(
        short = 'd',
        long = "days",
        default_value_t = planner::DEFAULT_DAY_COUNT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(planner::MAX_DAY_COUNT))
    )]
    pub days: u32,

    /// Posts per day
    #[arg(
        short = 'p',
        long = "posts-per-day",
        default_value_t = planner::DEFAULT_POSTS_PER_DAY,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(planner::MAX_POSTS_PER_DAY))
    )]
    pub posts_per_day: u32,

    /// Provider to use (openai, groq)
    #[arg(long)]
    pub provider: Option<postplan_core::ProviderId>,

    /// Model ID (defaults to the provider's default model)
    #[arg(long)]
    pub model: Option<String>,

    /// Directory for the export files
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Which export files to write
    #[arg(long, value_enum, default_value = "both")]
    pub format: ExportFormat,

    /// Force the offline random source (no API calls)
    #[arg(long)]
    pub local: bool,

    /// Seed for the offline source (implies --local)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fail instead of falling back when no API key is configured
    #[arg(long)]
    pub require_ai: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            topic: planner::DEFAULT_TOPIC.to_string(),
            days: planner::DEFAULT_DAY_COUNT,
            posts_per_day: planner::DEFAULT_POSTS_PER_DAY,
            provider: None,
            model: None,
            out_dir: None,
            format: ExportFormat::Both,
            local: false,
            seed: None,
            require_ai: false,
        }
    }
}

pub async fn run(args: GenerateArgs) -> Result<()> {
    let config = CliConfig::load()?;

    let provider = args.provider.or(config.provider).unwrap_or_default();
    let model = args
        .model
        .or(config.model)
        .unwrap_or_else(|| postplan_core::ai::get_provider(provider).default_model.clone());
    let out_dir = args
        .out_dir
        .or(config.out_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    // Source selection happens once, before the generation loop
    let source: Box<dyn ContentSource> = if args.local || args.seed.is_some() {
        match args.seed {
            Some(seed) => Box::new(LocalRandomSource::seeded(seed)),
            None => Box::new(LocalRandomSource::new()),
        }
    } else {
        let store = CredentialStore::load()?;
        let credential = resolve_credential(provider, &store);
        let policy = if args.require_ai {
            CredentialPolicy::Required
        } else {
            CredentialPolicy::FallbackToLocal
        };
        select_source(provider, &model, credential, policy)?
    };

    let request = PlanRequest {
        topic: args.topic,
        day_count: args.days,
        posts_per_day: args.posts_per_day,
    };

    println!(
        "Content plan for \"{}\" - {} day(s), {} post(s)/day [source: {}]",
        request.topic,
        request.day_count,
        request.posts_per_day,
        source.name()
    );
    println!();

    let plan = build_plan(&request, source.as_ref()).await;
    print!("{}", table::render(&plan));
    println!();

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("cannot create output directory {}", out_dir.display()))?;

    if matches!(args.format, ExportFormat::Csv | ExportFormat::Both) {
        let path = write_csv_file(&plan, &out_dir)?;
        println!("Wrote {}", path.display());
    }
    if matches!(args.format, ExportFormat::Xlsx | ExportFormat::Both) {
        let path = write_xlsx_file(&plan, &out_dir)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_control_bounds_are_enforced() {
        assert!(TestCli::try_parse_from(["postplan", "-d", "100", "-p", "10"]).is_ok());
        assert!(TestCli::try_parse_from(["postplan", "-d", "0"]).is_err());
        assert!(TestCli::try_parse_from(["postplan", "-d", "101"]).is_err());
        assert!(TestCli::try_parse_from(["postplan", "-p", "0"]).is_err());
        assert!(TestCli::try_parse_from(["postplan", "-p", "11"]).is_err());
    }

    #[test]
    fn test_defaults_match_the_original_controls() {
        let cli = TestCli::try_parse_from(["postplan"]).unwrap();
        assert_eq!(cli.args.topic, "AI");
        assert_eq!(cli.args.days, 5);
        assert_eq!(cli.args.posts_per_day, 2);
        assert_eq!(cli.args.format, ExportFormat::Both);
    }
}
