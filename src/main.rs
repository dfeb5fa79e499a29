//! Profile scorer: rule-based professional profile scoring tool

use clap::Parser;
use log::{error, info};
use profile_scorer::cli::{self, Cli, Commands, ConfigAction, ReportArgs};
use profile_scorer::config::{Config, OutputFormat};
use profile_scorer::error::{ProfileScorerError, Result};
use profile_scorer::input::{DemoProfileSource, InputManager, JsonFileSource, ProfileSource};
use profile_scorer::output::formatter::format_highlights;
use profile_scorer::output::{save_report_to_file, suggest_filename, ProfileReport, ReportGenerator};
use profile_scorer::processing::analyzer::ScoringEngine;
use profile_scorer::processing::suggestions::ContentSuggester;
use profile_scorer::processing::text_processor::ResumeExtractor;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze { profile, report } => {
            cli::validate_file_extension(&profile, &["json"])
                .map_err(|e| ProfileScorerError::InvalidInput(format!("Profile file: {}", e)))?;

            info!("Scoring profile from {}", profile.display());
            let mut source = JsonFileSource::new(profile);
            score_and_report(&mut source, &config, &report).await
        }

        Commands::Demo { username, url, report } => {
            let mut source = match (username, url) {
                (Some(handle), _) => DemoProfileSource::new(handle),
                (None, Some(url)) => DemoProfileSource::from_url(&url)?,
                (None, None) => {
                    return Err(ProfileScorerError::InvalidInput(
                        "Either --username or --url is required".to_string(),
                    ))
                }
            };

            info!("Scoring demo profile '{}'", source.handle());
            score_and_report(&mut source, &config, &report).await
        }

        Commands::Extract { resume, output } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ProfileScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let format = cli::parse_output_format(&output).map_err(ProfileScorerError::InvalidInput)?;
            if !matches!(format, OutputFormat::Console | OutputFormat::Json) {
                return Err(ProfileScorerError::InvalidInput(
                    "Resume highlights support console and json output".to_string(),
                ));
            }

            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters from {}", text.len(), resume.display());

            let extractor = ResumeExtractor::from_config(&config)?;
            let highlights = extractor.extract_all(&text);
            println!("{}", format_highlights(&highlights, format, config.output.color_output)?);
            Ok(())
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let rendered = toml::to_string_pretty(&config).map_err(|e| {
                        ProfileScorerError::Configuration(format!("Failed to render config: {}", e))
                    })?;
                    println!("{}", rendered);
                }
                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }
                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
            Ok(())
        }
    }
}

async fn score_and_report<S: ProfileSource>(source: &mut S, config: &Config, args: &ReportArgs) -> Result<()> {
    let format = match &args.output {
        Some(raw) => cli::parse_output_format(raw).map_err(ProfileScorerError::InvalidInput)?,
        None => config.output.format,
    };

    let profile = source.load().await?;
    let engine = ScoringEngine::new(&config.scoring)?;
    let analysis = engine.analyze(&profile);

    let suggestions = if config.output.include_suggestions && !args.no_suggestions {
        ContentSuggester::new(&config.suggestions).suggest(&profile)
    } else {
        Vec::new()
    };

    let report = ProfileReport::new(analysis, suggestions, source.describe(), profile.full_name.clone());

    let mut output_config = config.output.clone();
    output_config.detailed |= args.detailed;
    let generator = ReportGenerator::from_config(&output_config);
    let rendered = generator.generate_report(&report, format)?;

    match &args.save {
        Some(path) => {
            let path = if path.is_dir() {
                let subject = profile.public_identifier.as_deref().unwrap_or("profile");
                path.join(suggest_filename(format, subject, true))
            } else {
                path.clone()
            };

            // Saved console reports are plain text.
            let content = if format == OutputFormat::Console && output_config.color_output {
                output_config.color_output = false;
                ReportGenerator::from_config(&output_config).generate_report(&report, format)?
            } else {
                rendered
            };

            save_report_to_file(&content, &path)?;
            println!("📁 Report saved to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
