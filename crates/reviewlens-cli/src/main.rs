mod cli;
mod input;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use reviewlens_classifiers::{FeatureExtractor, ReviewClassifier, SentimentAnalyzer};
use reviewlens_core::{AsinParser, Review};
use reviewlens_engine::{AnalysisEngine, EngineConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            config,
            output,
            pretty,
            verbose,
        } => {
            init_logging(verbose);

            let config = match config {
                Some(path) => EngineConfig::from_file(path)?,
                None => EngineConfig::default(),
            };
            let engine = AnalysisEngine::with_config(config)?;

            let mut request = input::load_request(&input)?;
            let parser = AsinParser::new()?;
            input::normalize(&mut request, &parser);

            let result = engine.analyze(&request).await?;

            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };

            match output {
                Some(path) => std::fs::write(path, json)?,
                None => println!("{json}"),
            }
        }

        Commands::Classify {
            text,
            rating,
            verified,
            verbose,
        } => {
            init_logging(verbose);

            let review = Review::new("cli", text, rating).verified(verified);
            review.validate_rating()?;

            let extractor = FeatureExtractor::new()?;
            let classifier = ReviewClassifier::new();
            let analyzer = SentimentAnalyzer::new();

            let features = extractor.extract(&review.text);
            let outcome = classifier.classify(&review, &features, None);
            let sentiment = analyzer.score(review.rating, &features);

            println!("classification: {}", outcome.classification.label());
            println!("confidence:     {}", outcome.confidence);
            println!("explanation:    {}", outcome.explanation);
            println!(
                "sentiment:      {} ({:.2})",
                sentiment.sentiment.label(),
                sentiment.score
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "reviewlens=debug"
    } else {
        "reviewlens=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
