use anyhow::Result;
use clap::{Parser, Subcommand};
use deck_parse::{CmarkRenderer, DeckOptions};

mod build;

#[derive(Parser)]
#[command(
    name = "deckdown",
    version,
    about = "Split annotated markdown outlines into slide decks"
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform one outline document into slide markup
    Render {
        /// Path to the outline .md file
        file: String,

        /// Wrapper element for slides without a tag-name override
        #[arg(long, default_value = deck_parse::DEFAULT_TAG)]
        tag: String,

        /// Engine name passed to the markdown renderer
        #[arg(long, default_value = deck_parse::DEFAULT_ENGINE)]
        engine: String,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the segmentation (preamble + slide fragments) as JSON
    Split {
        /// Path to the outline .md file
        file: String,

        /// Wrapper element for slides without a tag-name override
        #[arg(long, default_value = deck_parse::DEFAULT_TAG)]
        tag: String,
    },

    /// Transform every .md outline under a directory
    Build {
        /// Directory containing outline documents
        dir: String,

        /// Output directory for the generated .html files
        #[arg(long, default_value = "_site")]
        out: String,

        /// Wrapper element for slides without a tag-name override
        #[arg(long, default_value = deck_parse::DEFAULT_TAG)]
        tag: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            tag,
            engine,
            output,
        } => {
            let options = DeckOptions {
                default_tag: tag,
                engine,
            };
            handle_render(&file, &options, output.as_deref()).await?;
        }
        Commands::Split { file, tag } => {
            let options = DeckOptions {
                default_tag: tag,
                ..Default::default()
            };
            handle_split(&file, &options)?;
        }
        Commands::Build { dir, out, tag } => {
            let options = DeckOptions {
                default_tag: tag,
                ..Default::default()
            };
            build::handle_build(&dir, &out, &options, cli.quiet).await?;
        }
    }

    Ok(())
}

async fn handle_render(file: &str, options: &DeckOptions, output: Option<&str>) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let result = deck_parse::split(&content, options);
    print_diagnostics(file, &result.diagnostics);

    let markup = result.deck.to_markup(&CmarkRenderer, options).await?;

    match output {
        Some(path) => std::fs::write(path, &markup)
            .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", path, e))?,
        None => println!("{markup}"),
    }
    Ok(())
}

fn handle_split(file: &str, options: &DeckOptions) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let result = deck_parse::split(&content, options);

    let json = serde_json::json!({
        "preamble": result.deck.preamble,
        "slides": result.deck.slides,
        "diagnostics": result.diagnostics,
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_diagnostics(file: &str, diagnostics: &[deck_parse::Diagnostic]) {
    for diag in diagnostics {
        let line_info = match diag.line {
            Some(line) => format!("{}:{}", file, line),
            None => file.to_string(),
        };
        eprintln!("{}: {}", line_info, diag.message);
    }
}
