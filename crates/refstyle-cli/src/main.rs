use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use refstyle::{format, CitationFields, CitationStyle, FormatOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "refstyle")]
#[command(about = "Format bibliographic fields as APA, MLA, or Chicago citations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a citation from field values
    Format {
        /// Citation style (apa, mla, or chicago)
        #[arg(short, long, default_value = "apa")]
        style: String,

        /// Author(s); separate multiple authors with " and "
        #[arg(long, default_value = "")]
        author: String,

        /// Publication year
        #[arg(long, default_value = "")]
        year: String,

        /// Title of the work
        #[arg(long, default_value = "")]
        title: String,

        /// Publisher, journal, or container
        #[arg(long, default_value = "")]
        source: String,

        /// Locator URL
        #[arg(long, default_value = "")]
        url: String,

        /// Read the field record from a JSON file instead of flags ("-" for stdin)
        #[arg(
            long,
            value_name = "PATH",
            conflicts_with_all = ["author", "year", "title", "source", "url"]
        )]
        from_json: Option<PathBuf>,

        /// Pass author names through without "Last, F." normalization
        #[arg(long)]
        raw_authors: bool,

        /// Output the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported citation styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            style,
            author,
            year,
            title,
            source,
            url,
            from_json,
            raw_authors,
            json,
        } => {
            let style: CitationStyle = style.parse()?;
            let fields = match from_json {
                Some(path) => read_fields(&path)?,
                None => CitationFields {
                    author,
                    year,
                    title,
                    source,
                    url,
                },
            };
            let options = FormatOptions {
                normalize_author_names: !raw_authors,
            };

            let citation = format(&fields, style, &options);
            if json {
                let record = serde_json::json!({
                    "style": style,
                    "citation": citation,
                });
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!("{}", citation);
            }
            Ok(())
        }

        Commands::Styles => {
            for style in CitationStyle::ALL {
                println!("{:<8} {}", style.name().bold(), style.label());
            }
            Ok(())
        }
    }
}

/// Read a `CitationFields` record from a JSON file, or stdin when the path
/// is `-`.
fn read_fields(path: &Path) -> Result<CitationFields> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read field record from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid field record in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_args_parse() {
        let cli = Cli::parse_from([
            "refstyle", "format", "--style", "mla", "--author", "Jane Smith", "--year", "2024",
        ]);
        match cli.command {
            Commands::Format {
                style,
                author,
                year,
                raw_authors,
                ..
            } => {
                assert_eq!(style, "mla");
                assert_eq!(author, "Jane Smith");
                assert_eq!(year, "2024");
                assert!(!raw_authors);
            }
            _ => panic!("expected format subcommand"),
        }
    }
}
