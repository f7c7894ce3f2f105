//! arxiv-taxonomy — print arXiv's category taxonomy.

use clap::{Parser, ValueEnum};

use arxiv_taxonomy::{Taxonomy, TaxonomyClient, TaxonomyConfig};

#[derive(Parser)]
#[command(
    name = "arxiv-taxonomy",
    about = "Fetch arXiv's category taxonomy and print it",
    version
)]
struct Cli {
    /// Taxonomy page URL. Also reads ARXIV_TAXONOMY_URL.
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in milliseconds. Also reads ARXIV_TAXONOMY_TIMEOUT_MS.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Only print this subject (e.g. "Computer Science").
    #[arg(short, long)]
    subject: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = TaxonomyConfig::resolve(cli.url.as_deref(), cli.timeout_ms)?;
    let client = TaxonomyClient::new(config)?;

    let Some(mut taxonomy) = client.get_taxonomy().await else {
        anyhow::bail!("taxonomy unavailable from {}", client.config().url);
    };

    if let Some(subject) = cli.subject.as_deref() {
        taxonomy = match taxonomy.retain_subject(subject) {
            Some(t) => t,
            None => anyhow::bail!("no subject named {subject:?}"),
        };
    }

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&taxonomy)?),
        Format::Text => print!("{}", render_text(&taxonomy)),
    }

    Ok(())
}

fn render_text(taxonomy: &Taxonomy) -> String {
    let mut out = String::new();
    for (subject, categories) in taxonomy.iter() {
        out.push_str(subject);
        out.push('\n');
        for category in categories {
            out.push_str(&format!("  {:<18} {}\n", category.id, category.name));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use arxiv_taxonomy::Category;

    #[test]
    fn test_render_text() {
        let mut taxonomy = Taxonomy::new();
        taxonomy.insert_subject("Computer Science");
        taxonomy.push_category("Computer Science", Category::new("cs.LG", "Machine Learning"));
        taxonomy.push_category("Computer Science", Category::new("cs.CV", "Computer Vision"));
        taxonomy.insert_subject("Quantitative Finance");

        assert_eq!(
            render_text(&taxonomy),
            "Computer Science\n\
             \x20 cs.LG              Machine Learning\n\
             \x20 cs.CV              Computer Vision\n\
             Quantitative Finance\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&Taxonomy::new()), "");
    }
}
