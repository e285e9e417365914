pub mod logging;
pub mod types;

use std::io::Read;
use std::path::Path;

use clap::Parser;

use crate::config::{self, TocConfig};
use crate::source;
use crate::toc::{self, ListType, OutlineTree};
use crate::utils::error::BoxResult;
use types::OutputFormat;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    logging::init_logging(cli.debug);

    if let Err(e) = generate(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn generate(cli: &types::Cli) -> BoxResult<()> {
    let config = resolve_config(cli)?;
    let html = read_input(cli.input.as_deref())?;

    let headlines = source::extract_headlines(&html, &config.selector)?;
    if headlines.is_empty() {
        log::info!("no headlines matched selector \"{}\"", config.selector);
        return write_output(cli.output.as_deref(), "");
    }

    let output = match cli.format {
        OutputFormat::Html => toc::generate_toc_html(&headlines, config.list_type)?,
        OutputFormat::Markdown => {
            toc::validate_headlines(&headlines)?;
            toc::render_markdown(&OutlineTree::build(&headlines))
        }
        OutputFormat::Json => {
            toc::validate_headlines(&headlines)?;
            serde_json::to_string_pretty(&OutlineTree::build(&headlines).to_items())?
        }
    };

    write_output(cli.output.as_deref(), &output)
}

/// Merge the config file (if any) with command-line overrides
fn resolve_config(cli: &types::Cli) -> BoxResult<TocConfig> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => TocConfig::default(),
    };

    if let Some(selector) = &cli.selector {
        config.selector = selector.clone();
    }
    if let Some(list_type) = &cli.list_type {
        config.list_type = ListType::parse(list_type);
    }

    Ok(config)
}

fn read_input(input: Option<&Path>) -> BoxResult<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> BoxResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            log::info!("wrote outline to {}", path.display());
        }
        None => {
            if !content.is_empty() {
                println!("{}", content);
            }
        }
    }
    Ok(())
}
