use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use labelforge_designer::{
    placeholder, process_import, validate_import, Category, DocumentFile, SampleData,
    TemplateLibrary,
};

#[derive(Parser)]
#[command(name = "labelforge", version, about = "Inspect, validate, and resolve designer documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a document file without committing anything
    Validate {
        file: PathBuf,
    },
    /// Summarize a document: pages, elements, placeholders
    Info {
        file: PathBuf,
    },
    /// Resolve placeholders against sample data and write the result
    Resolve {
        file: PathBuf,
        /// Sample data category (invoice, label, receipt, badge,
        /// certificate); all categories merged when omitted
        #[arg(long)]
        category: Option<String>,
        /// Output path; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the stock template library
    Templates {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by search query
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    labelforge::init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Validate { file } => validate(&file),
        Command::Info { file } => info(&file),
        Command::Resolve {
            file,
            category,
            out,
        } => resolve(&file, category.as_deref(), out.as_deref()),
        Command::Templates { category, search } => templates(category.as_deref(), search.as_deref()),
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn validate(path: &Path) -> Result<()> {
    let value = read_json(path)?;
    match validate_import(&value) {
        Ok(()) => {
            println!("{}: OK", path.display());
            Ok(())
        }
        Err(err) => bail!("{}: {err}", path.display()),
    }
}

fn info(path: &Path) -> Result<()> {
    let value = read_json(path)?;
    let document = process_import(value)?;

    println!("pages: {}", document.pages.len());
    for (i, page) in document.pages.iter().enumerate() {
        let mut kinds: Vec<(&str, usize)> = Vec::new();
        for element in &page.elements {
            let name = element.display_name();
            match kinds.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => kinds.push((name, 1)),
            }
        }
        let summary: Vec<String> = kinds
            .iter()
            .map(|(name, count)| format!("{count} {name}"))
            .collect();
        println!(
            "  page {}: {}x{}, {} elements{}",
            i + 1,
            page.size.width,
            page.size.height,
            page.elements.len(),
            if summary.is_empty() {
                String::new()
            } else {
                format!(" ({})", summary.join(", "))
            }
        );
    }

    let mut tokens = Vec::new();
    for page in &document.pages {
        for element in &page.elements {
            for token in placeholder::element_tokens(element) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }
    }
    if tokens.is_empty() {
        println!("placeholders: none");
    } else {
        println!("placeholders: {}", tokens.join(", "));
    }
    Ok(())
}

fn resolve(path: &Path, category: Option<&str>, out: Option<&Path>) -> Result<()> {
    let value = read_json(path)?;
    let document = process_import(value)?;

    let data = match category {
        Some(name) => {
            let Some(category) = Category::parse(name) else {
                bail!("unknown category '{name}'");
            };
            SampleData::for_category(Some(category))
        }
        None if !document.sample_data.is_empty() => document.sample_data.clone(),
        None => SampleData::merged(),
    };

    let mut file = DocumentFile::new(
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string()),
    );
    file.pages = document
        .pages
        .iter()
        .map(|page| {
            let mut resolved = page.clone();
            resolved.elements = page
                .elements
                .iter()
                .map(|el| placeholder::resolve_element(el, &data))
                .collect();
            resolved
        })
        .collect();

    match out {
        Some(out) => {
            file.save_to_file(out)?;
            println!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&file)?),
    }
    Ok(())
}

fn templates(category: Option<&str>, search: Option<&str>) -> Result<()> {
    let library = TemplateLibrary::builtin();
    let listed: Vec<_> = match (category, search) {
        (Some(name), _) => {
            let Some(category) = Category::parse(name) else {
                bail!("unknown category '{name}'");
            };
            library.by_category(category)
        }
        (None, Some(query)) => library.search(query),
        (None, None) => library.iter().collect(),
    };

    for template in listed {
        println!(
            "{:<24} {:<12} {} [{}]",
            template.id,
            template.category.as_str(),
            template.name,
            template.tags.join(", ")
        );
    }
    Ok(())
}
