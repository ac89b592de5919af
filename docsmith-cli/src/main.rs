use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docsmith::operations::{
    add_text, delete_pages, extract_text_summary, import_delimited, import_images, import_text,
    merge_documents, resize_document, split_range, DeleteRequest, DeletionSet, ExtractRequest,
    ImageImportOptions, ImageInput, MergeRequest, PageRange, ResizeRequest, SplitRequest,
    TableImportOptions, TextImportOptions, TextPlacement,
};
use docsmith::Document;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docsmith",
    about = "A document transformation tool: merge, split, resize, edit, convert",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge multiple documents into one
    Merge {
        /// Input document files (at least two)
        files: Vec<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Extract a page range into a new document
    Split {
        /// Input document file
        input: PathBuf,

        /// Page range to extract (e.g., "3" or "2-5", 1-indexed)
        #[arg(short, long)]
        pages: String,

        /// Output file path (defaults to <input>_pages_<from>-<to>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scale every page by a percentage
    Resize {
        /// Input document file
        input: PathBuf,

        /// Scale in percent (e.g., 50 halves, 200 doubles)
        #[arg(short, long)]
        scale: f64,

        /// Output file path (defaults to <input>_<scale>percent)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Insert a text string on a page
    AddText {
        /// Input document file
        input: PathBuf,

        /// Text to insert
        #[arg(short, long)]
        text: String,

        /// Target page (1-indexed, clamped to the last page)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Horizontal position in points from the left edge
        #[arg(short, long, default_value = "50")]
        x: f64,

        /// Vertical position in points from the top edge
        #[arg(short, long, default_value = "50")]
        y: f64,

        /// Output file path (defaults to <input>_edited)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete pages from a document
    DeletePages {
        /// Input document file
        input: PathBuf,

        /// Pages to delete (e.g., "1,3,5", 1-indexed)
        #[arg(short, long)]
        pages: String,

        /// Output file path (defaults to <input>_edited)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a document from image files, one page per image
    FromImages {
        /// Input image files (PNG or JPEG)
        files: Vec<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Build a document from a delimited text file (CSV)
    FromTable {
        /// Input delimited text file
        input: PathBuf,

        /// Output file path (defaults to <input> with the document extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a document from a plain text file
    FromText {
        /// Input text file
        input: PathBuf,

        /// Output file path (defaults to <input> with the document extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract a plain-text summary from a document
    ExtractText {
        /// Input document file
        input: PathBuf,

        /// Output text file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get information about a document file
    Info {
        /// Input document file
        input: PathBuf,
    },
}

fn load_document(path: &Path) -> Result<Document> {
    tracing::debug!(path = %path.display(), "loading document");
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Document::from_bytes(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))
}

fn save_document(document: &mut Document, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), pages = document.page_count(), "saving document");
    document
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Merge { files, output } => {
            let documents = files
                .iter()
                .map(|path| load_document(path))
                .collect::<Result<Vec<_>>>()?;

            let mut merged = merge_documents(&MergeRequest::new(documents))?;
            save_document(&mut merged, &output)?;
            println!(
                "✓ Merged {} documents into {}",
                files.len(),
                output.display()
            );
        }

        Commands::Split {
            input,
            pages,
            output,
        } => {
            let range = PageRange::parse(&pages).unwrap_or_else(|e| {
                eprintln!("Error parsing page range '{}': {}", pages, e);
                std::process::exit(1);
            });

            let source = load_document(&input)?;
            let mut out = split_range(&source, &SplitRequest::new(range))?;

            let output = output
                .unwrap_or_else(|| naming::with_suffix(&input, &naming::range_suffix(&range)));
            save_document(&mut out, &output)?;
            println!(
                "✓ Extracted {} pages into {}",
                out.page_count(),
                output.display()
            );
        }

        Commands::Resize {
            input,
            scale,
            output,
        } => {
            let mut document = load_document(&input)?;
            resize_document(&mut document, &ResizeRequest::from_percent(scale))?;

            let output = output
                .unwrap_or_else(|| naming::with_suffix(&input, &naming::percent_suffix(scale)));
            save_document(&mut document, &output)?;
            println!("✓ Resized to {}% in {}", scale, output.display());
        }

        Commands::AddText {
            input,
            text,
            page,
            x,
            y,
            output,
        } => {
            let mut document = load_document(&input)?;
            add_text(&mut document, &TextPlacement::new(text, page, x, y))?;

            let output = output.unwrap_or_else(|| naming::with_suffix(&input, "_edited"));
            save_document(&mut document, &output)?;
            println!("✓ Inserted text on page {} in {}", page, output.display());
        }

        Commands::DeletePages {
            input,
            pages,
            output,
        } => {
            let set = DeletionSet::parse(&pages).unwrap_or_else(|e| {
                eprintln!("Error parsing page list '{}': {}", pages, e);
                std::process::exit(1);
            });

            let mut document = load_document(&input)?;
            let removed = delete_pages(&mut document, &DeleteRequest::new(set))?;

            let output = output.unwrap_or_else(|| naming::with_suffix(&input, "_edited"));
            save_document(&mut document, &output)?;
            println!("✓ Deleted {} pages in {}", removed, output.display());
        }

        Commands::FromImages { files, output } => {
            let inputs = files
                .iter()
                .map(|path| {
                    let data = std::fs::read(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    Ok(ImageInput::new(naming::stem(path), data))
                })
                .collect::<Result<Vec<_>>>()?;

            let mut document = import_images(&inputs, &ImageImportOptions::default())?;
            save_document(&mut document, &output)?;
            println!(
                "✓ Converted {} images into {}",
                inputs.len(),
                output.display()
            );
        }

        Commands::FromTable { input, output } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let options = TableImportOptions {
                title: Some(naming::stem(&input)),
                ..Default::default()
            };
            let mut document = import_delimited(&text, &options)?;

            let output = output.unwrap_or_else(|| naming::with_extension(&input));
            save_document(&mut document, &output)?;
            println!(
                "✓ Converted table into {} ({} pages)",
                output.display(),
                document.page_count()
            );
        }

        Commands::FromText { input, output } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let mut document = import_text(&text, &TextImportOptions::default())?;

            let output = output.unwrap_or_else(|| naming::with_extension(&input));
            save_document(&mut document, &output)?;
            println!(
                "✓ Converted text into {} ({} pages)",
                output.display(),
                document.page_count()
            );
        }

        Commands::ExtractText { input, output } => {
            let document = load_document(&input)?;
            let summary = extract_text_summary(
                &document,
                &ExtractRequest::new(naming::file_name(&input)),
            );

            if let Some(output_path) = output {
                std::fs::write(&output_path, &summary)
                    .with_context(|| format!("Failed to write {}", output_path.display()))?;
                println!("✓ Text extracted to: {}", output_path.display());
            } else {
                println!("{}", summary);
            }
        }

        Commands::Info { input } => {
            let document = load_document(&input)?;

            println!("Document Information for: {}", input.display());
            println!("==========================================");
            if let Some(title) = &document.metadata().title {
                println!("Title: {}", title);
            }
            if let Some(author) = &document.metadata().author {
                println!("Author: {}", author);
            }
            println!("Pages: {}", document.page_count());

            for (index, page) in document.pages().iter().enumerate() {
                println!(
                    "Page {}: {:.0}x{:.0} pts, {} content element(s)",
                    index + 1,
                    page.width(),
                    page.height(),
                    page.content().len()
                );
            }
        }
    }

    Ok(())
}

/// Output filename derivation: a suffix on the input stem, keeping the
/// document extension.
mod naming {
    use docsmith::operations::PageRange;
    use std::path::{Path, PathBuf};

    /// Extension for the binary document format.
    pub const DOC_EXTENSION: &str = "dsm";

    pub fn stem(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    pub fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }

    /// `report.dsm` + `_edited` -> `report_edited.dsm`, next to the input.
    pub fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
        let name = format!("{}{}.{}", stem(input), suffix, DOC_EXTENSION);
        input.with_file_name(name)
    }

    /// `data.csv` -> `data.dsm` for conversions.
    pub fn with_extension(input: &Path) -> PathBuf {
        input.with_extension(DOC_EXTENSION)
    }

    pub fn range_suffix(range: &PageRange) -> String {
        format!("_pages_{}-{}", range.from, range.to)
    }

    /// Integer percentages drop the fraction: 50 -> `_50percent`,
    /// 12.5 -> `_12.5percent`.
    pub fn percent_suffix(percent: f64) -> String {
        if percent.fract() == 0.0 {
            format!("_{}percent", percent as i64)
        } else {
            format!("_{}percent", percent)
        }
    }

}
