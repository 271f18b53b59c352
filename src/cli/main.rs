use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

use ezif::collection::{self, Collection};
use ezif::reader::{Families, ReadOptions};
use ezif::{Family, dump_dictionary};

/// Extensions picked up when walking directories. Files named explicitly
/// are always read; their format is detected from content.
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "tif", "tiff", "png", "xmp",
    // TIFF-based RAW
    "dng", "cr2", "nef", "arw", "orf", "rw2", "pef", "srw",
];

#[derive(Parser, Debug)]
#[command(
    name = "ezif",
    version,
    about = "Read Exif, IPTC and XMP metadata from images, or dump the tag dictionary"
)]
struct Cli {
    /// Image files, directories or http(s) URLs
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// Print the tag dictionary as JSON and exit
    #[arg(long = "dump-dictionary")]
    dump_dictionary: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Keep IPTC datasets in file order
    #[arg(long = "no-sort-iptc")]
    no_sort_iptc: bool,

    /// Skip Exif metadata
    #[arg(long = "no-exif")]
    no_exif: bool,

    /// Skip IPTC metadata
    #[arg(long = "no-iptc")]
    no_iptc: bool,

    /// Skip XMP metadata
    #[arg(long = "no-xmp")]
    no_xmp: bool,

    /// Timeout for remote inputs, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout: u64,
}

impl Cli {
    fn read_options(&self) -> ReadOptions {
        ReadOptions {
            sort_iptc: !self.no_sort_iptc,
            families: Families {
                exif: !self.no_exif,
                iptc: !self.no_iptc,
                xmp: !self.no_xmp,
            },
            http_timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --dump-dictionary
    if cli.dump_dictionary {
        let json = dump_dictionary()
            .to_json()
            .context("Failed to serialize the tag dictionary")?;
        println!("{json}");
        return Ok(());
    }

    if cli.inputs.is_empty() {
        anyhow::bail!("No input files, directories or URLs specified. Use --help for usage.");
    }

    let inputs = collect_inputs(&cli.inputs);
    if inputs.is_empty() {
        anyhow::bail!("No supported image files found in the specified paths.");
    }
    log::debug!("Found {} input(s)", inputs.len());

    let options = cli.read_options();
    let mut results = Vec::new();
    let mut failed = 0;

    for input in &inputs {
        match collection::read_collection_with(input, &options) {
            Ok(collection) => {
                if !cli.json {
                    print_collection(input, &collection);
                }
                results.push(serde_json::json!({ "input": input, "metadata": collection }));
            }
            Err(e) => {
                failed += 1;
                log::error!("{input}: {e}");
                let record = ezif::ErrorRecord::from(&e);
                results.push(serde_json::json!({ "input": input, "error": record }));
            }
        }
    }

    // JSON output
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?
        );
    }

    if inputs.len() > 1 {
        log::info!(
            "Done: {} succeeded, {failed} failed out of {} inputs",
            inputs.len() - failed,
            inputs.len()
        );
    }
    if failed == inputs.len() {
        anyhow::bail!("No input could be read");
    }
    Ok(())
}

/// Expand directories into the image files below them. URLs and files pass
/// through unchanged.
fn collect_inputs(inputs: &[String]) -> Vec<String> {
    let mut out = Vec::new();

    for input in inputs {
        if input.contains("://") {
            out.push(input.clone());
            continue;
        }
        let path = PathBuf::from(input);
        if path.is_dir() {
            for entry in WalkDir::new(&path)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let p = entry.path();
                if p.is_file() && has_image_extension(p) {
                    out.push(p.display().to_string());
                }
            }
        } else if path.is_file() {
            out.push(input.clone());
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    out
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

// ANSI color codes
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Max width for the value column before wrapping.
const VAL_WIDTH: usize = 48;
/// Continuation indent: key column (44) + " : " + 2 leading spaces.
const INDENT: &str = "                                                 ";

/// Print every property of one input, grouped by family.
fn print_collection(input: &str, collection: &Collection) {
    println!();
    println!("{BOLD}Input:{RESET} {input}");
    println!("{DIM}{}{RESET}", "═".repeat(96));

    for family in [Family::Exif, Family::Iptc, Family::Xmp] {
        let properties = collection.properties(family);
        if properties.is_empty() {
            continue;
        }
        println!("  {BOLD}{family}{RESET}");
        println!("  {DIM}{}{RESET}", "─".repeat(94));
        for property in properties.iter() {
            print_row(&property.key(), &property.interpreted_value);
        }
        println!();
    }

    if collection.is_empty() {
        println!("  {DIM}(no metadata found){RESET}");
        println!();
    }
}

/// Print a single row in the metadata table.
fn print_row(key: &str, val: &str) {
    let key_col = format!("{:<44}", key);
    let lines = wrap_text(val, VAL_WIDTH);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("  {key_col} : {line}");
        } else {
            println!("{INDENT}{line}");
        }
    }
}

/// Wrap text at word boundaries to fit within max_width.
fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in s.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(s.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn collects_images_from_directories() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.JPG"), b"x").unwrap();
        std::fs::write(dir.path().join("sub").join("a.tif"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let explicit = dir.path().join("notes.txt").display().to_string();
        let inputs = collect_inputs(&[
            dir.path().display().to_string(),
            explicit.clone(),
            "https://example.com/a.jpg".into(),
        ]);

        assert_eq!(inputs.len(), 4);
        assert!(inputs[0].ends_with("b.JPG"));
        assert!(inputs[1].ends_with("a.tif"));
        assert_eq!(inputs[2], explicit);
        assert_eq!(inputs[3], "https://example.com/a.jpg");
    }

    #[test]
    fn missing_paths_are_skipped() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.jpg").display().to_string();
        assert!(collect_inputs(&[missing]).is_empty());
    }

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from(["ezif", "--no-sort-iptc", "--no-xmp", "--timeout", "5", "a.jpg"]);
        let options = cli.read_options();
        assert!(!options.sort_iptc);
        assert!(options.families.exif && options.families.iptc && !options.families.xmp);
        assert_eq!(options.http_timeout, Duration::from_secs(5));
        assert_eq!(cli.inputs, ["a.jpg"]);
    }

    #[test]
    fn wraps_long_values() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, ["one two", "three", "four"]);
        assert_eq!(wrap_text("", 10), [""]);
    }
}
