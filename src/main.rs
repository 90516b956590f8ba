//! STU - the Stupid Table Utility

mod logging;
mod tui;

use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};

use stu_core::{Document, HeaderMode, SourceFormat};

fn print_usage() {
    eprintln!("Usage: stu [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Table to open (.csv, anything else is read as lines)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>       Write CSV to FILE and exit (reads stdin without FILE)");
    eprintln!("  --format <csv|text>       Force the input format");
    eprintln!("  --no-header               Do not add a header row");
    eprintln!("  --header-row              Use the first record as column labels");
    eprintln!("  --keymap <name>           Select keybindings (default: default)");
    eprintln!("  --keymap-file <path>      Load keybindings from TOML file");
    eprintln!("  -h, --help                Print help");
}

/// Ingest and write CSV without starting the terminal UI.
fn export(
    input: Option<&Path>,
    output: &Path,
    format: Option<SourceFormat>,
    header: HeaderMode,
) -> stu_core::Result<usize> {
    let mut doc = match input {
        Some(path) => Document::open(path, format, header)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            Document::from_text(&content, format.unwrap_or_default(), header)?
        }
    };
    doc.save_as(output)?;
    Ok(doc.grid.data_row_count())
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut format: Option<SourceFormat> = None;
    let mut header = HeaderMode::Synthetic;
    let mut header_flag: Option<&str> = None;
    let mut keymap_name: Option<String> = None;
    let mut keymap_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --format requires a value");
                    std::process::exit(1);
                }
                match SourceFormat::parse(&args[i]) {
                    Some(f) => format = Some(f),
                    None => {
                        eprintln!("Error: Unknown format: {} (expected csv or text)", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            flag @ ("--no-header" | "--header-row") => {
                if let Some(prev) = header_flag
                    && prev != flag
                {
                    eprintln!("Error: {} cannot be used with {}", flag, prev);
                    std::process::exit(1);
                }
                header_flag = Some(flag);
                header = if flag == "--no-header" {
                    HeaderMode::None
                } else {
                    HeaderMode::FirstRow
                };
            }
            "--keymap" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --keymap requires a value");
                    std::process::exit(1);
                }
                keymap_name = Some(args[i].to_string());
            }
            "--keymap-file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --keymap-file requires a file path");
                    std::process::exit(1);
                }
                keymap_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    // "-" means stdin, same as no file.
    let file_path = file_path.filter(|p| p.as_os_str() != "-");

    if let Some(output_path) = output_file {
        match export(file_path.as_deref(), &output_path, format, header) {
            Ok(rows) => {
                eprintln!("Wrote {} rows to {}", rows, output_path.display());
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let (keymap, warnings) = tui::load_keymap(keymap_name.as_deref(), keymap_file.as_ref());
    for warning in warnings {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    let mut app = match file_path {
        Some(path) => match Document::open(&path, format, header) {
            Ok(doc) => tui::App::new(doc, keymap),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => tui::App::with_paste(keymap, header),
    };

    if let Err(e) = tui::run(&mut app) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
