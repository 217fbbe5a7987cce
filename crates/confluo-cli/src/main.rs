use anyhow::{Context, Result};
use confluo_config::Config;
use confluo_engine::{io, parse, render_html, render_text, Block};
use log::info;
use relative_path::RelativePathBuf;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

enum OutputFormat {
    Html,
    Text,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(Self::Html),
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut format_flag: Option<String> = None;
    let mut output: Option<PathBuf> = None;
    let mut input: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-f" | "--format" => {
                i += 1;
                match args.get(i) {
                    Some(value) => format_flag = Some(value.clone()),
                    None => usage_exit(&args[0], "missing value for --format"),
                }
            }
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(value) => output = Some(PathBuf::from(value)),
                    None => usage_exit(&args[0], "missing value for --output"),
                }
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                usage_exit(&args[0], &format!("unknown option '{arg}'"));
            }
            arg => {
                if input.is_some() {
                    usage_exit(&args[0], "more than one input path given");
                }
                input = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    // Config supplies defaults for whatever the command line left out
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring config file: {e}");
            None
        }
    };

    let input = match input.or_else(|| config.as_ref().map(|c| c.wiki_path.clone())) {
        Some(input) => input,
        None => {
            eprintln!("Error: no input given and no config file found");
            eprintln!("Create one at {}", Config::config_path().display());
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let output = output.or_else(|| config.as_ref().and_then(|c| c.output_path.clone()));
    let format_name = format_flag
        .or_else(|| config.as_ref().and_then(|c| c.output_format.clone()))
        .unwrap_or_else(|| "html".to_string());
    let Some(format) = OutputFormat::from_name(&format_name) else {
        usage_exit(&args[0], &format!("unknown format '{format_name}'"));
    };

    if input.is_dir() {
        convert_dir(&input, output.as_deref(), &format)
    } else {
        convert_file(&input, output.as_deref(), &format)
    }
}

/// Converts one page, to stdout unless an output path is given.
fn convert_file(path: &Path, output: Option<&Path>, format: &OutputFormat) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let rendered = render(&parse(&content), format)?;
    match output {
        Some(out) => {
            fs::write(out, rendered).with_context(|| format!("writing {}", out.display()))?
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Converts every wiki page under the root, mirroring the directory layout
/// into the output root (the wiki root itself by default).
fn convert_dir(wiki_root: &Path, output_root: Option<&Path>, format: &OutputFormat) -> Result<()> {
    io::validate_wiki_dir(wiki_root)?;
    let files = io::scan_wiki_files(wiki_root)?;
    info!("converting {} pages under {}", files.len(), wiki_root.display());

    for file in &files {
        let relative = RelativePathBuf::from_path(file.strip_prefix(wiki_root)?)?;
        let content = io::read_file(&relative, wiki_root)?;
        let rendered = render(&parse(&content), format)?;
        let out_relative = relative.with_extension(format.extension());
        io::write_file(&out_relative, output_root.unwrap_or(wiki_root), &rendered)?;
        info!("{relative} -> {out_relative}");
    }
    Ok(())
}

fn render(blocks: &[Block], format: &OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => render_html(blocks),
        OutputFormat::Text => render_text(blocks),
        OutputFormat::Json => serde_json::to_string_pretty(blocks)?,
    })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [OPTIONS] [INPUT]");
    eprintln!();
    eprintln!("Convert Confluence notation to another format.");
    eprintln!();
    eprintln!("  INPUT                a .wiki file, or a directory to convert recursively");
    eprintln!("                       (defaults to the wiki_path from the config file)");
    eprintln!("  -f, --format FORMAT  html (default), text, or json");
    eprintln!("  -o, --output PATH    output file (for file input) or directory (for");
    eprintln!("                       directory input); defaults to the output_path from");
    eprintln!("                       the config file, else stdout / in place");
    eprintln!("  -h, --help           show this help");
}

fn usage_exit(program: &str, message: &str) -> ! {
    eprintln!("Error: {message}");
    print_usage(program);
    process::exit(1);
}
