//! courtdocx CLI - court filing documents as .docx
//!
//! Generates certified-copy applications, vakalatnamas and new petitions
//! from a JSON record or from submitted form fields.

use chrono::NaiveDate;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use colored::*;
use courtdocx::record::{collect_certified_copy, collect_new_petition, collect_vakalatnama};
use courtdocx::{
    download, Compression, DirectoryTarget, DocumentKind, DocumentRecord, FormData,
    GenerateOptions, OoxmlContainer, PartySide, PetitionSession, SubmitControl,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Court filing documents (.docx) from structured case records
#[derive(Parser)]
#[command(
    name = "courtdocx",
    version,
    about = "Generate court filing documents as .docx",
    long_about = "courtdocx - offline generation of court filing documents.\n\n\
                  Renders certified-copy applications, vakalatnamas and new petitions \
                  into Word documents."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a document
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Check a .docx package and print its text
    Inspect {
        /// Input file path
        input: PathBuf,

        /// Print only the package report
        #[arg(short, long)]
        quiet: bool,
    },

    /// List the supported document types
    Kinds,

    /// Show version information
    Version,
}

/// Largest number of party blocks accepted on each side.
const MAX_PARTY_BLOCKS: u64 = 100;

#[derive(Args)]
struct GenerateArgs {
    /// Document type (see `courtdocx kinds`)
    #[arg(short, long)]
    kind: String,

    /// Form record as JSON (`-` for stdin)
    #[arg(short, long, conflicts_with = "field")]
    input: Option<PathBuf>,

    /// Submitted form field as NAME=VALUE (repeatable)
    #[arg(short, long, value_parser = parse_field)]
    field: Vec<(String, String)>,

    /// Petitioner blocks on the petition form
    #[arg(long, default_value_t = 1, value_parser = party_count())]
    petitioners: usize,

    /// Defendant blocks on the petition form
    #[arg(long, default_value_t = 1, value_parser = party_count())]
    defendants: usize,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Today's date as YYYY-MM-DD (default: system date)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Store parts uncompressed
    #[arg(long)]
    stored: bool,
}

fn party_count() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(0..=MAX_PARTY_BLOCKS)
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", s))
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{}: {}", s, e))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate(args) => {
            // a run of the CLI is one open form
            let control = SubmitControl::new();
            generate(&control, args)?;
        }

        Commands::Inspect { input, quiet } => {
            let pb = create_spinner("Checking package...");

            let container = OoxmlContainer::open(&input)?;
            let report = container.verify()?;
            let texts = container.paragraph_texts()?;

            pb.finish_and_clear();

            println!("{}", "Package Report".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Parts".bold(), report.parts.join(", "));
            println!("{}: {}", "Main part".bold(), report.main_part);
            println!("{}: {}", "Sections".bold(), report.sections);
            println!("{}: {}", "Paragraphs".bold(), report.paragraphs);
            println!("{}: {}", "Tables".bold(), report.tables);
            println!("{}: {}", "Page breaks".bold(), report.page_breaks);

            if !quiet {
                println!("\n{}", "Text".cyan().bold());
                println!("{}", "─".repeat(40));
                for text in texts {
                    println!("{}", text);
                }
            }
        }

        Commands::Kinds => {
            for kind in DocumentKind::ALL {
                println!("{:<16} {}", kind.tag().green(), kind.label());
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn generate(control: &SubmitControl, args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let _pending = control.begin().ok_or("a generation is already pending")?;
    let kind: DocumentKind = args.kind.parse()?;

    let mut options = GenerateOptions::new();
    if let Some(date) = args.date {
        options = options.with_today(date);
    }
    if args.stored {
        options = options.with_compression(Compression::Stored);
    }

    let record: DocumentRecord = if args.field.is_empty() {
        let input = args.input.ok_or("either --input or --field is required")?;
        debug!("reading {} record from {}", kind, input.display());
        let json = read_input(&input)?;
        DocumentRecord::from_json(kind, &json, &options.clock)?
    } else {
        debug!("collecting {} from {} form fields", kind, args.field.len());
        let data: FormData = args.field.into_iter().collect();
        let session = session_with(args.petitioners, args.defendants);
        match kind {
            DocumentKind::CertifiedCopy => {
                collect_certified_copy(&data).resolve(&options.clock).into()
            }
            DocumentKind::Vakalatnama => collect_vakalatnama(&data).resolve(&options.clock).into(),
            DocumentKind::NewPetition => collect_new_petition(&data, &session)
                .resolve(&options.clock)
                .into(),
        }
    };

    let pb = create_spinner(&format!("Generating {}...", kind.label()));
    let doc = courtdocx::generate(&record, &options);
    pb.finish_and_clear();
    let doc = doc?;

    fs::create_dir_all(&args.output_dir)?;
    let path = download(&doc, &DirectoryTarget::new(&args.output_dir))?;

    println!(
        "{} Generated {}: {} ({} bytes)",
        "✓".green().bold(),
        kind.label(),
        path.display(),
        doc.len()
    );
    Ok(())
}

fn session_with(petitioners: usize, defendants: usize) -> PetitionSession {
    let mut session = PetitionSession::new();
    for (side, wanted) in [
        (PartySide::Petitioner, petitioners),
        (PartySide::Defendant, defendants),
    ] {
        while session.count(side) < wanted {
            session.add_party(side);
        }
        while session.count(side) > wanted {
            session.remove_party(side);
        }
    }
    session
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        fs::read_to_string(path)
    }
}

fn print_version() {
    println!("{} {}", "courtdocx".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Court filing documents as .docx, generated offline");
    println!();
    let kinds: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.tag()).collect();
    println!("Document types: {}", kinds.join(", "));
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("CaseNo=12/2024").unwrap(),
            ("CaseNo".to_string(), "12/2024".to_string())
        );
        assert_eq!(parse_field("Note=a=b").unwrap().1, "a=b");
        assert!(parse_field("novalue").is_err());
    }

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let argv = ["courtdocx", "generate"].iter().chain(argv);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_party_count_is_bounded() {
        let args = generate_args(&["--kind", "new-petition", "--petitioners", "3"]);
        assert_eq!(args.petitioners, 3);
        assert_eq!(args.defendants, 1);

        let argv = ["courtdocx", "generate", "--kind", "new-petition", "--defendants", "101"];
        assert!(Cli::try_parse_from(argv).is_err());
        let argv = ["courtdocx", "generate", "--kind", "new-petition", "--petitioners", "-1"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_generate_refused_while_pending() {
        let control = SubmitControl::new();
        let held = control.begin().unwrap();
        let args = generate_args(&["--kind", "certified-copy", "--field", "Applicant=A"]);
        let err = generate(&control, args).unwrap_err();
        assert_eq!(err.to_string(), "a generation is already pending");
        drop(held);
        assert!(control.is_enabled());
    }

    #[test]
    fn test_generate_releases_control_on_failure() {
        let control = SubmitControl::new();
        let args = generate_args(&["--kind", "affidavit", "--field", "Applicant=A"]);
        assert!(generate(&control, args).is_err());
        assert!(control.is_enabled());
    }

    #[test]
    fn test_session_with() {
        let session = session_with(3, 0);
        assert_eq!(session.count(PartySide::Petitioner), 3);
        assert_eq!(session.count(PartySide::Defendant), 0);
    }
}
