use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rdf2uml::config::{
    load_default_namespaces, ConvertOptions, DiagramOptions, LiteralOptions, ParseOptions,
    LITERAL_LINE_WIDTH, LITERAL_MAX_LEN,
};
use rdf2uml::convert::{convert_file, resolve_inputs};
use rdf2uml::emitter::plantuml::PlantUmlEmitter;
use rdf2uml::parsing::{RdfFormat, RioParser};

/// Create PlantUML object diagrams from RDF files.
#[derive(Parser)]
#[command(name = "rdf2uml", version, about)]
struct Cli {
    /// RDF files or directories to process.
    #[arg(required = true, value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Input format [default: from file extension].
    #[arg(short, long, value_name = "FORMAT", value_parser = PossibleValuesParser::new(RdfFormat::NAMES))]
    format: Option<String>,

    /// Only show literals in this language (en, en-us, de, fr, ...).
    #[arg(short, long, value_name = "LANG")]
    lang: Option<String>,

    /// Display literal datatypes.
    #[arg(short = 't', long)]
    literal_type: bool,

    /// Declare the full name of every object whose alias differs from it.
    #[arg(long)]
    show_names: bool,

    /// Shorten literals to --max-literal-len characters.
    #[arg(short, long)]
    shorten: bool,

    /// Maximum literal length kept by --shorten.
    #[arg(long, value_name = "N", default_value_t = LITERAL_MAX_LEN)]
    max_literal_len: usize,

    /// Wrap literals at this many characters.
    #[arg(long, value_name = "N", default_value_t = LITERAL_LINE_WIDTH)]
    line_width: usize,

    /// Read at most MAX_COUNT statements per file; 0 reads none.
    #[arg(short, long, value_name = "MAX_COUNT")]
    max_count: Option<usize>,

    /// Default namespaces JSON file [default: defns.json next to the executable].
    #[arg(short, long, value_name = "FILE")]
    namespaces: Option<PathBuf>,

    /// Print debug info.
    #[arg(short, long)]
    debug: bool,

    /// Only report warnings and errors.
    #[arg(short, long, conflicts_with = "debug")]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            parse: ParseOptions {
                format: self.format.as_deref().and_then(RdfFormat::from_name),
                max_count: self.max_count,
            },
            diagram: DiagramOptions {
                language: self.lang.clone(),
                include_datatype: self.literal_type,
                show_names: self.show_names,
                literals: LiteralOptions {
                    shorten: self.shorten,
                    max_len: self.max_literal_len,
                    line_width: self.line_width,
                },
            },
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rdf2uml={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let options = cli.options();
    let defaults = load_default_namespaces(cli.namespaces.as_deref());
    let files = resolve_inputs(&cli.inputs)?;

    let mut parser = RioParser::new();
    let mut emitter = PlantUmlEmitter::new(BufWriter::new(io::stdout().lock()));

    for file in &files {
        let summary = convert_file(&mut parser, file, &options, &defaults, &mut emitter)
            .with_context(|| format!("converting {}", file.display()))?;
        info!(
            "{}: {} objects, {} associations",
            summary.path.display(),
            summary.objects,
            summary.edges
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
