//! Adds, reads and removes named chunks in WAV files.
//!
//! WAV data is read from stdin and written to stdout unless paths are given.
use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wavchunk::{list_chunks, ChunkExtractor, ChunkId, ChunkInserter};

#[derive(Parser)]
#[command(name = "wavchunk")]
#[command(about = "Add or get chunks from WAV files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add chunk to WAV file
    Add(AddArgs),
    /// Get chunk data from WAV file
    Get(GetArgs),
    /// List the chunks of a WAV file
    List {
        /// Path to input WAV file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Chunk data to add ('-' for stdin)
    #[arg(short, long)]
    data: String,

    /// Path to input WAV file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Argument to --data is a file
    #[arg(long)]
    data_file: bool,

    /// Name of chunk to add
    #[arg(long, default_value = "INFO")]
    name: ChunkId,
}

#[derive(Args)]
struct GetArgs {
    /// Path to input WAV file (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to write chunk data ('-' for stdout)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path to write WAV data (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove chunk from WAV data
    #[arg(long)]
    delete: bool,

    /// Name of chunk to get
    #[arg(long, default_value = "INFO")]
    name: ChunkId,
}

fn init_logging(verbose: bool, debug: bool) {
    if verbose || debug {
        let level = if debug { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        // stdout carries WAV data
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn stdin_hint(what: &str) {
    if io::stdin().is_terminal() {
        eprintln!("Reading {} from stdin...", what);
    }
}

fn open_input<'a>(path: Option<&Path>, stdin: &'a mut dyn Read) -> Result<Box<dyn Read + 'a>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            stdin_hint("WAV");
            Ok(Box::new(stdin))
        }
    }
}

fn cmd_add(args: &AddArgs, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let chunk_data = if !args.data_file {
        args.data.clone().into_bytes()
    } else if args.data == "-" {
        ensure!(args.input.is_some(), "Must specify --input if --data is stdin");
        stdin_hint("data");
        let mut buf = Vec::new();
        stdin.read_to_end(&mut buf).context("Failed to read chunk data")?;
        buf
    } else {
        fs::read(&args.data).with_context(|| format!("Failed to read chunk data: {}", args.data))?
    };

    let mut input = open_input(args.input.as_deref(), stdin)?;
    info!("Adding {} byte {} chunk", chunk_data.len(), args.name);
    ChunkInserter::new(args.name).insert(&mut input, &chunk_data, &mut &mut *stdout)?;
    stdout.flush()?;

    Ok(())
}

fn cmd_get(args: &GetArgs, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let extractor = ChunkExtractor {
        name: args.name,
        keep_chunk: !args.delete,
    };
    let data_to_stdout = args.data.as_deref() == Some(Path::new("-"));

    let mut input = open_input(args.input.as_deref(), stdin)?;
    let found = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            let mut output = BufWriter::new(file);
            let found = extractor.extract(&mut input, Some(&mut output))?;
            output.flush()?;
            found
        }
        // data goes to stdout instead of the WAV
        None if data_to_stdout => extractor.find(&mut input)?,
        None => extractor.extract(&mut input, Some(&mut &mut *stdout))?,
    };

    let chunk_data = match found {
        Some(chunk_data) => chunk_data,
        None => {
            warn!("No {} chunk found", args.name);
            return Ok(());
        }
    };
    info!("Found {} byte {} chunk", chunk_data.len(), args.name);

    match &args.data {
        Some(_) if data_to_stdout => stdout.write_all(&chunk_data)?,
        Some(path) => fs::write(path, &chunk_data)
            .with_context(|| format!("Failed to write chunk data: {}", path.display()))?,
        None => (),
    }
    stdout.flush()?;

    Ok(())
}

fn cmd_list(input: Option<&Path>, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    let mut input = open_input(input, stdin)?;
    for chunk in list_chunks(&mut input)? {
        writeln!(stdout, "{}\t{}", chunk.id, chunk.size)?;
    }
    stdout.flush()?;

    Ok(())
}

fn run(cli: Cli, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<()> {
    match cli.command {
        Commands::Add(args) => cmd_add(&args, stdin, stdout),
        Commands::Get(args) => cmd_get(&args, stdin, stdout),
        Commands::List { input } => cmd_list(input.as_deref(), stdin, stdout),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());
    run(cli, &mut stdin.lock(), &mut stdout)
}
