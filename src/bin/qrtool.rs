use clap::{Args, Parser, Subcommand};
use rust_qrgen::canvas::masking::evaluate_masks;
use rust_qrgen::canvas::painter::{add_service_info, write_data};
use rust_qrgen::encoder::encode_data;
use rust_qrgen::export::{save_png, save_svg, to_text};
use rust_qrgen::{ECLevel, GeneratorSettings, Masking, QrCanvas, generate};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQRGen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a symbol and write it as .svg or .png
    Generate {
        #[command(flatten)]
        symbol: SymbolArgs,
        #[arg(long, short)]
        output: PathBuf,
        /// Pixels per module for PNG, total pixel size is size * scale for SVG
        #[arg(long, default_value_t = 10)]
        scale: u32,
    },
    /// Print a symbol to the console
    Print {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
    /// Show the penalty breakdown of every mask
    Masks {
        #[arg(long, short)]
        text: String,
        #[arg(long)]
        ec: Option<ECLevel>,
        #[arg(long)]
        force_byte: bool,
    },
}

#[derive(Args)]
struct SymbolArgs {
    #[arg(long, short)]
    text: String,
    /// Correction level: L, M, Q or H
    #[arg(long)]
    ec: Option<ECLevel>,
    /// `auto` or a mask number 0-7
    #[arg(long)]
    mask: Option<Masking>,
    #[arg(long)]
    force_byte: bool,
}

impl SymbolArgs {
    fn settings(&self) -> GeneratorSettings {
        let mut settings = GeneratorSettings::from_env();
        if let Some(ec) = self.ec {
            settings = settings.with_ec_level(ec);
        }
        if let Some(mask) = self.mask {
            settings = settings.with_masking(mask);
        }
        if self.force_byte {
            settings = settings.with_force_byte(true);
        }
        settings
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate {
            symbol,
            output,
            scale,
        } => generate_cmd(&symbol, &output, scale),
        Command::Print { symbol } => print_cmd(&symbol),
        Command::Masks {
            text,
            ec,
            force_byte,
        } => masks_cmd(&text, ec, force_byte),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn build(symbol: &SymbolArgs) -> Result<QrCanvas, String> {
    generate(&symbol.text, &symbol.settings()).map_err(|e| format!("Failed to encode: {}", e))
}

fn generate_cmd(symbol: &SymbolArgs, output: &Path, scale: u32) -> Result<(), String> {
    let canvas = build(symbol)?;
    let extension = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("svg") => {
            let pixel_size = canvas.size() as u32 * scale.max(1);
            save_svg(&canvas, pixel_size, output)
                .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
        }
        Some("png") => {
            save_png(&canvas, scale, output)
                .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
        }
        _ => {
            return Err(format!(
                "Unsupported output {}: expected a .svg or .png file",
                output.display()
            ));
        }
    }

    println!(
        "Wrote {} (version {}, level {}, {}, {}x{} modules)",
        output.display(),
        canvas.version(),
        canvas.ec_level(),
        canvas.mask(),
        canvas.size(),
        canvas.size()
    );
    Ok(())
}

fn print_cmd(symbol: &SymbolArgs) -> Result<(), String> {
    let canvas = build(symbol)?;
    print!("{}", to_text(&canvas));
    Ok(())
}

fn masks_cmd(text: &str, ec: Option<ECLevel>, force_byte: bool) -> Result<(), String> {
    let defaults = GeneratorSettings::from_env();
    let ec_level = ec.unwrap_or(defaults.ec_level);
    let force_byte = force_byte || defaults.force_byte;

    let data =
        encode_data(text, force_byte, ec_level).map_err(|e| format!("Failed to encode: {}", e))?;
    let raw = add_service_info(QrCanvas::new(data))
        .and_then(write_data)
        .map_err(|e| format!("Failed to place data: {}", e))?;
    let evaluations = evaluate_masks(&raw, defaults.parallel_mask_search)
        .map_err(|e| format!("Failed to evaluate masks: {}", e))?;

    println!(
        "Version {}, level {}, {}x{} modules",
        raw.version(),
        ec_level,
        raw.size(),
        raw.size()
    );
    println!(
        "{:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "mask", "runs", "finder", "blocks", "balance", "total"
    );

    let mut winner: Option<(i32, u32)> = None;
    for evaluation in &evaluations {
        let penalty = evaluation.penalty;
        let number = evaluation.mask.number();
        println!(
            "{:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
            number,
            penalty.runs,
            penalty.finder_like,
            penalty.blocks,
            penalty.balance,
            penalty.total()
        );
        if winner.is_none_or(|(_, best)| penalty.total() < best) {
            winner = Some((number, penalty.total()));
        }
    }

    if let Some((number, total)) = winner {
        println!("Selected mask {} (penalty {})", number, total);
    }
    Ok(())
}
