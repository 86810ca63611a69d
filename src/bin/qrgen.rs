use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rust_qr_gen::tools::{save_png, to_svg, to_text};
use rust_qr_gen::{
    encode_segments, ECLevel, EncodeOptions, Encoder, MaskPattern, QrCode, Segment, Version,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "RustQRGen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and render it to the terminal or a file
    Encode {
        /// Text to encode
        text: String,
        /// Error correction level
        #[arg(long, value_enum, default_value_t = LevelArg::M)]
        level: LevelArg,
        /// Force byte mode even for digit-only or uppercase input
        #[arg(long)]
        binary: bool,
        /// Output file; format follows the extension (.svg or .png)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pixels per module for PNG output
        #[arg(long, default_value_t = 8)]
        scale: u32,
        /// Quiet-zone width in modules
        #[arg(long, default_value_t = 4)]
        border: usize,
        /// Fixed mask pattern 0-7 (default: automatic selection)
        #[arg(long)]
        mask: Option<u8>,
        /// Smallest allowed version
        #[arg(long, default_value_t = 1)]
        min_version: u8,
        /// Largest allowed version
        #[arg(long, default_value_t = 40)]
        max_version: u8,
        /// Keep the requested level instead of boosting when room remains
        #[arg(long)]
        no_boost: bool,
    },
    /// Print symbol metadata without rendering
    Inspect {
        /// Text to encode
        text: String,
        /// Error correction level
        #[arg(long, value_enum, default_value_t = LevelArg::M)]
        level: LevelArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LevelArg {
    L,
    M,
    Q,
    H,
}

impl std::fmt::Display for LevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LevelArg::L => "l",
            LevelArg::M => "m",
            LevelArg::Q => "q",
            LevelArg::H => "h",
        })
    }
}

impl From<LevelArg> for ECLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::L => ECLevel::L,
            LevelArg::M => ECLevel::M,
            LevelArg::Q => ECLevel::Q,
            LevelArg::H => ECLevel::H,
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Encode {
            text,
            level,
            binary,
            output,
            scale,
            border,
            mask,
            min_version,
            max_version,
            no_boost,
        } => encode_cmd(
            &text,
            level.into(),
            binary,
            output.as_deref(),
            scale,
            border,
            mask,
            min_version,
            max_version,
            no_boost,
        ),
        Command::Inspect { text, level } => inspect_cmd(&text, level.into()),
    }
}

#[allow(clippy::too_many_arguments)]
fn encode_cmd(
    text: &str,
    level: ECLevel,
    binary: bool,
    output: Option<&Path>,
    scale: u32,
    border: usize,
    mask: Option<u8>,
    min_version: u8,
    max_version: u8,
    no_boost: bool,
) -> Result<()> {
    let mask = match mask {
        Some(m) => Some(MaskPattern::from_bits(m).context("mask must be in 0-7")?),
        None => None,
    };
    let options = EncodeOptions {
        min_version: Version::new(min_version)?,
        max_version: Version::new(max_version)?,
        mask,
        boost_ecl: !no_boost,
    };

    let encoder = Encoder::with_options(options);
    let qr = if binary {
        encoder.encode_binary(text.as_bytes(), level)?
    } else {
        encoder.encode(text, level)?
    };

    match output {
        None => print!("{}", to_text(&qr, border)),
        Some(path) => {
            match path.extension().and_then(|e| e.to_str()) {
                Some("svg") => fs::write(path, to_svg(&qr, border))
                    .with_context(|| format!("failed to write {}", path.display()))?,
                Some("png") => save_png(&qr, scale, border, path)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                _ => bail!("unsupported output extension (expected .svg or .png)"),
            }
            println!(
                "Wrote {} (version={}, level={:?}, mask={}, {}x{} modules)",
                path.display(),
                qr.version().number(),
                qr.error_correction(),
                qr.mask_pattern().bits(),
                qr.size(),
                qr.size()
            );
        }
    }
    Ok(())
}

fn inspect_cmd(text: &str, level: ECLevel) -> Result<()> {
    let segments = Segment::make_segments(text)?;
    let qr: QrCode = encode_segments(&segments, level, &EncodeOptions::default())?;
    println!("Input: {} characters", text.chars().count());
    println!("Mode: {:?}", segments[0].mode());
    println!("Version: {}", qr.version().number());
    println!("Size: {0}x{0} modules", qr.size());
    println!("Level: {:?} (requested {:?})", qr.error_correction(), level);
    println!("Mask: {}", qr.mask_pattern().bits());
    Ok(())
}
