use anyhow::{Context, Result};
use clap::Parser;
use lkm_rekap::{Config, aggregate, allocate, export_recap, read_segments};
use log::{debug, info};
use std::path::PathBuf;

/// Field-team helper: allocates the SLS household total across segments and
/// writes the "Rekap Segmen" / "Rekap SubSLS" sheets.
#[derive(Parser, Debug)]
#[command(name = "lkm-rekap", version, about)]
struct Cli {
    /// Input CSV: Segmen,BTT,BTT Kosong,BKU,BBTT Non Usaha,Perkiraan Muatan Usaha,Subsls
    input: PathBuf,

    /// Total household count (Jumlah KK) for the whole SLS area
    #[arg(long = "total-kk")]
    total_kk: u32,

    /// Directory for the exported sheets (overrides LKM_OUTPUT_DIR)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let output_dir = cli.output_dir.or(config.output_dir);

    match &output_dir {
        Some(dir) => info!("Output directory: {}", dir.display()),
        None => info!("Output directory: (current working directory)"),
    }

    let rows = read_segments(&cli.input)
        .with_context(|| format!("Failed to read segments from {}", cli.input.display()))?;
    info!("Read {} segment(s) from {}", rows.len(), cli.input.display());

    let inputs: Vec<_> = rows.iter().map(|row| row.input.clone()).collect();
    let mut records = allocate(&inputs, cli.total_kk)?;

    // The SubSLS keys come from the input file, not from the allocator.
    for (record, row) in records.iter_mut().zip(&rows) {
        record.subsls = row.subsls;
    }
    for record in &records {
        debug!(
            "Segmen {}: Perkiraan KK {}, Total Muatan {}",
            record.segment, record.perkiraan_kk, record.total_muatan
        );
    }

    let recap = aggregate(&records).context(
        "Aggregation requires a Subsls key on every row; fill the empty cells and rerun",
    )?;

    let (segment_path, subsls_path) = export_recap(&records, &recap, output_dir.as_deref())?;
    info!("Rekap Segmen saved to: {}", segment_path.display());
    info!("Rekap SubSLS saved to: {}", subsls_path.display());

    info!("SubSLS groups: {}", recap.summaries.len());
    info!("Total KK: {}", recap.total_kk);
    info!("Total Muatan: {}", recap.total_muatan);

    Ok(())
}
