mod config;
mod errors;
mod generation;
mod layout;
mod present;
mod render;
mod session;
mod validation;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::generation::BLANK;
use crate::layout::{compute_presentation_layout, compute_print_layout, ViewportClamp};
use crate::render::{default_output_name, export_pdf, render_screen, ScreenView};
use crate::session::WorksheetSession;
use crate::validation::validate_request;

/// CLI arguments. The terminal stands in for the worksheet UI: it supplies
/// the table selection, question count, division flag and action triggers.
#[derive(Parser, Debug)]
#[command(author, version, about = "Times-table worksheet generator")]
struct Args {
    /// Table multipliers to draw from, comma-separated (1-20)
    #[arg(short, long, value_delimiter = ',', default_value = "2,3,4,5,6,7,8,9,10")]
    tables: Vec<u8>,

    /// Number of questions (1-99)
    #[arg(short, long, default_value = "20")]
    count: u8,

    /// Mix division questions in with multiplication
    #[arg(short, long)]
    division: bool,

    /// Output filename (defaults to worksheet-{date}.pdf in the output dir)
    #[arg(short, long)]
    output: Option<String>,

    /// RNG seed for a reproducible sheet
    #[arg(long)]
    seed: Option<u64>,

    /// Print the presentation-mode rendering to the terminal instead of
    /// exporting a PDF
    #[arg(long)]
    preview: bool,

    /// With --preview: emit the screen view model as JSON
    #[arg(long)]
    json: bool,

    /// With --preview: reveal the answers
    #[arg(long)]
    show_answers: bool,

    /// With --preview: viewport height in px used for font clamping
    #[arg(long, default_value = "900")]
    viewport_height: f32,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    let config = Config::from_env()?;

    // Structured logging, filterable via RUST_LOG. Logs go to stderr so the
    // preview output stays pipeable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Validation happens here, before any core call; the generator and the
    // layout engines assume valid input.
    validate_request(&args.tables, args.count)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = WorksheetSession::generate(&args.tables, args.count, args.division, &mut rng);
    info!(
        questions = session.questions.len(),
        division = args.division,
        "worksheet generated"
    );

    if args.preview {
        preview(&mut session, &args)
    } else {
        let plan = compute_print_layout(args.count);
        info!(
            columns = plan.columns,
            font_mm = plan.font_size_mm,
            line_mm = plan.line_height_mm,
            "print layout computed"
        );

        let name = args.output.clone().unwrap_or_else(default_output_name);
        let path = config.output_dir.join(name);
        export_pdf(&session, &plan, &path)?;
        println!("Wrote {}", path.display());
        Ok(())
    }
}

/// Renders the presentation view to the terminal, column-major like the
/// screen does.
fn preview(session: &mut WorksheetSession, args: &Args) -> Result<(), AppError> {
    if args.show_answers {
        session.toggle_answers();
    }

    let plan = compute_presentation_layout(
        session.questions.len() as u32,
        args.viewport_height,
        ViewportClamp::default(),
    );
    let view = render_screen(session, &plan);

    if args.json {
        let json =
            serde_json::to_string_pretty(&view).map_err(|e| AppError::Internal(e.into()))?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} questions, {} columns, {:.0}px",
        view.rows.len(),
        view.columns,
        view.font_size_px
    );
    print_columns(&view);
    Ok(())
}

fn print_columns(view: &ScreenView) {
    let columns = view.columns.max(1) as usize;
    let rows_per_column = view.rows.len().div_ceil(columns);

    for row in 0..rows_per_column {
        let mut line = String::new();
        for col in 0..columns {
            let Some(entry) = view.rows.get(col * rows_per_column + row) else {
                continue;
            };
            let cell = match &entry.answer {
                Some(answer) => entry.text.replace(BLANK, answer),
                None => entry.text.clone(),
            };
            line.push_str(&format!("{cell:<18}"));
        }
        println!("{}", line.trim_end());
    }
}
