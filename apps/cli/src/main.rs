//! Kalkyle — terminal front end
//!
//! Contribution-margin ("dækningsgrad") quote calculator: given cost/sale
//! hourly rates, fitter hours, material cost, and a target margin, print the
//! sale price that hits the margin plus the derived figures.
//!
//! ```sh
//! # Quote with the default session values (5 h, 6,000 kr. materials, 35% DG)
//! kalkyle
//!
//! # A concrete job
//! kalkyle --hours 12 --material-cost 14500 --margin 42.5
//!
//! # Machine-readable output
//! kalkyle --json
//! ```
//!
//! The binary is a pure presentation shell: one [`QuoteInputs`] is built from
//! the flags, validated at the boundary, computed once, and rendered. A
//! validation failure is printed to stderr and nothing else is shown.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use kalkyle_core::{format, pricing, validation, Quote, QuoteInputs};

/// Kalkyle — sale price calculator for jobs priced as hours plus materials.
#[derive(Parser, Debug)]
#[command(
    name = "kalkyle",
    version,
    about = "Contribution-margin quote calculator",
    long_about = "Kalkyle — computes the sale price needed to hit a target \
                  contribution margin (dækningsgrad) for a job priced as \
                  fitter hours plus materials, with 25% VAT on top."
)]
struct Cli {
    /// Hourly labor rate at cost, in kroner.
    #[arg(long, default_value_t = 356.9)]
    cost_rate: f64,

    /// Hourly labor rate at sale, in kroner.
    #[arg(long, default_value_t = 628.0)]
    sale_rate: f64,

    /// Fitter hours on the job.
    #[arg(long, default_value_t = 5.0)]
    hours: f64,

    /// Material cost price, in kroner.
    #[arg(long, default_value_t = 6000.0)]
    material_cost: f64,

    /// Target contribution margin, as a percentage of sale price (0-99.9).
    #[arg(long, default_value_t = 35.0)]
    margin: f64,

    /// Emit the quote as JSON instead of the report.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn inputs(&self) -> QuoteInputs {
        QuoteInputs {
            cost_rate_per_hour: self.cost_rate,
            sale_rate_per_hour: self.sale_rate,
            hours: self.hours,
            material_cost: self.material_cost,
            target_margin_percent: self.margin,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Init tracing first so subsequent logs are formatted properly;
    // RUST_LOG wins over the flag
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let inputs = cli.inputs();
    debug!(?inputs, "inputs resolved");

    // Boundary validation, then the core re-checks the margin itself
    let quote = match validation::validate_inputs(&inputs).and_then(|_| pricing::compute(&inputs))
    {
        Ok(quote) => quote,
        Err(e) => {
            error!(%e, "quote rejected");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&quote) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_report(&inputs, &quote));
    }

    ExitCode::SUCCESS
}

// =============================================================================
// Report Rendering
// =============================================================================

/// Renders the quote in the report layout: the two hero totals first, then
/// the labor/material breakdown, then the margin figures.
fn render_report(inputs: &QuoteInputs, quote: &Quote) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Kalkyle — target margin {} ({} h, materials {})\n\n",
        format::percent(inputs.target_margin_percent),
        inputs.hours,
        format::kroner(inputs.material_cost),
    ));

    out.push_str(&format!(
        "  Total sale price (ex VAT)         {}\n",
        format::kroner(quote.total_sale_ex_vat)
    ));
    out.push_str(&format!(
        "  Total sale price (incl 25% VAT)   {}\n\n",
        format::kroner(quote.total_sale_inc_vat)
    ));

    out.push_str("Labor\n");
    out.push_str(&format!(
        "  Cost:  {}\n",
        format::kroner(quote.labor_cost)
    ));
    out.push_str(&format!(
        "  Sale:  {}\n",
        format::kroner(quote.labor_sale)
    ));

    out.push_str("Materials\n");
    out.push_str(&format!(
        "  Cost:  {}\n",
        format::kroner(inputs.material_cost)
    ));
    out.push_str(&format!(
        "  Sale (to reach target margin):  {}\n",
        format::kroner(quote.material_sale_price)
    ));
    out.push_str(&format!(
        "  (≈ markup {} → factor {})\n\n",
        format::percent(quote.material_markup_percent),
        format::factor(quote.material_markup_factor),
    ));

    out.push_str(&format!(
        "  Contribution margin (DB):  {}\n",
        format::kroner(quote.contribution_margin)
    ));
    out.push_str(&format!(
        "  DB per hour:               {}\n\n",
        format::kroner(quote.contribution_margin_per_hour)
    ));

    out.push_str("Formulas: S = C / (1 − DG).  DG = (S − C) / S.  DB = S − C.  VAT = 25%.\n");
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
