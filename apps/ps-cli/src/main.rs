use clap::{Parser, Subcommand};
use ps_app::{AppResult, Session, flow_text, power_text, pressure_text, psi_text};
use ps_select::SHORTLIST_LEN;

#[derive(Parser)]
#[command(name = "ps-cli")]
#[command(about = "PumpSelect CLI - PDS diaphragm metering pump model selection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pump catalog
    Catalog {
        /// Optional model-id filter (case-insensitive substring)
        query: Option<String>,
    },
    /// Show the full specification of one catalog entry
    Show {
        /// Exact model identifier (e.g. PDS-05)
        model: String,
    },
    /// Find the best-fit pump model for a requirement pair
    Select {
        /// Required flow rate in L/min
        flow_lpm: String,
        /// Required discharge pressure in bar
        pressure_bar: String,
        /// Emit the full ranking as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { query } => cmd_catalog(query.as_deref()),
        Commands::Show { model } => cmd_show(&model),
        Commands::Select {
            flow_lpm,
            pressure_bar,
            json,
        } => cmd_select(&flow_lpm, &pressure_bar, json),
    }
}

fn cmd_catalog(query: Option<&str>) -> AppResult<()> {
    let filter = query.unwrap_or("");
    println!(
        "{:<10} {:>12} {:>10} {:>12} {:>10}",
        "Model", "Flow (L/min)", "P (bar)", "P (psi)", "Motor (kW)"
    );
    let mut shown = 0;
    for m in ps_catalog::all() {
        if !m.matches_query(filter) {
            continue;
        }
        println!(
            "{:<10} {:>12} {:>10} {:>12.1} {:>10}",
            m.model, m.max_flow_lpm, m.max_pressure_bar, m.max_pressure_psi(), m.motor_power_kw
        );
        shown += 1;
    }
    if shown == 0 {
        println!("No catalog entry matches '{}'", filter);
    }
    Ok(())
}

fn cmd_show(model: &str) -> AppResult<()> {
    match ps_catalog::by_model(model) {
        Some(m) => {
            println!("{}", m.model);
            print_spec(m);
        }
        None => println!("No catalog entry named '{}'", model),
    }
    Ok(())
}

fn print_spec(m: &ps_catalog::PumpModel) {
    println!("  Max flow rate:  {}", flow_text(m.max_flow_lpm));
    println!(
        "  Max pressure:   {} ({})",
        pressure_text(m.max_pressure_bar),
        psi_text(m.max_pressure_bar)
    );
    println!("  Motor power:    {}", power_text(m.motor_power_kw));
}

fn cmd_select(flow_lpm: &str, pressure_bar: &str, json: bool) -> AppResult<()> {
    let mut session = Session::new();
    session.flow_text = flow_lpm.to_string();
    session.pressure_text = pressure_bar.to_string();

    let ranking = session.submit()?;

    if json {
        let payload = serde_json::json!({
            "query": {
                "flow_lpm": flow_lpm.trim(),
                "pressure_bar": pressure_bar.trim(),
            },
            "match_count": ranking.len(),
            "recommended": ranking.recommended(),
            "matches": ranking.matches(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
        return Ok(());
    }

    if ranking.is_empty() {
        println!(
            "No model meets both requirements ({} L/min @ {} bar)",
            flow_lpm.trim(),
            pressure_bar.trim()
        );
        return Ok(());
    }

    println!(
        "✓ {} model(s) qualify for {} L/min @ {} bar",
        ranking.len(),
        flow_lpm.trim(),
        pressure_bar.trim()
    );
    if ranking.len() > SHORTLIST_LEN {
        println!("  (showing top {})", SHORTLIST_LEN);
    }
    println!();

    for (i, m) in ranking.shortlist().iter().enumerate() {
        let marker = if i == 0 { "  << best fit" } else { "" };
        println!(
            "  {}. {:<10} {:>10} L/min  {:>4} bar  {:>5} kW{}",
            i + 1,
            m.model,
            m.max_flow_lpm,
            m.max_pressure_bar,
            m.motor_power_kw,
            marker
        );
    }

    if let Some(best) = session.selected_model() {
        println!("\nBest fit: {}", best.model);
        print_spec(best);
    }

    Ok(())
}
