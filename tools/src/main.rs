//! roster-runner: headless weekly schedule generator for Rosterly.
//!
//! Usage:
//!   roster-runner --week 2025-01-05 --db roster.db
//!   roster-runner --seed 7 --staff 12 --mode fixed_hours --hours 350
//!   roster-runner --mode productivity --sales 70000 --rate 0.005
//!   roster-runner --json   (machine-readable run report on stdout)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rosterly_core::{
    assigner::ShiftAssigner,
    config::DEFAULT_PRODUCTIVITY_RATE,
    demand::DemandMode,
    rng::RosterRng,
    roster::RosterGenerator,
    store::ScheduleStore,
    types::{WeekStart, Weekday},
};
use std::env;

#[derive(serde::Serialize)]
struct RunReport {
    week: String,
    targets: rosterly_core::config::DemandTargets,
    assignments: Vec<rosterly_core::assigner::Assignment>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let staff = parse_arg(&args, "--staff", 12usize);
    let json = args.iter().any(|a| a == "--json");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");

    let week = match args.windows(2).find(|w| w[0] == "--week") {
        Some(w) => {
            let date = NaiveDate::parse_from_str(&w[1], "%Y-%m-%d")
                .with_context(|| format!("bad --week date '{}'", w[1]))?;
            WeekStart::containing(date)
        }
        None => WeekStart::containing(chrono::Local::now().date_naive()),
    };

    let mode = demand_mode_from_args(&args)?;

    if !json {
        println!("Rosterly — roster-runner");
        println!("  week:   {week}");
        println!("  db:     {db}");
        println!("  mode:   {}", mode_label(&mode));
        println!();
    }

    let store = if db == ":memory:" {
        ScheduleStore::in_memory()?
    } else {
        ScheduleStore::open(db)?
    };
    store.migrate()?;

    // Seed a demo roster when the store is empty.
    let mut employees = store.active_employees()?;
    if employees.is_empty() {
        let mut rng = RosterRng::new(seed);
        let roster = RosterGenerator::generate(&mut rng, staff);
        for e in &roster {
            store.upsert_employee(e)?;
        }
        log::info!("seeded {} demo employees (seed={seed})", roster.len());
        employees = store.active_employees()?;
    }

    let availability = store.availability_for_week(week)?;
    log::info!(
        "{} of {} employees submitted availability for {week}",
        availability.submitted_count(),
        employees.len()
    );
    let assigner = ShiftAssigner::with_defaults();
    let outcome = assigner.generate(week, &employees, &availability, &mode)?;

    let schedule_id = store.ensure_schedule(week)?;
    store.replace_week_slots(&schedule_id, &outcome.assignments)?;
    if let DemandMode::Productivity { sales, rate } = mode {
        let total_hours: f64 = outcome.assignments.iter().map(|a| a.hours).sum();
        store.record_forecast(week, rate, Some(sales), Some(total_hours))?;
    }

    if json {
        let report = RunReport {
            week: week.to_string(),
            targets: outcome.targets,
            assignments: outcome.assignments,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&outcome, &employees);
    }
    Ok(())
}

fn demand_mode_from_args(args: &[String]) -> Result<DemandMode> {
    let mode = args
        .windows(2)
        .find(|w| w[0] == "--mode")
        .map(|w| w[1].as_str());
    match mode {
        None => Ok(DemandMode::None),
        Some("fixed_hours") => Ok(DemandMode::FixedHours {
            desired_hours: parse_arg(args, "--hours", 0.0f64),
        }),
        Some("productivity") => Ok(DemandMode::Productivity {
            sales: parse_arg(args, "--sales", 0.0f64),
            rate: parse_arg(args, "--rate", DEFAULT_PRODUCTIVITY_RATE),
        }),
        Some(other) => anyhow::bail!("unknown --mode '{other}' (expected fixed_hours or productivity)"),
    }
}

fn mode_label(mode: &DemandMode) -> String {
    match mode {
        DemandMode::None => "baseline".to_string(),
        DemandMode::FixedHours { desired_hours } => format!("fixed_hours ({desired_hours}h)"),
        DemandMode::Productivity { sales, rate } => format!("productivity ({sales} x {rate})"),
    }
}

fn name_of<'a>(employees: &'a [rosterly_core::employee::Employee], id: &'a str) -> &'a str {
    employees
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.as_str())
        .unwrap_or(id)
}

fn print_summary(
    outcome: &rosterly_core::assigner::GenerationOutcome,
    employees: &[rosterly_core::employee::Employee],
) {
    println!("=== WEEK SUMMARY ===");
    println!(
        "  targets:     morning={} middle={} evening={}",
        outcome.targets.morning, outcome.targets.middle, outcome.targets.evening
    );
    println!("  assignments: {}", outcome.assignments.len());
    println!();

    for day in Weekday::ALL {
        let todays: Vec<_> = outcome
            .assignments
            .iter()
            .filter(|a| a.day == day)
            .collect();
        println!("  {}:", day.code());
        for a in todays {
            println!(
                "    {}-{}  {:>4.1}h  {}",
                a.start.format("%H:%M"),
                a.end.format("%H:%M"),
                a.hours,
                name_of(employees, &a.employee_id)
            );
        }
    }

    println!();
    println!("=== SHIFTS PER EMPLOYEE ===");
    let mut counts: Vec<(String, usize)> = employees
        .iter()
        .map(|e| {
            let n = outcome
                .assignments
                .iter()
                .filter(|a| a.employee_id == e.id)
                .count();
            (e.name.clone(), n)
        })
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (name, n) in counts {
        println!("  {n:>2}  {name}");
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
