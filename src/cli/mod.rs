//! CLI module - thin console front end over the engine.
//!
//! Parses flags, calls the engine entry points, prints results. No
//! analysis logic lives here.

use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::domain::analysis::AnalysisEngine;
use crate::domain::foundation::ConstraintField;
use crate::domain::profile::{validate_and_build, RawProfileInput};
use crate::domain::session::ModificationSession;
use crate::report;

#[derive(Parser, Debug)]
#[command(name = "zt-compass")]
#[command(
    about = "Decision-support calculator for zero-trust security architecture selection",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The six constraint ratings, each optional; missing ones are defaulted
/// with an assumption disclosure.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ConstraintArgs {
    /// Appetite for security risk (1-10)
    #[arg(long)]
    pub risk_tolerance: Option<i64>,

    /// Regulatory and audit burden (1-10)
    #[arg(long)]
    pub compliance_strictness: Option<i64>,

    /// Budget pressure (1-10)
    #[arg(long)]
    pub cost_sensitivity: Option<i64>,

    /// Importance of frictionless user access (1-10)
    #[arg(long)]
    pub user_experience_priority: Option<i64>,

    /// Operations team capability (1-10)
    #[arg(long)]
    pub operational_maturity: Option<i64>,

    /// Pace of organizational change (1-10)
    #[arg(long)]
    pub business_agility: Option<i64>,
}

impl ConstraintArgs {
    fn to_input(self) -> RawProfileInput {
        let pairs = [
            (ConstraintField::RiskTolerance, self.risk_tolerance),
            (ConstraintField::ComplianceStrictness, self.compliance_strictness),
            (ConstraintField::CostSensitivity, self.cost_sensitivity),
            (ConstraintField::UserExperiencePriority, self.user_experience_priority),
            (ConstraintField::OperationalMaturity, self.operational_maturity),
            (ConstraintField::BusinessAgility, self.business_agility),
        ];

        let mut input = RawProfileInput::empty();
        for (field, value) in pairs {
            if let Some(value) = value {
                input = input.set(field, value);
            }
        }
        input
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score the three architecture patterns against a constraint profile
    Analyze {
        #[command(flatten)]
        constraints: ConstraintArgs,

        /// Emit the full analysis result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a what-if session and modify constraints interactively
    Interactive {
        #[command(flatten)]
        constraints: ConstraintArgs,
    },
}

/// Runs the parsed command, returning a process exit code.
pub fn run(cli: Cli) -> i32 {
    match cli.command {
        Commands::Analyze { constraints, json } => run_analyze(constraints, json),
        Commands::Interactive { constraints } => run_interactive(constraints),
    }
}

fn run_analyze(constraints: ConstraintArgs, json: bool) -> i32 {
    let input = constraints.to_input();
    let validation = validate_and_build(&input);

    let findings = report::render_validation(&validation.validation);
    if !findings.is_empty() {
        eprint!("{}", findings);
    }

    let mut engine = AnalysisEngine::new();
    let result = engine.analyze_profile(&validation.profile);
    info!(top = %result.scores[0].architecture, "analysis complete");

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => {
                eprintln!("error: could not serialize result: {}", err);
                return 1;
            }
        }
    } else {
        print!("{}", report::render_analysis(&result));
    }

    if validation.validation.is_valid {
        0
    } else {
        1
    }
}

fn run_interactive(constraints: ConstraintArgs) -> i32 {
    let input = constraints.to_input();
    let validation = validate_and_build(&input);

    let findings = report::render_validation(&validation.validation);
    if !findings.is_empty() {
        eprint!("{}", findings);
    }

    let mut session = ModificationSession::start(validation.profile);
    println!("Session {} started.", session.id());
    print!("{}", report::render_ranking(session.current_results()));
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("error: {}", err);
                return 1;
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["show"] => {
                for (field, value) in session.current_constraints().values() {
                    println!("{:<26} {}", field.key(), value);
                }
                print!("{}", report::render_ranking(session.current_results()));
            }
            ["compare"] => {
                for line in session.compare_with_initial().summary {
                    println!("{}", line);
                }
            }
            ["history"] => {
                if session.history().is_empty() {
                    println!("No modifications yet.");
                }
                for record in session.history() {
                    println!(
                        "[{}] {}: {} -> {}{}",
                        record.step,
                        record.field.key(),
                        record.old_value,
                        record.new_value,
                        record
                            .reason
                            .as_deref()
                            .map(|r| format!(" ({})", r))
                            .unwrap_or_default()
                    );
                }
            }
            ["reset"] => {
                session.reset_to_initial();
                println!("Session reset to the starting profile.");
            }
            ["revert", index] => match index.parse::<usize>() {
                Ok(index) => match session.revert_to_step(index) {
                    Ok(results) => print!("{}", report::render_ranking(&results)),
                    Err(err) => eprintln!("error: {}", err),
                },
                Err(_) => eprintln!("error: revert expects a step number"),
            },
            ["set", field, value, reason @ ..] => {
                let parsed_field = match field.parse::<ConstraintField>() {
                    Ok(parsed) => parsed,
                    Err(err) => {
                        eprintln!("error: {}", err);
                        continue;
                    }
                };
                let parsed_value = match value.parse::<i64>() {
                    Ok(parsed) => parsed,
                    Err(_) => {
                        eprintln!("error: '{}' is not an integer", value);
                        continue;
                    }
                };
                let reason = (!reason.is_empty()).then(|| reason.join(" "));

                match session.modify(parsed_field, parsed_value, reason) {
                    Ok(impact) => print!("{}", report::render_impact(&impact)),
                    Err(err) => eprintln!("error: {}", err),
                }
            }
            _ => eprintln!("error: unrecognized command; type 'help'"),
        }
    }

    0
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value> [reason]   change one constraint (1-10)");
    println!("  show                           current constraints and ranking");
    println!("  compare                        diff against the starting profile");
    println!("  history                        applied modifications");
    println!("  revert <step>                  restore the state after a step");
    println!("  reset                          discard all modifications");
    println!("  quit                           end the session");
    println!("Fields:");
    for field in ConstraintField::ALL {
        println!("  {}", field.key());
    }
}
