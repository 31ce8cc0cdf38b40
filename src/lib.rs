// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod sched;

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::CliArgs;
use crate::sched::Scheduler;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - input reading (stdin or `--input` file)
/// - the scheduler
/// - group rendering on stdout
///
/// A cycle in the input surfaces as an error from [`Scheduler::schedule`],
/// which `main.rs` turns into a non-zero exit; no partial schedule is
/// printed.
pub fn run(args: CliArgs) -> Result<()> {
    let mut scheduler = Scheduler::<String>::new();

    match args.input {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file '{path}'"))?;
            input::read_tasks(&mut scheduler, BufReader::new(file))?;
        }
        None => {
            let stdin = io::stdin();
            input::read_tasks(&mut scheduler, stdin.lock())?;
        }
    }

    info!(
        tasks = scheduler.task_count(),
        dependencies = scheduler.dependency_count(),
        "task list loaded"
    );

    if args.dry_run {
        print_dry_run(&scheduler);
        return Ok(());
    }

    let groups = scheduler.schedule()?;
    print!("{}", render_groups(&groups));
    Ok(())
}

/// Render scheduled groups in the reference output format:
///
/// ```text
/// Independent Task Group 1:
///   <task>
///   ...
/// ```
pub fn render_groups<T: Display>(groups: &[Vec<T>]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        out.push_str(&format!("Independent Task Group {}:\n", i + 1));
        for task in group {
            out.push_str(&format!("  {task}\n"));
        }
    }
    out
}

/// Simple dry-run output: print tasks and their direct prerequisites.
fn print_dry_run(scheduler: &Scheduler<String>) {
    println!("depdag dry-run");
    println!("  tasks: {}", scheduler.task_count());
    println!("  dependencies: {}", scheduler.dependency_count());
    println!();

    for task in scheduler.tasks() {
        println!("  - {task}");
        let prerequisites = scheduler.prerequisites_of(task);
        if !prerequisites.is_empty() {
            println!("      after: {prerequisites:?}");
        }
    }
}
