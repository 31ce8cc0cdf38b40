// src/input.rs

//! Line-oriented task-list input.
//!
//! One dependency record per line: the first whitespace-separated token is a
//! task, every following token is one of its prerequisites. Lines whose
//! first character is `#` are comments. Blank lines are skipped rather than
//! treated as errors.

use std::io::BufRead;

use tracing::debug;

use crate::errors::Result;
use crate::sched::Scheduler;

/// Feed every record from `reader` into `scheduler`.
///
/// A line with a single token registers that task with no prerequisites, so
/// isolated tasks still show up in the schedule.
pub fn read_tasks<R: BufRead>(scheduler: &mut Scheduler<String>, reader: R) -> Result<()> {
    let mut records = 0usize;
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(task) = tokens.next() else {
            continue;
        };
        let prerequisites: Vec<String> = tokens.map(str::to_string).collect();
        if prerequisites.is_empty() {
            scheduler.add_task(task.to_string());
        } else {
            scheduler.add_prerequisites(task.to_string(), prerequisites);
        }
        records += 1;
    }
    debug!(records, "input consumed");
    Ok(())
}
