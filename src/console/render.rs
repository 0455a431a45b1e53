//! Text rendering for console views.

use super::parser::DATE_FORMAT;
use crate::task::domain::{DeadlineGroup, Project, ProjectGroup, Task};
use std::fmt;

/// Help text listing every console command.
pub const HELP: &str = "\
Commands:
  show
  add project <project name>
  add task <project ID> <task description>
  check <task ID>
  uncheck <task ID>
  deadline <task ID> <DD-MM-YYYY>
  today
  view-by-deadline
  quit
";

/// One task line: `    [x] 3: description, 17-10-2026`.
pub struct TaskLine<'a>(pub &'a Task);

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let task = self.0;
        let mark = if task.is_done() { 'x' } else { ' ' };
        write!(f, "    [{mark}] {}: {}", task.id(), task.description())?;
        if let Some(deadline) = task.deadline() {
            write!(f, ", {}", deadline.format(DATE_FORMAT))?;
        }
        Ok(())
    }
}

/// Every project followed by its tasks and a blank line.
pub struct ProjectListing<'a>(pub &'a [Project]);

impl fmt::Display for ProjectListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for project in self.0 {
            writeln!(f, "{}", project.name())?;
            write_tasks(f, project.tasks())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tasks due today under their project names.
pub struct TodayListing<'a>(pub &'a [ProjectGroup]);

impl fmt::Display for TodayListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks due today.");
        }
        for group in self.0 {
            writeln!(f, "{}", group.project_name())?;
            write_tasks(f, group.tasks())?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tasks grouped by deadline, then by project.
pub struct DeadlineListing<'a>(pub &'a [DeadlineGroup]);

impl fmt::Display for DeadlineListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.0 {
            match group.deadline() {
                Some(deadline) => writeln!(f, "Deadline: {}", deadline.format(DATE_FORMAT))?,
                None => writeln!(f, "Deadline: No deadline")?,
            }
            for project in group.projects() {
                writeln!(f, "  {}:", project.project_name())?;
                write_tasks(f, project.tasks())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_tasks(f: &mut fmt::Formatter<'_>, tasks: &[Task]) -> fmt::Result {
    tasks
        .iter()
        .try_for_each(|task| writeln!(f, "{}", TaskLine(task)))
}
