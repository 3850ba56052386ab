//! Display implementations for timeline models.
//!
//! All output is markdown, rendered by the CLI's terminal renderer or
//! returned verbatim to MCP clients.

use std::fmt;

use super::datetime::DayLabel;
use crate::{
    models::{ResourceLane, TaskInterval},
    session::TaskSummary,
    timeline::{DayBreakdown, TimelineView},
};

impl fmt::Display for ResourceLane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (lane {})", self.display_name, self.id)
    }
}

impl fmt::Display for TaskInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** {}: {} .. {}",
            self.id,
            self.label,
            DayLabel(self.start()),
            DayLabel(self.end())
        )
    }
}

impl fmt::Display for DayBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days ({} working, {} off)",
            self.total, self.working, self.off
        )
    }
}

impl fmt::Display for TimelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Schedule {} .. {}",
            DayLabel(self.window.start()),
            DayLabel(self.window.end())
        )?;

        if self.lanes.is_empty() {
            writeln!(f, "\nNo contractors to show.")?;
            return Ok(());
        }

        for lane in &self.lanes {
            writeln!(f, "\n## {lane}")?;
            writeln!(f)?;
            let tasks = self.tasks_in_lane(lane.id);
            if tasks.is_empty() {
                writeln!(f, "No tasks.")?;
            }
            for task in tasks {
                write!(f, "{task}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.task.id, self.task.label)?;
        writeln!(f)?;
        writeln!(f, "- Lane: {}", self.lane)?;
        writeln!(f, "- Start: {}", DayLabel(self.task.start()))?;
        writeln!(f, "- End: {}", DayLabel(self.task.end()))?;
        writeln!(f, "- Total days: {}", self.days.total)?;
        writeln!(f, "- Working days: {}", self.days.working)?;
        writeln!(f, "- Non-working days: {}", self.days.off)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{end_of_day, start_of_day, TaskId, ViewWindow},
        timeline::LaneSelection,
        Timeline,
    };

    fn timeline() -> Timeline {
        let mut timeline = Timeline::new(ViewWindow::around(date(2024, 11, 1).at(0, 0, 0, 0)));
        timeline.set_lanes(vec![
            ResourceLane::new(1, "Acme Concrete", "#4e79a7"),
            ResourceLane::new(2, "Bolt Electrical", "#f28e2b"),
        ]);
        timeline.replace_tasks(vec![TaskInterval::new(
            TaskId::Server(10),
            1,
            start_of_day(date(2024, 11, 6)),
            end_of_day(date(2024, 11, 13)),
            "Slab",
        )
        .unwrap()]);
        timeline
    }

    #[test]
    fn test_task_display() {
        let timeline = timeline();
        let output = timeline.tasks()[0].to_string();
        assert_eq!(output, "- **10** Slab: 2024-11-06 .. 2024-11-13\n");
    }

    #[test]
    fn test_view_display_groups_by_lane() {
        let output = timeline().view(LaneSelection::All).to_string();
        assert!(output.starts_with("# Schedule 2024-11-06 .. 2024-11-28"));
        assert!(output.contains("## Acme Concrete (lane 1)"));
        assert!(output.contains("## Bolt Electrical (lane 2)\n\nNo tasks."));
        assert!(output.contains("Slab"));
    }

    #[test]
    fn test_summary_display() {
        let timeline = timeline();
        let summary = TaskSummary {
            task: timeline.tasks()[0].clone(),
            lane: timeline.lanes()[0].clone(),
            days: DayBreakdown {
                total: 8,
                working: 7,
                off: 1,
            },
        };
        let output = summary.to_string();
        assert!(output.contains("# 10. Slab"));
        assert!(output.contains("- Working days: 7"));
        assert_eq!(summary.days.to_string(), "8 days (7 working, 1 off)");
    }
}
