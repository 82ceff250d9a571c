//! Display implementations for domain models.
//!
//! Items format as markdown: a header with the description and kind,
//! followed by metadata lines and the schedule entries. Goal entries show
//! their date, routine entries their offset, both with planned minutes.

use std::fmt;

use crate::models::{Frequency, Item, ItemKind, Schedule};

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.description, self.kind())?;
        writeln!(f)?;
        writeln!(f, "- Active: {}", if self.active { "yes" } else { "no" })?;

        match &self.schedule {
            Schedule::Goal {
                start_date,
                deadline,
                gschedule,
            } => {
                writeln!(f, "- Start date: {start_date}")?;
                writeln!(f, "- Deadline: {deadline}")?;
                if gschedule.is_empty() {
                    writeln!(f, "- Schedule: (empty)")?;
                } else {
                    writeln!(f, "- Schedule:")?;
                    for spec in gschedule {
                        writeln!(f, "  - {} ({} min)", spec.date(), spec.duration())?;
                    }
                }
            }
            Schedule::Routine {
                frequency,
                rschedule,
            } => {
                writeln!(f, "- Frequency: {frequency}")?;
                if rschedule.is_empty() {
                    writeln!(f, "- Schedule: (empty)")?;
                } else {
                    writeln!(f, "- Schedule:")?;
                    for spec in rschedule {
                        writeln!(f, "  - offset {} ({} min)", spec.offset(), spec.duration())?;
                    }
                }
            }
        }

        Ok(())
    }
}
