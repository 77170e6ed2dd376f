use super::reconciler::DayOutcome;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn outcomes(days: &[DayOutcome]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "STATUS"]);
        for day in days {
            table.add_row(row![day.date.format("%Y-%m-%d"), day.date.format("%a"), day.status]);
        }
        table.printstd();

        Ok(())
    }
}
