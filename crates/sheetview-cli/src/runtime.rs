// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use sheetview_app::{Row, sample_rows};
use sheetview_tui::SheetRuntime;

/// Serves the built-in sample records. Nothing is ever written back.
#[derive(Debug, Default)]
pub struct SampleRuntime {
    loads: usize,
}

impl SampleRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SheetRuntime for SampleRuntime {
    fn load_rows(&mut self) -> Result<Vec<Row>> {
        self.loads += 1;
        let rows = sample_rows();
        tracing::debug!(rows = rows.len(), loads = self.loads, "loaded sample rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::SampleRuntime;
    use anyhow::Result;
    use sheetview_app::{ColumnKey, RowId};
    use sheetview_tui::SheetRuntime;

    #[test]
    fn load_rows_returns_the_five_sample_records_in_order() -> Result<()> {
        let mut runtime = SampleRuntime::new();
        let rows = runtime.load_rows()?;
        let ids: Vec<RowId> = rows.iter().map(|row| row.id).collect();
        assert_eq!(
            ids,
            vec![RowId::new(1), RowId::new(2), RowId::new(3), RowId::new(4), RowId::new(5)]
        );
        assert_eq!(rows[1].value(ColumnKey::Assigned), "Tejas Pandey");
        Ok(())
    }

    #[test]
    fn repeated_loads_return_identical_records() -> Result<()> {
        let mut runtime = SampleRuntime::new();
        let first = runtime.load_rows()?;
        let second = runtime.load_rows()?;
        assert_eq!(first, second);
        assert_eq!(runtime.loads, 2);
        Ok(())
    }
}
