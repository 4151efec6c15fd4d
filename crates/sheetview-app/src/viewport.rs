// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// Vertical space reserved for chrome and the height of one grid row, in
/// whatever unit the viewport height is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub chrome_height: i64,
    pub row_height: i64,
}

impl ViewportMetrics {
    /// Browser layout: 150px of bars above and below the grid, 40px rows.
    pub const PIXELS: Self = Self {
        chrome_height: 150,
        row_height: 40,
    };

    /// Terminal layout: two header bars, the band and column header rows,
    /// the tab strip and the status line.
    pub const TERMINAL: Self = Self {
        chrome_height: 9,
        row_height: 1,
    };

    pub fn rows_per_screen(self, viewport_height: i64) -> i64 {
        if self.row_height <= 0 {
            return 0;
        }
        (viewport_height - self.chrome_height).div_euclid(self.row_height)
    }

    /// Empty placeholder rows needed below `data_len` records so the grid
    /// fills the viewport: `max(rows_per_screen, data_len) - data_len`.
    pub fn filler_rows(self, viewport_height: i64, data_len: usize) -> usize {
        let data_len_i64 = i64::try_from(data_len).unwrap_or(i64::MAX);
        let total = self.rows_per_screen(viewport_height).max(data_len_i64);
        usize::try_from(total - data_len_i64).unwrap_or(0)
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::TERMINAL
    }
}
