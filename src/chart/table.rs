/// Wide table: one shared time axis, one percentage-change column per ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    times: Vec<i64>,
    tickers: Vec<String>,
    // columns[c][r] aligns with times[r]; None marks a missing observation.
    columns: Vec<Vec<Option<f64>>>,
}

/// One observation of the long (melted) table.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub time: i64,
    pub ticker: String,
    pub pct_change: f64,
}

/// Long table with one row per (time, ticker) pair, ticker-major order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LongTable {
    pub rows: Vec<LongRow>,
}

impl WideTable {
    pub fn new(times: Vec<i64>) -> Self {
        Self {
            times,
            tickers: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn times(&self) -> &[i64] {
        &self.times
    }

    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        *self.columns.get(column)?.get(row)?
    }

    /// Add one ticker's series aligned positionally against the time axis.
    /// Shorter series leave missing cells; values past the axis end are
    /// discarded.
    pub fn push_series(&mut self, ticker: &str, values: Vec<f64>) {
        let mut column: Vec<Option<f64>> = values.into_iter().map(Some).collect();
        column.resize(self.times.len(), None);
        self.tickers.push(ticker.to_string());
        self.columns.push(column);
    }

    /// Drop every row where any ticker column has a missing cell.
    pub fn drop_missing(&mut self) {
        let keep: Vec<bool> = (0..self.times.len())
            .map(|r| self.columns.iter().all(|c| c[r].is_some()))
            .collect();

        let mut row = 0;
        self.times.retain(|_| {
            let k = keep[row];
            row += 1;
            k
        });
        for column in &mut self.columns {
            let mut row = 0;
            column.retain(|_| {
                let k = keep[row];
                row += 1;
                k
            });
        }
    }

    /// Reshape wide to long, ticker-major (all rows of the first ticker
    /// first), mirroring a melt over the ticker columns.
    pub fn melt(&self) -> LongTable {
        let mut rows = Vec::with_capacity(self.times.len() * self.tickers.len());
        for (c, ticker) in self.tickers.iter().enumerate() {
            for (r, &time) in self.times.iter().enumerate() {
                if let Some(pct_change) = self.columns[c][r] {
                    rows.push(LongRow {
                        time,
                        ticker: ticker.clone(),
                        pct_change,
                    });
                }
            }
        }
        LongTable { rows }
    }
}

impl LongTable {
    /// Distinct tickers in first-seen order.
    pub fn tickers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            if !out.iter().any(|t| t == &row.ticker) {
                out.push(row.ticker.clone());
            }
        }
        out
    }

    /// One ticker's (time, pct_change) sequence in row order.
    pub fn series(&self, ticker: &str) -> Vec<(i64, f64)> {
        self.rows
            .iter()
            .filter(|row| row.ticker == ticker)
            .map(|row| (row.time, row.pct_change))
            .collect()
    }

    pub fn time_bounds(&self) -> Option<(i64, i64)> {
        let min = self.rows.iter().map(|r| r.time).min()?;
        let max = self.rows.iter().map(|r| r.time).max()?;
        Some((min, max))
    }

    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.rows {
            min = min.min(row.pct_change);
            max = max.max(row.pct_change);
        }
        if min.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// Per-ticker value at the maximum timestamp, in ticker order. Used to
    /// place the end-of-line labels.
    pub fn last_values(&self) -> Vec<(String, f64)> {
        let Some((_, end)) = self.time_bounds() else {
            return Vec::new();
        };
        self.tickers()
            .into_iter()
            .filter_map(|ticker| {
                self.rows
                    .iter()
                    .find(|row| row.ticker == ticker && row.time == end)
                    .map(|row| (ticker.clone(), row.pct_change))
            })
            .collect()
    }
}
