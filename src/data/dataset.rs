//! In-memory table of raw CSV cells.
//! Columns keep header order and rows keep file order.

/// Header plus rows of raw cell text. Every row is as wide as the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from a raw header and raw rows.
    ///
    /// A header name that repeats is kept once, at its first position, and
    /// takes its cells from the last column carrying that name. Short rows
    /// are padded with empty cells; cells beyond the header are dropped.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut columns: Vec<String> = Vec::with_capacity(header.len());
        let mut sources: Vec<usize> = Vec::with_capacity(header.len());
        for (index, name) in header.into_iter().enumerate() {
            match columns.iter().position(|c| *c == name) {
                Some(pos) => sources[pos] = index,
                None => {
                    columns.push(name);
                    sources.push(index);
                }
            }
        }

        let rows = rows
            .into_iter()
            .map(|row| {
                sources
                    .iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Raw values of one column, one per record. An unknown column yields
    /// an empty string for every record.
    pub fn column_values<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.column_index(column);
        self.rows
            .iter()
            .map(move |row| index.and_then(|i| row.get(i)).map_or("", String::as_str))
    }
}
