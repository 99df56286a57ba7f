use crate::percentage::Pct;
use derive_more::{Display, From};

#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        [
            $(
                $crate::table::Value::from($value)
            ),*
        ]
    };
}

pub use row;

#[derive(Debug)]
pub struct Table<const N: usize> {
    pub header: [String; N],
    pub abbr: [String; N],
    pub rows: Vec<[Value; N]>,
    pub totals: Option<[Value; N]>,
}

impl<const N: usize> Table<N>
where
    [String; N]: Default,
{
    pub fn new(header_abbr: [(impl ToString, impl ToString); N]) -> Table<N> {
        let mut header: [String; N] = Default::default();
        let mut abbr: [String; N] = Default::default();
        for (i, (h, a)) in header_abbr.into_iter().enumerate() {
            header[i] = h.to_string();
            abbr[i] = a.to_string();
        }
        Table {
            header,
            abbr,
            rows: Vec::new(),
            totals: None,
        }
    }
}

impl<const N: usize> Table<N> {
    pub fn push(&mut self, data: [Value; N]) {
        self.rows.push(data);
    }

    pub fn with_totals(mut self, totals: [Value; N]) -> Table<N> {
        self.totals = Some(totals);
        self
    }

    /// Every row as text, totals last.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows
            .iter()
            .chain(self.totals.iter())
            .map(|row| row.iter().map(ToString::to_string).collect())
    }
}

#[derive(Debug, Clone, From, Display)]
pub enum Value {
    Pct3(Pct<3>),
    Str(String),
    U32(u32),
}

impl Default for Value {
    fn default() -> Value {
        Value::Str(String::default())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

#[cfg(test)]
#[test]
fn test_records() {
    let mut table = Table::new([("Player", "Player"), ("At Bats", "AB"), ("Batting Average", "AVG")]);
    table.push(row!["A. Carter", 4_u32, Pct::<3>::new(1_u32, 4)]);
    table.push(row!["M. Rivera", 0_u32, Pct::<3>::new(0_u32, 0)]);
    let table = table.with_totals(row!["Totals", 4_u32, Pct::<3>::new(1_u32, 4)]);

    assert_eq!(table.abbr, ["Player", "AB", "AVG"]);
    let records = table.records().collect::<Vec<_>>();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], ["A. Carter", "4", ".250"]);
    assert_eq!(records[1], ["M. Rivera", "0", "--"]);
    assert_eq!(records[2][0], "Totals");
}
