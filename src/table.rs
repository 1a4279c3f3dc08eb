use crate::percentage::{Pct, Percent};
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
    pub header: [&'static str; N],
    pub abbr: [&'static str; N],
    pub col_class: &'static str,
    pub rows: Vec<[Value; N]>,
}

impl<const N: usize> Table<N> {
    pub fn new(header_abbr: [(&'static str, &'static str); N], col_class: &'static str) -> Table<N> {
        Table {
            header: header_abbr.map(|(header, _)| header),
            abbr: header_abbr.map(|(_, abbr)| abbr),
            col_class,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, data: [Value; N]) {
        self.rows.push(data);
    }

    /// (full name, abbreviation) for each column.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.header.iter().copied().zip(self.abbr.iter().copied())
    }
}

#[derive(Debug, From, Display)]
pub enum Value {
    Percent(Percent),
    Pct3(Pct<3>),
    Str(String),
    U16(u16),
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}
