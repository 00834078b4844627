//! CSV output formatting.
//!
//! Writes rows straight into a `csv::Writer` with no intermediate `String`
//! allocation per field. Uses `itoa` for IDs and `ryu` for values.

use std::io::{self, Write};

use crate::HEADER;
use crate::row::Row;

/// Record writer for the generated dataset.
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
    id_buf: itoa::Buffer,
    value_buf: ryu::Buffer,
}

impl<W: Write> RowWriter<W> {
    /// Records end with CRLF, the RFC 4180 terminator.
    pub fn new(sink: W) -> Self {
        let inner = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(sink);
        Self {
            inner,
            id_buf: itoa::Buffer::new(),
            value_buf: ryu::Buffer::new(),
        }
    }

    pub fn write_header(&mut self) -> csv::Result<()> {
        self.inner.write_record(HEADER)
    }

    pub fn write_row(&mut self, row: &Row) -> csv::Result<()> {
        let id = self.id_buf.format(row.id);
        let value = format_value(&mut self.value_buf, row.value);
        self.inner
            .write_record([id.as_bytes(), value.as_bytes(), row.description.as_bytes()])
    }

    /// Flush buffered records and hand back the sink.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}

/// Shortest round-trip text for a value. Whole numbers keep one trailing
/// zero (`12.0`), values in `[0, 100)` never use exponent notation.
pub fn format_value(buf: &mut ryu::Buffer, value: f64) -> &str {
    // Negative zero would print as "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };
    buf.format_finite(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::hundredths_to_value;
    use proptest::prelude::*;

    fn fmt(value: f64) -> String {
        let mut buf = ryu::Buffer::new();
        format_value(&mut buf, value).to_string()
    }

    fn written(rows: &[Row]) -> String {
        let mut w = RowWriter::new(Vec::new());
        w.write_header().unwrap();
        for row in rows {
            w.write_row(row).unwrap();
        }
        String::from_utf8(w.finish().unwrap()).unwrap()
    }

    #[test]
    fn value_formatting() {
        assert_eq!(fmt(12.34), "12.34");
        assert_eq!(fmt(12.3), "12.3");
        assert_eq!(fmt(12.0), "12.0");
        assert_eq!(fmt(0.0), "0.0");
        assert_eq!(fmt(-0.0), "0.0");
        assert_eq!(fmt(0.01), "0.01");
        assert_eq!(fmt(99.99), "99.99");
    }

    #[test]
    fn header_and_rows_with_crlf() {
        let out = written(&[Row::new(1, 3.5), Row::new(2, 70.25)]);
        assert_eq!(
            out,
            "ID,Value,Description\r\n1,3.5,Item 1\r\n2,70.25,Item 2\r\n"
        );
    }

    #[test]
    fn description_is_not_quoted() {
        let out = written(&[Row::new(1000, 0.0)]);
        assert!(out.ends_with("1000,0.0,Item 1000\r\n"), "{out:?}");
    }

    proptest! {
        #[test]
        fn every_hundredth_prints_back_exactly(hundredths in 0u32..crate::VALUE_CENTS) {
            let text = fmt(hundredths_to_value(hundredths));
            let (int_part, frac_part) = text.split_once('.').unwrap();
            prop_assert!(frac_part.len() <= 2, "{}", text);
            prop_assert!(!text.contains('e'));
            let parsed: f64 = text.parse().unwrap();
            prop_assert!((0.0..100.0).contains(&parsed));
            let back = int_part.parse::<u32>().unwrap() * 100
                + format!("{frac_part:0<2}").parse::<u32>().unwrap();
            prop_assert_eq!(back, hundredths);
        }
    }
}
