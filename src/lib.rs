pub mod generate;
pub mod output;
pub mod row;
pub mod stats;

/// File written by the generator, relative to the working directory.
pub const DEFAULT_PATH: &str = "large_dataset.csv";

/// Number of data rows written after the header.
pub const ROW_COUNT: u32 = 1000;

pub const HEADER: [&str; 3] = ["ID", "Value", "Description"];

/// Values are drawn from `0..VALUE_CENTS` hundredths, i.e. `[0, 100)`.
pub const VALUE_CENTS: u32 = 10_000;

/// Strip UTF-8 BOM (U+FEFF, bytes EF BB BF) from the beginning of a buffer.
pub fn strip_bom(buf: &mut Vec<u8>) {
    if buf.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buf.drain(..3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_bom_before_header() {
        let mut buf = b"\xEF\xBB\xBFID,Value,Description\r\n".to_vec();
        strip_bom(&mut buf);
        assert_eq!(buf, b"ID,Value,Description\r\n");
    }

    #[test]
    fn strip_bom_absent() {
        let mut buf = b"1,2.5,Item 1".to_vec();
        strip_bom(&mut buf);
        assert_eq!(buf, b"1,2.5,Item 1");
    }

    #[test]
    fn strip_bom_only_bom() {
        let mut buf = vec![0xEF, 0xBB, 0xBF];
        strip_bom(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn value_range_is_two_decimal_hundred() {
        assert_eq!(VALUE_CENTS as f64 / 100.0, 100.0);
    }
}
