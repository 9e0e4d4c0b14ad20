use crate::translator::Record;
use std::fmt::Write as _;

/// Formats one translation record as `<addr>, <value>, <frame>, <hex>`
/// with the frame bytes rendered as uppercase hex.
pub fn format_record(record: &Record) -> String {
    let mut hex = String::with_capacity(record.frame_bytes.len() * 2);
    for byte in record.frame_bytes.iter() {
        write!(hex, "{:02X}", byte).expect("writing to a String never fails");
    }
    format!("{}, {}, {}, {}", record.addr, record.value, record.frame_number, hex)
}
