use std::io::{self, Write};

use crate::record::VerificationRecord;

pub const CSV_HEADER: &str = "time, duration, wait, byte_count, response_code, path, error_code";

/// Writes verification records at a given verbosity.
///
/// - 0: nothing
/// - 1: the CSV header, then one CSV line per record
/// - 2 and above: the header, then one narrative line per record
pub struct RecordWriter<W: Write> {
    out: W,
    verbosity: u8,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(out: W, verbosity: u8) -> Self {
        Self { out, verbosity }
    }

    pub fn header(&mut self) -> io::Result<()> {
        if self.verbosity == 0 {
            return Ok(());
        }
        writeln!(self.out, "{CSV_HEADER}")
    }

    pub fn write(&mut self, record: &VerificationRecord) -> io::Result<()> {
        let millis = record.elapsed.as_secs_f64() * 1000.0;
        match self.verbosity {
            0 => Ok(()),
            1 => writeln!(
                self.out,
                "{}, {:.3}, {}, {}, {}, \"{}\", {}",
                record.started_at.timestamp(),
                millis,
                record.wait,
                record.byte_count,
                record.response_code,
                record.path,
                record.outcome.code()
            ),
            _ => writeln!(
                self.out,
                "{} in {:.3} ms after {} s {} B \"{}\"",
                record.outcome, millis, record.wait, record.byte_count, record.path
            ),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::DateTime;

    use super::*;
    use crate::record::Outcome;

    fn record(outcome: Outcome) -> VerificationRecord {
        VerificationRecord {
            started_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            elapsed: Duration::from_micros(12_500),
            wait: 4,
            byte_count: 75,
            response_code: 200,
            path: "/data/Payload_300_Commit_17_Domain_5".into(),
            outcome,
        }
    }

    fn written(verbosity: u8, record: &VerificationRecord) -> String {
        let mut writer = RecordWriter::new(Vec::new(), verbosity);
        writer.header().unwrap();
        writer.write(record).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn silent_at_zero() {
        assert_eq!(written(0, &record(Outcome::Ok)), "");
    }

    #[test]
    fn csv_at_one() {
        assert_eq!(
            written(1, &record(Outcome::Ok)),
            "time, duration, wait, byte_count, response_code, path, error_code\n\
             1700000000, 12.500, 4, 75, 200, \"/data/Payload_300_Commit_17_Domain_5\", 0\n"
        );
    }

    #[test]
    fn narrative_at_two() {
        let text = written(2, &record(Outcome::Ok));
        assert_eq!(
            text.lines().nth(1),
            Some("OK in 12.500 ms after 4 s 75 B \"/data/Payload_300_Commit_17_Domain_5\"")
        );

        let mut failed = record(Outcome::SizeMismatch);
        failed.path.clear();
        let text = written(3, &failed);
        assert_eq!(
            text.lines().nth(1),
            Some("SIZE MISMATCH in 12.500 ms after 4 s 75 B \"\"")
        );
    }
}
