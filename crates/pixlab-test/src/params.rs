//! Numbered regression checks

use crate::error::TestError;
use pixlab_core::Pix;

/// State of one `*_reg` test.
///
/// Every `compare_*` call is one numbered check. Failures are collected
/// instead of panicking so [`cleanup`](Self::cleanup) can report all of
/// them at once.
pub struct RegParams {
    /// Short test name, printed as `<name>_reg`
    pub test_name: String,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        eprintln!("\n==== {test_name}_reg ====");
        Self {
            test_name: test_name.to_owned(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks run so far.
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&mut self, ok: bool, describe: impl FnOnce(usize) -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = describe(self.index);
            eprintln!("Failure in {}_reg: {msg}", self.test_name);
            self.failures.push(msg);
        }
        ok
    }

    /// Check that `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let ok = (expected - actual).abs() <= delta;
        self.record(ok, |index| {
            TestError::ValueMismatch {
                index,
                expected,
                actual,
                delta,
            }
            .to_string()
        })
    }

    /// Check that two images have the same geometry, layout and samples.
    ///
    /// On a mismatch the first differing sample is reported.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        let dims = |p: &Pix| (p.width(), p.height(), p.channels().count());
        if !expected.sizes_equal(actual) {
            let (ew, eh, ec) = dims(expected);
            let (aw, ah, ac) = dims(actual);
            return self.record(false, |index| {
                format!(
                    "{} - geometry {ew}x{eh}x{ec} vs {aw}x{ah}x{ac}",
                    TestError::PixMismatch { index }
                )
            });
        }

        let first_diff = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        let n = expected.channels().count() as usize;
        let w = expected.width() as usize;
        self.record(first_diff.is_none(), |index| {
            let pos = first_diff.unwrap_or_default();
            let (pixel, channel) = (pos / n, pos % n);
            format!(
                "{} - first difference at ({}, {}) channel {channel}: {} vs {}",
                TestError::PixMismatch { index },
                pixel % w,
                pixel / w,
                expected.data()[pos],
                actual.data()[pos]
            )
        })
    }

    /// Check that two byte strings are identical.
    pub fn compare_strings(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.record(expected == actual, |index| {
            format!(
                "check {index}: byte strings differ (lengths {} and {})",
                expected.len(),
                actual.len()
            )
        })
    }

    /// Print the summary and return whether every check passed.
    pub fn cleanup(self) -> bool {
        let passed = self.failures.is_empty();
        if passed {
            eprintln!("{}_reg: {} checks passed\n", self.test_name, self.index);
        } else {
            eprintln!(
                "{}_reg: {} of {} checks failed",
                self.test_name,
                self.failures.len(),
                self.index
            );
            for failure in &self.failures {
                eprintln!("  {failure}");
            }
            eprintln!();
        }
        passed
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_within_delta() {
        let mut rp = RegParams::new("values");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.1, 0.2));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 3);
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert!(rp.failures()[0].contains("index 3"));
    }

    #[test]
    fn test_pix_mismatches_collected() {
        let mut rp = RegParams::new("pix");
        let a = Pix::from_raw(2, 1, 1, vec![1, 2]).unwrap();
        let b = Pix::from_raw(2, 1, 1, vec![1, 3]).unwrap();
        let c = Pix::from_raw(1, 2, 1, vec![1, 2]).unwrap();
        assert!(rp.compare_pix(&a, &a.clone()));
        assert!(!rp.compare_pix(&a, &b));
        assert!(!rp.compare_pix(&a, &c));
        assert!(rp.compare_strings(b"ab", b"ab"));
        assert_eq!(rp.failures().len(), 2);
        assert!(rp.failures()[0].contains("(1, 0)"));
        assert!(!rp.cleanup());
    }
}
