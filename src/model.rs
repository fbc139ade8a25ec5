use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub hammers: i64,
    pub throws: i64,
    pub verbose: bool,
    pub url: String,
}

impl Config {
    /// Number of hammers to start. Zero or negative counts start none.
    pub fn hammer_count(&self) -> usize {
        usize::try_from(self.hammers).unwrap_or(0)
    }

    pub fn throw_count(&self) -> usize {
        usize::try_from(self.throws).unwrap_or(0)
    }
}

/// A single timed request made by one hammer.
#[derive(Debug)]
pub struct Throw {
    pub hammer: usize,
    pub index: usize,
    pub begin: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Throw {
    /// Wall-clock seconds between issuing the request and receiving the full body.
    /// A clock that stepped backwards yields zero.
    pub fn elapsed_secs(&self) -> f64 {
        (self.end - self.begin)
            .to_std()
            .map_or(0.0, |elapsed| elapsed.as_secs_f64())
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hammer: {}, Throw:   {}, Elapsed Time: {:.2}",
            self.hammer,
            self.index,
            self.elapsed_secs()
        )
    }
}

/// Closing line of a hammer. `total_secs` is the sum over all throws even
/// though the line is labelled AVERAGE.
pub fn summary_line(hammer: usize, total_secs: f64) -> String {
    format!("Hammer: {hammer}, AVERAGE   , Elapsed Time: {total_secs:.2}")
}
