use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeZone, Utc};

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to midday UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(at_time(date, 12, 0, 0))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// January 1 of `year`.
pub fn start_of_year(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Midnight UTC on January 1 of `year` and of the following year.
pub fn year_bounds(year: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start_of_year(year).and_time(NaiveTime::MIN).and_utc();
    let end = start_of_year(year + 1).and_time(NaiveTime::MIN).and_utc();
    (start, end)
}

/// Same day-of-month `months` calendar months earlier, clamped to the month's last day.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

fn at_time(date: NaiveDate, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    let naive = date
        .and_hms_opt(hour, min, sec)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    Utc.from_utc_datetime(&naive)
}
