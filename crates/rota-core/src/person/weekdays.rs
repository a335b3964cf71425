use chrono::Weekday;

/// The weekdays a person is normally on call, as a small bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

const ALL_DAYS: u8 = 0b0111_1111;

impl WeekdaySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn full() -> Self {
        Self(ALL_DAYS)
    }

    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day.num_days_from_monday();
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::full()
    }
}
