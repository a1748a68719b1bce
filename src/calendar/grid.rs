use std::iter::successors;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// The dates shown for one month: full Sunday-to-Saturday weeks covering
/// every day of the month, padded with days from the adjacent months.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month_start: Date,
    // Invariant: contiguous, ascending, non-empty
    days: Vec<Date>,
}

impl MonthGrid {
    pub(crate) fn year(&self) -> i32 {
        self.month_start.year()
    }

    pub(crate) fn month(&self) -> Month {
        self.month_start.month()
    }

    pub(crate) fn days(&self) -> &[Date] {
        &self.days
    }

    pub(crate) fn week_count(&self) -> usize {
        self.days.len().div_ceil(DAYS_IN_WEEK)
    }

    pub(crate) fn first(&self) -> Date {
        self.days.first().copied().unwrap_or(self.month_start)
    }

    pub(crate) fn last(&self) -> Date {
        self.days.last().copied().unwrap_or(self.month_start)
    }

    /// Whether `date` belongs to the displayed month (as opposed to being
    /// padding from a neighboring month or not in the grid at all)
    pub(crate) fn in_month(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

/// Build the grid for the month containing `reference`.  Only the year and
/// month of `reference` matter.
pub(crate) fn build_month_grid(reference: Date) -> MonthGrid {
    let first = first_of_month(reference);
    let last = last_of_month(reference);
    let leading = usize::from(first.weekday().index0());
    let trailing = DAYS_IN_WEEK - 1 - usize::from(last.weekday().index0());
    // At the edges of time these walks come up short, and the grid is
    // truncated rather than padded.
    let start = iter_days_before(first).take(leading).last().unwrap_or(first);
    let end = iter_days_after(last).take(trailing).last().unwrap_or(last);
    let days = successors(Some(start), |&d| d.next_day())
        .take_while(|&d| d <= end)
        .collect();
    MonthGrid {
        month_start: first,
        days,
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    iter_days_before(date)
        .take_while(|d| d.month() == date.month())
        .last()
        .unwrap_or(date)
}

pub(crate) fn last_of_month(date: Date) -> Date {
    iter_days_after(date)
        .take_while(|d| d.month() == date.month())
        .last()
        .unwrap_or(date)
}

/// Move `date` by `delta` months.  If the day of month does not exist in the
/// target month, the last day of that month is used instead.  Returns `None`
/// if the result would lie outside the supported range of dates.
pub(crate) fn shift_months(date: Date, delta: i32) -> Option<Date> {
    let index = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(date.month())) - 1)?
        .checked_add(delta)?;
    let year = index.div_euclid(12);
    let month = Month::try_from(u8::try_from(index.rem_euclid(12) + 1).ok()?).ok()?;
    let target = Date::from_calendar_date(year, month, 1).ok()?;
    let day = date.day().min(last_of_month(target).day());
    target.replace_day(day).ok()
}

pub(crate) fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

pub(crate) fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}
