use crate::calendar::{build_month_grid, shift_months, MonthGrid};
use thiserror::Error;
use time::Date;

/// A user navigation request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    PreviousMonth,
    NextMonth,
    GoToToday,
    SelectDay(Date),
}

/// Which month is on display and which day is highlighted.  The two are
/// independent: selecting a day outside the displayed month does not move the
/// display, and moving the display does not change the selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Selection {
    current_month: Date,
    selected: Date,
}

impl Selection {
    pub(crate) fn new(today: Date) -> Selection {
        Selection {
            current_month: today,
            selected: today,
        }
    }

    pub(crate) fn start_month(mut self, date: Date) -> Selection {
        self.current_month = date;
        self
    }

    pub(crate) fn current_month(&self) -> Date {
        self.current_month
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    pub(crate) fn grid(&self) -> MonthGrid {
        build_month_grid(self.current_month)
    }

    /// Returns the state resulting from `action`.  Moving the display beyond
    /// the range of representable dates fails, leaving `self` usable as-is.
    pub(crate) fn apply(self, action: Action, today: Date) -> Result<Selection, OutOfTimeError> {
        match action {
            Action::PreviousMonth => Ok(Selection {
                current_month: shift_months(self.current_month, -1).ok_or(OutOfTimeError)?,
                ..self
            }),
            Action::NextMonth => Ok(Selection {
                current_month: shift_months(self.current_month, 1).ok_or(OutOfTimeError)?,
                ..self
            }),
            Action::GoToToday => Ok(Selection::new(today)),
            Action::SelectDay(date) => Ok(Selection {
                selected: date,
                ..self
            }),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
