mod cell;
mod grid;
mod widget;
pub(crate) use self::cell::{DayCell, Highlight};
pub(crate) use self::grid::{build_month_grid, shift_months, MonthGrid};
pub(crate) use self::widget::{centered_column, Calendar};
