use super::grid::MonthGrid;
use crate::festival::{Festival, FestivalIndex};
use time::Date;

/// Everything needed to draw one day of the month grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell<'a> {
    pub(crate) date: Date,
    pub(crate) festival: Option<&'a Festival>,
    pub(crate) is_today: bool,
    pub(crate) is_selected: bool,
    pub(crate) in_month: bool,
}

impl DayCell<'_> {
    pub(crate) fn is_festival(&self) -> bool {
        self.festival.is_some()
    }

    pub(crate) fn highlight(&self) -> Highlight {
        match (self.is_today, self.is_festival()) {
            (true, true) => Highlight::TodayFestival,
            (true, false) => Highlight::Today,
            (false, true) => Highlight::Festival,
            (false, false) => Highlight::Plain,
        }
    }
}

/// How a day is emphasized, in decreasing order of precedence.  A festival
/// on today's date is its own case rather than one flag overriding the other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Highlight {
    TodayFestival,
    Today,
    Festival,
    Plain,
}

/// Classify every day of `grid` in order
pub(crate) fn classify<'a>(
    grid: &MonthGrid,
    festivals: &'a FestivalIndex,
    today: Date,
    selected: Date,
) -> Vec<DayCell<'a>> {
    grid.days()
        .iter()
        .map(|&date| DayCell {
            date,
            festival: festivals.find(date),
            is_today: date == today,
            is_selected: date == selected,
            in_month: grid.in_month(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_month_grid;
    use time::macros::date;

    fn index() -> FestivalIndex {
        FestivalIndex::from_json(
            r#"[
                {"date": "2024-03-08", "name": "Holi"},
                {"date": "2024-03-12", "name": "Fair"},
                {"date": "2024-02-26", "name": "Last Month"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_classify() {
        let festivals = index();
        let grid = build_month_grid(date!(2024 - 03 - 01));
        let cells = classify(&grid, &festivals, date!(2024 - 03 - 12), date!(2024 - 03 - 20));
        assert_eq!(cells.len(), grid.days().len());
        let cell = |d: Date| {
            cells
                .iter()
                .find(|c| c.date == d)
                .copied()
                .expect("date should be in grid")
        };
        assert_eq!(cell(date!(2024 - 03 - 12)).highlight(), Highlight::TodayFestival);
        assert_eq!(cell(date!(2024 - 03 - 08)).highlight(), Highlight::Festival);
        assert_eq!(cell(date!(2024 - 03 - 09)).highlight(), Highlight::Plain);
        assert!(cell(date!(2024 - 03 - 20)).is_selected);
        assert!(!cell(date!(2024 - 03 - 12)).is_selected);
        let feb = cell(date!(2024 - 02 - 26));
        assert!(!feb.in_month);
        assert!(feb.is_festival());
        assert_eq!(feb.highlight(), Highlight::Festival);
        assert!(cell(date!(2024 - 04 - 01)).date > date!(2024 - 03 - 31));
        assert!(!cell(date!(2024 - 04 - 01)).in_month);
    }

    #[test]
    fn test_today_festival_is_distinct() {
        let festivals = index();
        let grid = build_month_grid(date!(2024 - 03 - 01));
        let today = date!(2024 - 03 - 08);
        let cells = classify(&grid, &festivals, today, today);
        let highlights = cells
            .iter()
            .filter(|c| c.in_month)
            .map(DayCell::highlight)
            .collect::<Vec<_>>();
        assert_eq!(
            highlights
                .iter()
                .filter(|&&h| h == Highlight::TodayFestival)
                .count(),
            1
        );
        assert!(!highlights.contains(&Highlight::Today));
        let cells = classify(&grid, &festivals, date!(2024 - 03 - 09), today);
        let plain_today = cells
            .iter()
            .find(|c| c.date == date!(2024 - 03 - 09))
            .map(DayCell::highlight);
        assert_eq!(plain_today, Some(Highlight::Today));
    }
}
