use crate::calendar::MonthGrid;
use serde::Deserialize;
use std::collections::hash_map::{Entry, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date};

static DATE_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

static BUNDLED: &str = include_str!("festivals.json");

/// A named event bound to a single calendar date
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Festival {
    pub(crate) date: Date,
    pub(crate) name: String,
    pub(crate) image: Option<String>,
}

/// A festival entry as it appears in a data file, before its date has been
/// validated
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub(crate) struct FestivalRecord {
    date: String,
    name: String,
    #[serde(default)]
    image: Option<String>,
}

impl FestivalRecord {
    /// Only the exact `YYYY-MM-DD` spelling of a date is accepted, so that a
    /// record matches a day precisely when its string equals that day's
    /// formatted date.
    fn into_festival(self) -> Result<Festival, InvalidDate> {
        let date = Date::parse(&self.date, &DATE_FMT)?;
        if date.format(&DATE_FMT).ok().as_deref() != Some(self.date.as_str()) {
            return Err(InvalidDate::NotCanonical);
        }
        Ok(Festival {
            date,
            name: self.name,
            image: self.image,
        })
    }
}

/// Festivals keyed by date.  When several records share a date, the first
/// one in input order is kept.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct FestivalIndex(HashMap<Date, Festival>);

impl FestivalIndex {
    pub(crate) fn bundled() -> Result<FestivalIndex, FestivalError> {
        FestivalIndex::from_json(BUNDLED)
    }

    pub(crate) fn load(path: &Path) -> Result<FestivalIndex, FestivalError> {
        let src = fs::read_to_string(path).map_err(|source| FestivalError::Read {
            path: path.to_owned(),
            source,
        })?;
        let index = FestivalIndex::from_json(&src)?;
        log::info!(
            "Loaded {} festivals from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    pub(crate) fn from_json(src: &str) -> Result<FestivalIndex, FestivalError> {
        let records = serde_json::from_str::<Vec<FestivalRecord>>(src)?;
        Ok(FestivalIndex::from_records(records))
    }

    /// Records with unparseable dates are skipped with a warning rather than
    /// failing the whole load.
    pub(crate) fn from_records<I: IntoIterator<Item = FestivalRecord>>(
        records: I,
    ) -> FestivalIndex {
        let mut by_date: HashMap<Date, Festival> = HashMap::new();
        for rec in records {
            let raw_date = rec.date.clone();
            let fest = match rec.into_festival() {
                Ok(fest) => fest,
                Err(e) => {
                    log::warn!("Ignoring festival with invalid date {raw_date:?}: {e}");
                    continue;
                }
            };
            match by_date.entry(fest.date) {
                Entry::Occupied(existing) => log::warn!(
                    "Ignoring festival {:?} on {raw_date}: date already taken by {:?}",
                    fest.name,
                    existing.get().name
                ),
                Entry::Vacant(slot) => {
                    slot.insert(fest);
                }
            }
        }
        FestivalIndex(by_date)
    }

    pub(crate) fn find(&self, date: Date) -> Option<&Festival> {
        self.0.get(&date)
    }

    /// Festivals falling within the displayed month of `grid`, in date order
    pub(crate) fn in_month(&self, grid: &MonthGrid) -> Vec<&Festival> {
        grid.days()
            .iter()
            .filter(|&&d| grid.in_month(d))
            .filter_map(|&d| self.find(d))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Error)]
pub(crate) enum FestivalError {
    #[error("failed to read festival file {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse festival data")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
enum InvalidDate {
    #[error(transparent)]
    Parse(#[from] time::error::Parse),
    #[error("not in YYYY-MM-DD form")]
    NotCanonical,
}
