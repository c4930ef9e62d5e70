//! Month grid for the availability calendar.
//!
//! Dates are always built from explicit year/month/day components so the
//! ISO strings never shift with the browser's UTC offset.

use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

/// Furthest month reachable from the current one.
pub const MAX_MONTH_OFFSET: u32 = 2;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

const WEEKDAY_SHORT: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("solo se pueden consultar hasta {max} meses hacia adelante (pedido: {requested})", max = MAX_MONTH_OFFSET)]
    OffsetOutOfRange { requested: u32 },
    #[error("mes inválido: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// `YYYY-MM-DD`
    pub iso: String,
    /// Short localized label, e.g. `dom 15`.
    pub label: String,
    pub is_today: bool,
    /// Strictly before today. Today itself is never past.
    pub is_past: bool,
    /// Monday = 0 … Sunday = 6.
    pub day_of_week: u8,
}

impl CalendarDay {
    pub fn number(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub title: String,
    /// Empty cells before day 1 in a Monday-first grid.
    pub leading_blanks: u8,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.days.first()
    }

    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.days.last()
    }

    /// Grid cells row by row: `None` for blanks, padded to whole weeks.
    pub fn cells(&self) -> Vec<Option<&CalendarDay>> {
        let mut cells: Vec<Option<&CalendarDay>> = Vec::with_capacity(42);
        cells.extend(std::iter::repeat(None).take(self.leading_blanks as usize));
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }

    /// Non-past part of the month, used as the open-days query range.
    pub fn bookable_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.days.iter().find(|day| !day.is_past)?;
        let last = self.days.last()?;
        Some((first.date, last.date))
    }
}

/// Number of blank cells before day 1 when Monday is the first column.
pub fn leading_blanks(first_of_month: NaiveDate) -> u8 {
    first_of_month.weekday().num_days_from_monday() as u8
}

pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, year)
}

/// Grid for an arbitrary month, with flags relative to `today`.
pub fn build_grid(year: i32, month: u32, today: NaiveDate) -> Result<CalendarMonth, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let days: Vec<CalendarDay> = (1..=31)
        .map_while(|day| NaiveDate::from_ymd_opt(year, month, day).map(|date| (day, date)))
        .map(|(day, date)| {
            let day_of_week = date.weekday().num_days_from_monday() as u8;
            CalendarDay {
                date,
                iso: format!("{:04}-{:02}-{:02}", year, month, day),
                label: format!("{} {}", WEEKDAY_SHORT[day_of_week as usize], day),
                is_today: date == today,
                is_past: date < today,
                day_of_week,
            }
        })
        .collect();
    Ok(CalendarMonth {
        year,
        month,
        title: month_title(year, month),
        leading_blanks: leading_blanks(first),
        days,
    })
}

/// Grid for the month `offset` months after the one containing `today`.
pub fn build_month(today: NaiveDate, offset: u32) -> Result<CalendarMonth, CalendarError> {
    if offset > MAX_MONTH_OFFSET {
        return Err(CalendarError::OffsetOutOfRange { requested: offset });
    }
    let invalid = CalendarError::InvalidMonth {
        year: today.year(),
        month: today.month(),
    };
    let first = NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
        .and_then(|first| first.checked_add_months(Months::new(offset)))
        .ok_or(invalid)?;
    build_grid(first.year(), first.month(), today)
}

/// Month navigation clamped to `[current month, current + 2]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCursor {
    offset: u32,
}

impl MonthCursor {
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn can_go_back(&self) -> bool {
        self.offset > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.offset < MAX_MONTH_OFFSET
    }

    pub fn previous(self) -> Self {
        Self {
            offset: self.offset.saturating_sub(1),
        }
    }

    pub fn next(self) -> Self {
        Self {
            offset: (self.offset + 1).min(MAX_MONTH_OFFSET),
        }
    }

    pub fn month(&self, today: NaiveDate) -> Result<CalendarMonth, CalendarError> {
        build_month(today, self.offset)
    }
}
