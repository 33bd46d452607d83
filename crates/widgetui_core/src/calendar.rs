//! Month grid generation and DatePicker popover state.
//!
//! A grid is always six weeks (42 cells) starting on the Sunday on or before the first of the
//! displayed month, so the popover never changes height while paging between months.

use chrono::{Datelike, Months, NaiveDate};

use crate::style::ClassList;

/// Cells in every grid.
pub const GRID_CELLS: usize = 42;
/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
/// Wire format of date values.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts `date` by `delta` months, clamping the day to the target month's length. Returns
/// `date` unchanged when the result would leave the supported range.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let shifted = if delta >= 0 {
        date.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Parses a `YYYY-MM-DD` value. Blank input is `None`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

/// Formats `date` as `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Trigger text such as `Mar 5, 2024`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Popover heading such as `March 2024`.
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Inclusive selectable range. Either end may be open.
pub struct DateBounds {
    /// Earliest selectable date.
    pub min: Option<NaiveDate>,
    /// Latest selectable date.
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Builds bounds from optional endpoints.
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    /// Whether `date` is selectable.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One day in the grid.
pub struct CalendarCell {
    /// The day.
    pub date: NaiveDate,
    /// Outside the displayed month.
    pub muted: bool,
    /// Outside the selectable bounds.
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Six-week grid for one displayed month.
pub struct CalendarGrid {
    /// First day of the displayed month.
    pub month: NaiveDate,
    /// Cells in row-major order, Sunday first.
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Builds the grid for the month containing `view_month`.
    pub fn for_month(view_month: NaiveDate, bounds: DateBounds) -> Self {
        let month = month_start(view_month);
        let lead = u64::from(month.weekday().num_days_from_sunday());
        let start = month
            .checked_sub_days(chrono::Days::new(lead))
            .unwrap_or(month);
        let cells = start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| CalendarCell {
                date,
                muted: date.year() != month.year() || date.month() != month.month(),
                disabled: !bounds.contains(date),
            })
            .collect();
        Self { month, cells }
    }

    /// Cells grouped by week.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
}

/// Classes of one day button. Selection wins over the today ring; disabled days never highlight.
pub fn day_cell_classes(cell: &CalendarCell, selected: bool, today: bool) -> ClassList {
    let mut classes = ClassList::new();
    classes.push("h-8 w-8 rounded-full text-sm flex items-center justify-center");
    if cell.disabled {
        classes.push("text-gray-300 cursor-not-allowed");
        return classes;
    }
    classes
        .push_if(selected, "bg-primary-600 text-white")
        .push_if(!selected && cell.muted, "text-gray-400 hover:bg-gray-100")
        .push_if(!selected && !cell.muted, "text-gray-900 hover:bg-gray-100")
        .push_if(today && !selected, "ring-1 ring-primary-600");
    classes
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Per-instance DatePicker state.
pub struct DatePickerState {
    /// First day of the displayed month.
    pub view_month: NaiveDate,
    /// Chosen date, if any.
    pub selected: Option<NaiveDate>,
    /// Whether the popover is showing.
    pub open: bool,
}

impl DatePickerState {
    /// Opens on the month of `selected`, or of `today` when nothing is chosen.
    pub fn new(selected: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            view_month: month_start(selected.unwrap_or(today)),
            selected,
            open: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_date_picker`].
pub enum DatePickerEvent {
    /// Trigger clicked.
    Toggle,
    /// Force the popover open.
    Open,
    /// Outside click or Escape.
    Close,
    /// Day cell clicked.
    Select(NaiveDate),
    /// Clear button clicked.
    Clear,
    /// Previous-month arrow.
    PrevMonth,
    /// Next-month arrow.
    NextMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Reported when the chosen date changed.
pub struct DateChange {
    /// New selection; `None` after clearing.
    pub selected: Option<NaiveDate>,
}

/// Applies `event` and reports a selection change, if one happened.
pub fn reduce_date_picker(
    state: &mut DatePickerState,
    event: DatePickerEvent,
    bounds: &DateBounds,
    disabled: bool,
) -> Option<DateChange> {
    if disabled {
        return None;
    }
    match event {
        DatePickerEvent::Toggle => {
            state.open = !state.open;
            if state.open {
                if let Some(selected) = state.selected {
                    state.view_month = month_start(selected);
                }
            }
            None
        }
        DatePickerEvent::Open => {
            state.open = true;
            None
        }
        DatePickerEvent::Close => {
            state.open = false;
            None
        }
        DatePickerEvent::Select(date) => {
            if !bounds.contains(date) {
                return None;
            }
            state.view_month = month_start(date);
            state.open = false;
            if state.selected == Some(date) {
                return None;
            }
            state.selected = Some(date);
            Some(DateChange {
                selected: Some(date),
            })
        }
        DatePickerEvent::Clear => state.selected.take().map(|_| DateChange { selected: None }),
        DatePickerEvent::PrevMonth => {
            state.view_month = month_start(add_months(state.view_month, -1));
            None
        }
        DatePickerEvent::NextMonth => {
            state.view_month = month_start(add_months(state.view_month, 1));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn every_grid_has_42_cells_starting_on_sunday() {
        for year in 2019..=2030 {
            for month in 1..=12 {
                let grid = CalendarGrid::for_month(date(year, month, 15), DateBounds::default());
                assert_eq!(grid.cells.len(), GRID_CELLS);
                assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun);
                assert!(grid.cells[0].date <= date(year, month, 1));
                assert_eq!(grid.weeks().count(), 6);
            }
        }
    }

    #[test]
    fn cells_outside_the_month_are_muted() {
        // March 2024 starts on a Friday.
        let grid = CalendarGrid::for_month(date(2024, 3, 1), DateBounds::default());
        assert_eq!(grid.cells[0].date, date(2024, 2, 25));
        assert!(grid.cells[0].muted);
        assert!(!grid.cells[5].muted);
        assert_eq!(grid.cells[5].date, date(2024, 3, 1));
        let in_month = grid.cells.iter().filter(|cell| !cell.muted).count();
        assert_eq!(in_month, 31);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_days() {
        // September 2024 starts on a Sunday.
        let grid = CalendarGrid::for_month(date(2024, 9, 30), DateBounds::default());
        assert_eq!(grid.cells[0].date, date(2024, 9, 1));
        assert!(!grid.cells[0].muted);
    }

    #[test]
    fn bounds_disable_cells_strictly_outside() {
        let bounds = DateBounds::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
        let grid = CalendarGrid::for_month(date(2024, 3, 1), bounds);
        let find = |day| {
            grid.cells
                .iter()
                .find(|cell| cell.date == date(2024, 3, day))
                .expect("cell")
        };
        assert!(find(9).disabled);
        assert!(!find(10).disabled);
        assert!(!find(20).disabled);
        assert!(find(21).disabled);
    }

    #[test]
    fn selecting_out_of_bounds_leaves_state_unchanged() {
        let bounds = DateBounds::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 20)));
        let mut state = DatePickerState::new(None, date(2024, 3, 15));
        state.open = true;
        let before = state;
        for day in [date(2024, 3, 9), date(2024, 3, 21)] {
            assert_eq!(
                reduce_date_picker(&mut state, DatePickerEvent::Select(day), &bounds, false),
                None
            );
            assert_eq!(state, before);
        }
    }

    #[test]
    fn selecting_moves_view_and_closes() {
        let mut state = DatePickerState::new(None, date(2024, 3, 15));
        reduce_date_picker(&mut state, DatePickerEvent::Toggle, &DateBounds::default(), false);
        let change = reduce_date_picker(
            &mut state,
            DatePickerEvent::Select(date(2024, 4, 2)),
            &DateBounds::default(),
            false,
        );
        assert_eq!(change, Some(DateChange { selected: Some(date(2024, 4, 2)) }));
        assert_eq!(state.view_month, date(2024, 4, 1));
        assert!(!state.open);
    }

    #[test]
    fn paging_wraps_years_and_clear_reports_once() {
        let bounds = DateBounds::default();
        let mut state = DatePickerState::new(Some(date(2024, 1, 31)), date(2020, 6, 1));
        assert_eq!(state.view_month, date(2024, 1, 1));
        reduce_date_picker(&mut state, DatePickerEvent::PrevMonth, &bounds, false);
        assert_eq!(state.view_month, date(2023, 12, 1));
        reduce_date_picker(&mut state, DatePickerEvent::NextMonth, &bounds, false);
        reduce_date_picker(&mut state, DatePickerEvent::NextMonth, &bounds, false);
        assert_eq!(state.view_month, date(2024, 2, 1));

        assert_eq!(
            reduce_date_picker(&mut state, DatePickerEvent::Clear, &bounds, false),
            Some(DateChange { selected: None })
        );
        assert_eq!(reduce_date_picker(&mut state, DatePickerEvent::Clear, &bounds, false), None);
    }

    #[test]
    fn disabled_picker_ignores_events() {
        let mut state = DatePickerState::new(None, date(2024, 3, 15));
        let before = state;
        reduce_date_picker(&mut state, DatePickerEvent::Toggle, &DateBounds::default(), true);
        reduce_date_picker(
            &mut state,
            DatePickerEvent::Select(date(2024, 3, 3)),
            &DateBounds::default(),
            true,
        );
        assert_eq!(state, before);
    }

    #[test]
    fn iso_helpers_and_titles() {
        assert_eq!(parse_iso_date(" 2024-03-05 "), Some(date(2024, 3, 5)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("03/05/2024"), None);
        assert_eq!(format_iso_date(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(month_title(date(2024, 3, 5)), "March 2024");
        assert_eq!(display_date(date(2024, 3, 5)), "Mar 5, 2024");
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
    }

    #[test]
    fn day_classes_follow_cell_flags() {
        let cell = CalendarCell {
            date: date(2024, 3, 5),
            muted: false,
            disabled: false,
        };
        let selected = day_cell_classes(&cell, true, true);
        assert!(selected.contains("bg-primary-600"));
        assert!(!selected.contains("ring-1"));

        let today = day_cell_classes(&cell, false, true);
        assert!(today.contains("ring-1"));
        assert!(today.contains("text-gray-900"));

        let muted = day_cell_classes(&CalendarCell { muted: true, ..cell }, false, false);
        assert!(muted.contains("text-gray-400"));

        let disabled = day_cell_classes(&CalendarCell { disabled: true, ..cell }, true, false);
        assert!(disabled.contains("cursor-not-allowed"));
        assert!(!disabled.contains("bg-primary-600"));
    }
}
