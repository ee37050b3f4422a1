use crate::prelude::{GenerationError, GenerationResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

fn month_start(year: i32, month: u32) -> GenerationResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(GenerationError::InvalidYear(year))
}

/// Returns `[start, end)` for the given month, rolling December into the next year.
pub fn month_bounds(year: i32, month: u32) -> GenerationResult<(NaiveDateTime, NaiveDateTime)> {
    if !(1..=12).contains(&month) {
        return Err(GenerationError::InvalidMonth(month));
    }
    let start = month_start(year, month)?;
    let end = if month == 12 {
        let next_year = year
            .checked_add(1)
            .ok_or(GenerationError::InvalidYear(year))?;
        month_start(next_year, 1)?
    } else {
        month_start(year, month + 1)?
    };
    Ok((start, end))
}

pub fn seconds_in_month(year: i32, month: u32) -> GenerationResult<i64> {
    let (start, end) = month_bounds(year, month)?;
    Ok((end - start).num_seconds())
}

/// Picks a whole-second instant uniformly from the month.
pub fn sample_instant<R: Rng + ?Sized>(
    rng: &mut R,
    year: i32,
    month: u32,
) -> GenerationResult<NaiveDateTime> {
    let (start, end) = month_bounds(year, month)?;
    let total = (end - start).num_seconds();
    let offset = rng.gen_range(0..total);
    Ok(start + Duration::seconds(offset))
}
