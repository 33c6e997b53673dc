//! Feature-bucketing transforms for the feature-engineering visualization
//!
//! Raw values become coarse, human-readable categories: exact ages into age
//! groups, incomes into brackets, dates into seasons.

use crate::errors::{DemoError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse age category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AgeGroup {
    YoungAdult,
    Adult,
    MiddleAge,
    Senior,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::YoungAdult => write!(f, "Young Adult"),
            AgeGroup::Adult => write!(f, "Adult"),
            AgeGroup::MiddleAge => write!(f, "Middle Age"),
            AgeGroup::Senior => write!(f, "Senior"),
        }
    }
}

pub fn age_group(age: u32) -> AgeGroup {
    match age {
        0..=29 => AgeGroup::YoungAdult,
        30..=44 => AgeGroup::Adult,
        45..=59 => AgeGroup::MiddleAge,
        _ => AgeGroup::Senior,
    }
}

/// Coarse income category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeBracket {
    Low,
    Medium,
    High,
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncomeBracket::Low => write!(f, "Low"),
            IncomeBracket::Medium => write!(f, "Medium"),
            IncomeBracket::High => write!(f, "High"),
        }
    }
}

pub fn income_bracket(income: u32) -> IncomeBracket {
    if income < 50_000 {
        IncomeBracket::Low
    } else if income < 100_000 {
        IncomeBracket::Medium
    } else {
        IncomeBracket::High
    }
}

/// Meteorological season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Winter => write!(f, "Winter"),
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Autumn => write!(f, "Autumn"),
        }
    }
}

pub fn season(date: NaiveDate) -> Season {
    match date.month() {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Autumn,
    }
}

/// Parse an ISO `YYYY-MM-DD` date and bucket it into a season
pub fn season_of(text: &str) -> Result<Season> {
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|err| DemoError::InvalidDate(err.to_string()))?;
    Ok(season(date))
}
