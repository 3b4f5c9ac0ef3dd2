//! Predicate composition over the fixed sample lists.
//!
//! Every page narrows a constant slice with a linear scan: a free-text
//! needle tested case-insensitively against two or three fields, plus
//! exact-match selects where `all` admits everything.

use crate::fitness::{Exercise, WorkoutTemplate};
use crate::models::JobPosting;

/// Something that decides whether an item belongs in a filtered view.
pub trait Criteria<T> {
    fn admits(&self, item: &T) -> bool;
}

/// Keeps the admitted items in source order.
pub fn apply<'a, T, C>(items: &'a [T], criteria: &C) -> Vec<&'a T>
where
    C: Criteria<T>,
{
    items.iter().filter(|item| criteria.admits(item)).collect()
}

/// Case-insensitive substring test. A blank needle matches everything.
///
/// The needle is trimmed first, so a whitespace-only query acts like an
/// empty one instead of matching nothing.
pub fn text_matches(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Value of a select control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        match self {
            Selection::All => value == "all",
            Selection::Only(wanted) => wanted == value,
        }
    }
}

/// Coarse salary buckets offered by the job search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SalaryBand {
    #[default]
    Any,
    UpTo50k,
    From50kTo100k,
    From100kTo150k,
    Over150k,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 5] = [
        SalaryBand::Any,
        SalaryBand::UpTo50k,
        SalaryBand::From50kTo100k,
        SalaryBand::From100kTo150k,
        SalaryBand::Over150k,
    ];

    /// Unknown values fall back to `Any`.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|band| band.value() == raw)
            .unwrap_or_default()
    }

    pub fn value(self) -> &'static str {
        match self {
            SalaryBand::Any => "any",
            SalaryBand::UpTo50k => "0-50k",
            SalaryBand::From50kTo100k => "50k-100k",
            SalaryBand::From100kTo150k => "100k-150k",
            SalaryBand::Over150k => "150k+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryBand::Any => "Any Salary",
            SalaryBand::UpTo50k => "$0 - $50k",
            SalaryBand::From50kTo100k => "$50k - $100k",
            SalaryBand::From100kTo150k => "$100k - $150k",
            SalaryBand::Over150k => "$150k+",
        }
    }

    /// Half-open dollar bounds, `None` for `Any`.
    fn bounds(self) -> Option<(u32, u32)> {
        match self {
            SalaryBand::Any => None,
            SalaryBand::UpTo50k => Some((0, 50_000)),
            SalaryBand::From50kTo100k => Some((50_000, 100_000)),
            SalaryBand::From100kTo150k => Some((100_000, 150_000)),
            SalaryBand::Over150k => Some((150_000, u32::MAX)),
        }
    }

    pub fn admits(self, job: &JobPosting) -> bool {
        let Some((low, high)) = self.bounds() else {
            return true;
        };
        match job.salary_range() {
            Some(range) => range.max >= low && range.min < high,
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub text: String,
    pub location: String,
    pub job_type: Selection,
    pub salary: SalaryBand,
}

impl Criteria<JobPosting> for JobQuery {
    fn admits(&self, job: &JobPosting) -> bool {
        (text_matches(&job.title, &self.text) || text_matches(&job.company, &self.text))
            && text_matches(&job.location, &self.location)
            && self.job_type.admits(&job.employment_type)
            && self.salary.admits(job)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExerciseQuery {
    pub text: String,
    pub category: Selection,
    pub difficulty: Selection,
}

impl Criteria<Exercise> for ExerciseQuery {
    fn admits(&self, exercise: &Exercise) -> bool {
        let text = text_matches(&exercise.name, &self.text)
            || exercise
                .muscle_groups
                .iter()
                .any(|muscle| text_matches(muscle, &self.text));
        text && self.category.admits(&exercise.category)
            && self.difficulty.admits(&exercise.difficulty)
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkoutQuery {
    pub text: String,
    pub category: Selection,
}

impl Criteria<WorkoutTemplate> for WorkoutQuery {
    fn admits(&self, template: &WorkoutTemplate) -> bool {
        (text_matches(&template.name, &self.text)
            || text_matches(&template.description, &self.text))
            && self.category.admits(&template.category)
    }
}
