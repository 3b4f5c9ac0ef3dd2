//! Askama page templates and the small view structs they render.

use askama::Template;

use crate::fitness::{
    Achievement, ActivityDay, ActivityNote, BodyMeasurement, Exercise, Goal, Highlight, InfoRow,
    PersonalRecord, Preferences, ProfileStats, RecentWorkout, WeekSummary, WeeklyStats,
    WorkoutTemplate,
};
use crate::filter::Selection;
use crate::models::JobPosting;

/// One `<option>` of a select control.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// `all` first, then one option per value.
    pub fn list<S: AsRef<str>>(all_label: &str, values: &[S], current: &Selection) -> Vec<Self> {
        let mut options = vec![SelectOption {
            value: "all".to_string(),
            label: all_label.to_string(),
            selected: current.is_selected("all"),
        }];
        options.extend(values.iter().map(|value| {
            let value = value.as_ref();
            SelectOption {
                value: value.to_string(),
                label: value.to_string(),
                selected: current.is_selected(value),
            }
        }));
        options
    }
}

pub struct JobCard {
    pub job: JobPosting,
    pub saved: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub heading: &'static str,
    pub message: String,
}

#[derive(Template)]
#[template(path = "jobs/index.html")]
pub struct JobsPage {
    pub title: &'static str,
    pub saved_count: usize,
    pub search: String,
    pub location: String,
    pub type_options: Vec<SelectOption>,
    pub salary_options: Vec<SelectOption>,
    pub jobs: Vec<JobCard>,
    /// Where save toggles return to, so filters survive the round trip.
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "jobs/saved.html")]
pub struct SavedJobsPage {
    pub title: &'static str,
    pub saved_count: usize,
    pub jobs: Vec<JobCard>,
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "jobs/detail.html")]
pub struct JobDetailPage {
    pub title: &'static str,
    pub saved_count: usize,
    pub job: JobPosting,
    pub saved: bool,
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "fitness/exercises.html")]
pub struct ExercisesPage {
    pub title: &'static str,
    pub active: &'static str,
    pub search: String,
    pub category_options: Vec<SelectOption>,
    pub difficulty_options: Vec<SelectOption>,
    pub exercises: Vec<Exercise>,
}

#[derive(Template)]
#[template(path = "fitness/workouts.html")]
pub struct WorkoutsPage {
    pub title: &'static str,
    pub active: &'static str,
    pub search: String,
    pub type_options: Vec<SelectOption>,
    pub templates: Vec<WorkoutTemplate>,
    pub recent: Vec<RecentWorkout>,
    pub week: WeekSummary,
}

#[derive(Template)]
#[template(path = "fitness/profile.html")]
pub struct ProfilePage {
    pub title: &'static str,
    pub active: &'static str,
    pub name: String,
    pub email: Option<String>,
    pub initial: char,
    pub member_since: String,
    pub stats: ProfileStats,
    pub achievements: Vec<Achievement>,
    pub preferences: Preferences,
    pub quick_info: Vec<InfoRow>,
    pub recent_activity: Vec<ActivityNote>,
}

/// A tab header on the progress page.
pub struct TabLink {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "fitness/progress.html")]
pub struct ProgressPage {
    pub title: &'static str,
    pub active: &'static str,
    pub tab: &'static str,
    pub tabs: Vec<TabLink>,
    pub weekly: WeeklyStats,
    pub history: Vec<ActivityDay>,
    pub highlights: Vec<Highlight>,
    pub goals: Vec<Goal>,
    pub records: Vec<PersonalRecord>,
    pub measurements: Vec<BodyMeasurement>,
}
