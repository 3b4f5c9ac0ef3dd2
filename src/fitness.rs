//! Records behind the fitness tracker pages.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: String,
    pub difficulty: String,
    pub equipment: String,
    pub muscle_groups: Vec<String>,
    pub instructions: String,
    #[serde(default)]
    pub tip: Option<String>,
}

impl Exercise {
    pub fn category_tone(&self) -> &'static str {
        match self.category.as_str() {
            "Chest" => "blue",
            "Back" => "green",
            "Legs" => "purple",
            "Shoulders" => "orange",
            "Arms" => "pink",
            "Core" => "indigo",
            "Cardio" => "red",
            _ => "gray",
        }
    }

    pub fn difficulty_tone(&self) -> &'static str {
        difficulty_tone(&self.difficulty)
    }
}

#[derive(Debug, Deserialize)]
pub struct ExerciseData {
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
    pub entries: Vec<Exercise>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub duration: u32,
    pub exercises: u32,
    pub difficulty: String,
    pub description: String,
    pub muscle_groups: Vec<String>,
}

impl WorkoutTemplate {
    pub fn category_tone(&self) -> &'static str {
        match self.category.as_str() {
            "Strength" => "blue",
            "Cardio" => "red",
            "Core" => "purple",
            _ => "gray",
        }
    }

    pub fn difficulty_tone(&self) -> &'static str {
        difficulty_tone(&self.difficulty)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentWorkout {
    pub id: String,
    pub name: String,
    pub date: String,
    pub duration: u32,
    pub exercises: u32,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeekSummary {
    pub completed: u32,
    pub planned: u32,
    pub total_minutes: u32,
}

impl WeekSummary {
    pub fn average_minutes(&self) -> u32 {
        if self.completed == 0 {
            return 0;
        }
        self.total_minutes / self.completed
    }
}

#[derive(Debug, Deserialize)]
pub struct WorkoutData {
    pub types: Vec<String>,
    pub templates: Vec<WorkoutTemplate>,
    pub recent: Vec<RecentWorkout>,
    pub week: WeekSummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStats {
    pub total_workouts: u32,
    pub total_hours: f64,
    pub current_streak: u32,
    pub personal_records: u32,
    pub favorite_exercise: String,
    pub join_date: String,
}

impl ProfileStats {
    /// `Member since` label, e.g. `December 2023`.
    pub fn member_since(&self) -> String {
        match parse_date(&self.join_date) {
            Some(date) => date.format("%B %Y").to_string(),
            None => self.join_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub target: Option<f64>,
}

impl Achievement {
    pub fn earned_on(&self) -> &str {
        self.date.as_deref().unwrap_or("-")
    }

    pub fn progress_label(&self) -> String {
        let current = self.progress.unwrap_or(0.0);
        match self.target {
            Some(target) => format!("{current}/{target}"),
            None => current.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    pub units: Units,
    pub notifications: bool,
    pub public_profile: bool,
    pub share_workouts: bool,
}

impl Preferences {
    pub fn units_label(&self) -> &'static str {
        match self.units {
            Units::Metric => "Metric (kg)",
            Units::Imperial => "Imperial (lbs)",
        }
    }

    pub fn notifications_label(&self) -> &'static str {
        if self.notifications {
            "On"
        } else {
            "Off"
        }
    }

    pub fn visibility_label(&self) -> &'static str {
        if self.public_profile {
            "Public"
        } else {
            "Private"
        }
    }

    pub fn sharing_label(&self) -> &'static str {
        if self.share_workouts {
            "Yes"
        } else {
            "No"
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// A feed line with the color of its bullet.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityNote {
    pub text: String,
    pub tone: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileData {
    pub stats: ProfileStats,
    pub achievements: Vec<Achievement>,
    pub preferences: Preferences,
    pub quick_info: Vec<InfoRow>,
    pub recent_activity: Vec<ActivityNote>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WeeklyStats {
    pub workouts: u32,
    pub total_time: u32,
    pub avg_duration: u32,
    pub calories_burned: u32,
    pub personal_records: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalRecord {
    pub id: String,
    pub exercise: String,
    pub value: f64,
    pub unit: String,
    pub date: String,
    pub improvement: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub progress: f64,
    pub current: f64,
    pub target: f64,
    pub unit: String,
    pub deadline: String,
}

impl Goal {
    /// Progress bar fill, clamped to a valid percentage.
    pub fn bar_width(&self) -> u8 {
        self.progress.clamp(0.0, 100.0).round() as u8
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDay {
    pub date: String,
    pub workouts: u32,
    pub duration: u32,
}

impl ActivityDay {
    pub fn is_rest(&self) -> bool {
        self.workouts == 0
    }

    /// Short weekday label such as `Mon, Jan 15`.
    pub fn label(&self) -> String {
        match parse_date(&self.date) {
            Some(date) => date.format("%a, %b %-d").to_string(),
            None => self.date.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodyMeasurement {
    pub date: String,
    pub weight: f64,
    pub body_fat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
    pub tone: String,
}

#[derive(Debug, Deserialize)]
pub struct ProgressData {
    pub weekly: WeeklyStats,
    pub personal_records: Vec<PersonalRecord>,
    pub goals: Vec<Goal>,
    pub history: Vec<ActivityDay>,
    pub measurements: Vec<BodyMeasurement>,
    pub highlights: Vec<Highlight>,
}

fn difficulty_tone(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => "green",
        "Intermediate" => "yellow",
        "Advanced" => "red",
        _ => "gray",
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
