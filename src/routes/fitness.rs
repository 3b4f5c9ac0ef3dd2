use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    filter::{self, ExerciseQuery, Selection, WorkoutQuery},
    session,
    views::{ExercisesPage, ProfilePage, ProgressPage, SelectOption, TabLink, WorkoutsPage},
    AppState,
};

const TITLE: &str = "FitTrack";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fitness", get(|| async { Redirect::to("/fitness/exercises") }))
        .route("/fitness/exercises", get(exercises))
        .route("/fitness/workouts", get(workouts))
        .route("/fitness/profile", get(profile))
        .route("/fitness/logout", post(logout))
        .route("/fitness/progress", get(progress))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExerciseParams {
    pub q: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

async fn exercises(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExerciseParams>,
) -> ExercisesPage {
    let library = &state.fitness.exercises;
    let query = ExerciseQuery {
        text: params.q.clone(),
        category: Selection::parse(params.category.as_deref()),
        difficulty: Selection::parse(params.difficulty.as_deref()),
    };
    let exercises = filter::apply(&library.entries, &query)
        .into_iter()
        .cloned()
        .collect();

    ExercisesPage {
        title: TITLE,
        active: "exercises",
        category_options: SelectOption::list(
            "All Categories",
            &library.categories,
            &query.category,
        ),
        difficulty_options: SelectOption::list(
            "All Levels",
            &library.difficulties,
            &query.difficulty,
        ),
        exercises,
        search: params.q,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkoutParams {
    pub q: String,
    #[serde(rename = "type")]
    pub category: Option<String>,
}

async fn workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WorkoutParams>,
) -> WorkoutsPage {
    let data = &state.fitness.workouts;
    let query = WorkoutQuery {
        text: params.q.clone(),
        category: Selection::parse(params.category.as_deref()),
    };
    let templates = filter::apply(&data.templates, &query)
        .into_iter()
        .cloned()
        .collect();

    WorkoutsPage {
        title: TITLE,
        active: "workouts",
        type_options: SelectOption::list("All Types", &data.types, &query.category),
        templates,
        recent: data.recent.clone(),
        week: data.week,
        search: params.q,
    }
}

async fn profile(State(state): State<Arc<AppState>>) -> ProfilePage {
    let user = state.fitness.session.current_user();
    let profile = &state.fitness.profile;
    ProfilePage {
        title: TITLE,
        active: "profile",
        name: session::display_name(user.as_ref()),
        initial: session::avatar_initial(user.as_ref()),
        email: user.map(|u| u.email),
        member_since: profile.stats.member_since(),
        stats: profile.stats.clone(),
        achievements: profile.achievements.clone(),
        preferences: profile.preferences.clone(),
        quick_info: profile.quick_info.clone(),
        recent_activity: profile.recent_activity.clone(),
    }
}

async fn logout(State(state): State<Arc<AppState>>) -> Redirect {
    state.fitness.session.logout();
    Redirect::to("/fitness/profile")
}

/// Tabs of the progress page, first one is the default.
const TABS: [(&str, &str); 4] = [
    ("overview", "Overview"),
    ("goals", "Goals"),
    ("records", "Records"),
    ("body", "Body Stats"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProgressParams {
    pub tab: Option<String>,
}

fn resolve_tab(requested: Option<&str>) -> &'static str {
    TABS.iter()
        .map(|(value, _)| *value)
        .find(|value| Some(*value) == requested)
        .unwrap_or(TABS[0].0)
}

async fn progress(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProgressParams>,
) -> ProgressPage {
    let data = &state.fitness.progress;
    let tab = resolve_tab(params.tab.as_deref());
    ProgressPage {
        title: TITLE,
        active: "progress",
        tab,
        tabs: TABS
            .iter()
            .map(|&(value, label)| TabLink {
                value,
                label,
                active: value == tab,
            })
            .collect(),
        weekly: data.weekly,
        history: data.history.clone(),
        highlights: data.highlights.clone(),
        goals: data.goals.clone(),
        records: data.personal_records.clone(),
        measurements: data.measurements.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tabs_fall_back_to_overview() {
        assert_eq!(resolve_tab(None), "overview");
        assert_eq!(resolve_tab(Some("records")), "records");
        assert_eq!(resolve_tab(Some("settings")), "overview");
    }
}
