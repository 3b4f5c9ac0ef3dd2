//! Sample data compiled into the binary.

use std::collections::HashSet;

use anyhow::{bail, ensure, Context};
use serde::de::DeserializeOwned;

use crate::fitness::{ExerciseData, ProfileData, ProgressData, WorkoutData};
use crate::models::{JobData, JobPosting};

const JOBS: &str = include_str!("../data/jobs.json");
const EXERCISES: &str = include_str!("../data/exercises.json");
const WORKOUTS: &str = include_str!("../data/workouts.json");
const PROFILE: &str = include_str!("../data/profile.json");
const PROGRESS: &str = include_str!("../data/progress.json");

#[derive(Debug)]
pub struct Catalog {
    pub jobs: Vec<JobPosting>,
    pub exercises: ExerciseData,
    pub workouts: WorkoutData,
    pub profile: ProfileData,
    pub progress: ProgressData,
}

impl Catalog {
    pub fn embedded() -> anyhow::Result<Self> {
        let jobs: JobData = parse("jobs.json", JOBS)?;
        let catalog = Self {
            jobs: jobs.entries,
            exercises: parse("exercises.json", EXERCISES)?,
            workouts: parse("workouts.json", WORKOUTS)?,
            profile: parse("profile.json", PROFILE)?,
            progress: parse("progress.json", PROGRESS)?,
        };
        catalog.validate()?;
        tracing::debug!(
            jobs = catalog.jobs.len(),
            exercises = catalog.exercises.entries.len(),
            templates = catalog.workouts.templates.len(),
            "sample data loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        unique_ids("job", self.jobs.iter().map(|j| j.id.as_str()))?;
        for job in &self.jobs {
            require_text(
                "job",
                &job.id,
                &[
                    ("title", &job.title),
                    ("company", &job.company),
                    ("location", &job.location),
                    ("employment_type", &job.employment_type),
                    ("description", &job.description),
                    ("source", &job.source),
                    ("posted", &job.posted),
                    ("apply_url", &job.apply_url),
                ],
            )?;
        }

        unique_ids(
            "exercise",
            self.exercises.entries.iter().map(|e| e.id.as_str()),
        )?;
        for exercise in &self.exercises.entries {
            require_text(
                "exercise",
                &exercise.id,
                &[
                    ("name", &exercise.name),
                    ("category", &exercise.category),
                    ("difficulty", &exercise.difficulty),
                    ("equipment", &exercise.equipment),
                    ("instructions", &exercise.instructions),
                ],
            )?;
            ensure!(
                !exercise.muscle_groups.is_empty(),
                "exercise {} targets no muscle groups",
                exercise.id
            );
        }

        unique_ids(
            "workout template",
            self.workouts.templates.iter().map(|t| t.id.as_str()),
        )?;
        for plan in &self.workouts.templates {
            require_text(
                "workout template",
                &plan.id,
                &[
                    ("name", &plan.name),
                    ("category", &plan.category),
                    ("difficulty", &plan.difficulty),
                    ("description", &plan.description),
                ],
            )?;
        }

        unique_ids(
            "recent workout",
            self.workouts.recent.iter().map(|w| w.id.as_str()),
        )?;
        for workout in &self.workouts.recent {
            require_text(
                "recent workout",
                &workout.id,
                &[("name", &workout.name), ("date", &workout.date)],
            )?;
        }

        unique_ids(
            "achievement",
            self.profile.achievements.iter().map(|a| a.id.as_str()),
        )?;
        for achievement in &self.profile.achievements {
            require_text(
                "achievement",
                &achievement.id,
                &[
                    ("title", &achievement.title),
                    ("description", &achievement.description),
                    ("icon", &achievement.icon),
                ],
            )?;
        }

        unique_ids("goal", self.progress.goals.iter().map(|g| g.id.as_str()))?;
        for goal in &self.progress.goals {
            require_text(
                "goal",
                &goal.id,
                &[
                    ("title", &goal.title),
                    ("unit", &goal.unit),
                    ("deadline", &goal.deadline),
                ],
            )?;
        }

        unique_ids(
            "personal record",
            self.progress.personal_records.iter().map(|r| r.id.as_str()),
        )?;
        for record in &self.progress.personal_records {
            require_text(
                "personal record",
                &record.id,
                &[
                    ("exercise", &record.exercise),
                    ("unit", &record.unit),
                    ("date", &record.date),
                ],
            )?;
        }
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<T> {
    serde_json::from_str(raw).with_context(|| format!("parsing embedded {name}"))
}

fn unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            bail!("{kind} with an empty id");
        }
        if !seen.insert(id) {
            bail!("duplicate {kind} id {id:?}");
        }
    }
    Ok(())
}

fn require_text(kind: &str, id: &str, fields: &[(&str, &String)]) -> anyhow::Result<()> {
    for (field, value) in fields {
        ensure!(!value.trim().is_empty(), "{kind} {id} has an empty {field}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_data_is_valid() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.jobs.len(), 6);
        assert_eq!(catalog.exercises.entries.len(), 6);
        assert_eq!(catalog.workouts.templates.len(), 4);
        assert_eq!(catalog.workouts.recent.len(), 2);
        assert_eq!(catalog.profile.achievements.len(), 6);
        assert_eq!(catalog.progress.goals.len(), 4);
        assert_eq!(catalog.progress.history.len(), 7);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = unique_ids("job", ["1", "2", "1"].into_iter()).unwrap_err();
        assert!(err.to_string().contains("duplicate job id"));
        assert!(unique_ids("job", ["", "2"].into_iter()).is_err());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut catalog = Catalog::embedded().unwrap();
        catalog.jobs[0].description = "  ".into();
        let err = catalog.validate().unwrap_err();
        assert_eq!(err.to_string(), "job 1 has an empty description");

        let mut catalog = Catalog::embedded().unwrap();
        catalog.progress.goals[1].title.clear();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("has an empty title"));

        let mut catalog = Catalog::embedded().unwrap();
        catalog.exercises.entries[2].muscle_groups.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn malformed_documents_name_the_file() {
        let err = parse::<JobData>("jobs.json", "{\"entries\": 3}").unwrap_err();
        assert!(err.to_string().contains("jobs.json"));
    }
}
