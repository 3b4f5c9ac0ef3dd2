use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub employment_type: String,
    pub description: String,
    pub source: String,
    pub posted: String,
    pub apply_url: String,
}

#[derive(Debug, Deserialize)]
pub struct JobData {
    pub entries: Vec<JobPosting>,
}

impl JobPosting {
    pub fn salary_range(&self) -> Option<SalaryRange> {
        self.salary.as_deref().and_then(SalaryRange::parse)
    }

    /// Badge color for the board the posting was scraped from.
    pub fn source_tone(&self) -> &'static str {
        match self.source.as_str() {
            "LinkedIn" => "blue",
            "Indeed" => "green",
            "Glassdoor" => "purple",
            "AngelList" => "orange",
            "ZipRecruiter" => "red",
            "Monster" => "indigo",
            _ => "gray",
        }
    }
}

/// Yearly salary bounds in dollars, parsed from labels like `$120k - $160k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn parse(label: &str) -> Option<Self> {
        let mut bounds = label.split('-').map(parse_amount);
        let min = bounds.next()??;
        let max = match bounds.next() {
            Some(bound) => bound?,
            None => min,
        };
        if bounds.next().is_some() || max < min {
            return None;
        }
        Some(Self { min, max })
    }
}

fn parse_amount(raw: &str) -> Option<u32> {
    let raw = raw.trim().trim_start_matches('$').trim();
    let (digits, scale) = match raw.strip_suffix('k').or_else(|| raw.strip_suffix('K')) {
        Some(digits) => (digits, 1_000),
        None => (raw, 1),
    };
    let digits: String = digits.chars().filter(|c| *c != ',').collect();
    digits.trim().parse::<u32>().ok()?.checked_mul(scale)
}
