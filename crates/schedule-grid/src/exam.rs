//! Exam sittings: a flat, date-sorted table instead of a weekly grid.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::{lenient_records, lenient_text, Classroom, ClassroomIndex, Scalar};

/// One course's exam sitting as found in source data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExamSitting {
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_start: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_end: String,
    /// Every room the sitting is spread across. `null` ids are dropped.
    #[serde(default, deserialize_with = "room_ids")]
    pub area_id: Vec<Scalar>,
}

fn room_ids<'de, D>(deserializer: D) -> std::result::Result<Vec<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    let ids = Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?;
    Ok(ids.into_iter().flatten().flatten().collect())
}

/// Exam listing keyed by course name, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamInput {
    pub classrooms: Vec<Classroom>,
    pub exams: Vec<(String, ExamSitting)>,
}

/// Wire shape of an exam document. The JSON object keeps key order.
#[derive(Deserialize)]
struct RawExamInput {
    #[serde(default, deserialize_with = "lenient_records")]
    classrooms: Vec<Classroom>,
    #[serde(default)]
    exams: Map<String, Value>,
}

impl ExamInput {
    /// Parse an exam document from JSON.
    ///
    /// # Errors
    /// Returns `GridError::Input` on malformed JSON. A sitting that does not
    /// decode is skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawExamInput = serde_json::from_str(json)?;
        let exams = raw
            .exams
            .into_iter()
            .filter_map(|(course, value)| {
                match serde_json::from_value::<ExamSitting>(value) {
                    Ok(sitting) => Some((course, sitting)),
                    Err(err) => {
                        warn!("skipping exam sitting for '{}': {}", course, err);
                        None
                    }
                }
            })
            .collect();
        Ok(Self {
            classrooms: raw.classrooms,
            exams,
        })
    }

    /// The sitting listed for `course`.
    pub fn sitting(&self, course: &str) -> Option<&ExamSitting> {
        self.exams
            .iter()
            .find(|(name, _)| name == course)
            .map(|(_, sitting)| sitting)
    }
}

/// A row of the exam table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRow {
    pub date: String,
    /// `start - end`.
    pub time: String,
    pub course: String,
    /// Room names joined with `, `.
    pub rooms: String,
}

/// Exam rows plus the classrooms they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamTable {
    pub rows: Vec<ExamRow>,
    pub classrooms: Vec<Classroom>,
}

/// Build the exam table for the selected courses (all when `courses` is
/// empty), sorted by date then time. Rows with equal keys keep source order.
/// Selected courses without a sitting are skipped.
pub fn exam_table(input: &ExamInput, courses: &[&str]) -> ExamTable {
    let mut rooms = ClassroomIndex::new(&input.classrooms);
    let names: Vec<&str> = if courses.is_empty() {
        input.exams.iter().map(|(name, _)| name.as_str()).collect()
    } else {
        courses.to_vec()
    };

    let mut rows: Vec<ExamRow> = names
        .into_iter()
        .filter_map(|course| {
            let sitting = input.sitting(course)?;
            let room_names: Vec<String> = sitting
                .area_id
                .iter()
                .filter_map(|id| rooms.lookup(id))
                .map(Classroom::room_name)
                .collect();
            Some(ExamRow {
                date: sitting.date.clone(),
                time: format!("{} - {}", sitting.time_start, sitting.time_end),
                course: course.to_string(),
                rooms: room_names.join(", "),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

    ExamTable {
        rows,
        classrooms: rooms.into_used(),
    }
}
