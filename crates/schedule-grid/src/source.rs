//! Source records for a timetable request: lessons and classrooms.
//!
//! Source data comes from scraped JSON where ids and weekdays may be numbers
//! or strings and times are `HH:MM` text. This module normalizes those
//! records into grid placements.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::GridBuilder;
use crate::layout::Layout;

/// Room text used when a lesson has no resolvable classroom.
pub const UNKNOWN_ROOM: &str = "Unknown";

/// A value that source data writes either as a number or as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(i64),
    Text(String),
}

impl Scalar {
    /// Comparison key: numbers and numeric strings compare equal.
    pub fn key(&self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s.trim().to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Decode a list one record at a time. Records that do not fit `T` are
/// skipped with a warning instead of failing the whole document; a `null`
/// list is empty.
pub(crate) fn lenient_records<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("skipping malformed record #{}: {}", index, err);
                None
            }
        })
        .collect())
}

/// Text field that may be missing, `null`, a string or a number.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(|value| value.to_string())
        .unwrap_or_default())
}

/// Day of a lesson: a weekday number (1 = Monday) or a day name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayRef {
    Number(i64),
    Name(String),
}

impl DayRef {
    /// Resolve to a column header. Numbers (and numeric strings) go through
    /// the configured weekday names; anything unmapped is used verbatim.
    pub fn resolve(&self, config: &GridConfig) -> String {
        let number = match self {
            DayRef::Number(n) => Some(*n),
            DayRef::Name(name) => name.trim().parse().ok(),
        };
        if let Some(name) = number.and_then(|n| config.weekday_name(n)) {
            return name.to_string();
        }
        match self {
            DayRef::Number(n) => n.to_string(),
            DayRef::Name(name) => name.trim().to_string(),
        }
    }
}

/// A room lessons and exams take place in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: Scalar,
    #[serde(default)]
    pub building: Option<Scalar>,
    #[serde(default)]
    pub code: Option<Scalar>,
    #[serde(default)]
    pub floor: Option<Scalar>,
    #[serde(default)]
    pub campus: Option<Scalar>,
}

fn or_empty(value: &Option<Scalar>) -> String {
    value.as_ref().map(Scalar::to_string).unwrap_or_default()
}

fn or_dash(value: &Option<Scalar>) -> String {
    value
        .as_ref()
        .map(Scalar::to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

impl Classroom {
    /// Short room name, `building.code`.
    pub fn room_name(&self) -> String {
        format!("{}.{}", or_empty(&self.building), or_empty(&self.code))
    }

    /// Human-readable location line for the classroom side table.
    pub fn details(&self) -> String {
        format!(
            "Κτίριο {}, {}, Αίθουσα {}, Παν/πόλη {}",
            or_dash(&self.building),
            or_dash(&self.floor),
            self.room_name(),
            or_dash(&self.campus)
        )
    }

    /// Building then code, ignoring case first so `b` sorts before `C`.
    fn sort_key(&self) -> (String, String) {
        let key = format!("{}{}", or_empty(&self.building), or_empty(&self.code));
        (key.to_lowercase(), key)
    }
}

/// Resolves classroom ids and remembers which rooms were referenced.
pub(crate) struct ClassroomIndex<'a> {
    classrooms: &'a [Classroom],
    used: Vec<&'a Classroom>,
}

impl<'a> ClassroomIndex<'a> {
    pub(crate) fn new(classrooms: &'a [Classroom]) -> Self {
        Self {
            classrooms,
            used: Vec::new(),
        }
    }

    pub(crate) fn lookup(&mut self, id: &Scalar) -> Option<&'a Classroom> {
        let key = id.key();
        let found = self.classrooms.iter().find(|c| c.id.key() == key)?;
        if !self.used.iter().any(|u| std::ptr::eq(*u, found)) {
            self.used.push(found);
        }
        Some(found)
    }

    /// Referenced classrooms sorted by building then code.
    pub(crate) fn into_used(self) -> Vec<Classroom> {
        let mut used: Vec<Classroom> = self.used.into_iter().cloned().collect();
        used.sort_by_key(Classroom::sort_key);
        used
    }
}

/// One weekly lesson as found in source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub course: String,
    #[serde(default)]
    pub professor: Option<String>,
    pub day: DayRef,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_start: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time_end: String,
    #[serde(default)]
    pub area_id: Option<Scalar>,
}

impl Lesson {
    /// Cell payload: course, professor and room on separate lines.
    pub fn payload(&self, room: &str) -> String {
        format!(
            "{}\n{}\n{}",
            self.course,
            self.professor.as_deref().unwrap_or(""),
            room
        )
    }

    pub fn start_hour(&self) -> Option<u32> {
        parse_hour(&self.time_start)
    }

    /// Length in whole hours, never less than one.
    pub fn duration_hours(&self) -> u32 {
        match (self.start_hour(), parse_hour(&self.time_end)) {
            (Some(start), Some(end)) if end > start => end - start,
            _ => 1,
        }
    }
}

/// Extract the hour from `HH:MM`, `HH:MM:SS` or a bare hour number.
///
/// ```
/// use schedule_grid::source::parse_hour;
///
/// assert_eq!(parse_hour("09:00"), Some(9));
/// assert_eq!(parse_hour("14:30:00"), Some(14));
/// assert_eq!(parse_hour("17"), Some(17));
/// assert_eq!(parse_hour("noon"), None);
/// ```
pub fn parse_hour(text: &str) -> Option<u32> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .map(|t| t.hour())
        .ok()
        .or_else(|| text.parse().ok())
}

/// Everything needed to lay out one lesson timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    #[serde(default)]
    pub config: GridConfig,
    #[serde(default, deserialize_with = "lenient_records")]
    pub classrooms: Vec<Classroom>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub lessons: Vec<Lesson>,
}

impl ScheduleInput {
    /// Parse an input document from JSON.
    ///
    /// # Errors
    /// Returns `GridError::Input` when the JSON is malformed or the document
    /// itself has the wrong shape. Individual bad lessons or classrooms are
    /// skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A finished lesson timetable and the classrooms it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(flatten)]
    pub layout: Layout,
    pub classrooms: Vec<Classroom>,
}

/// Whether `course` passes a course filter. An empty filter passes all.
pub(crate) fn selected(courses: &[&str], course: &str) -> bool {
    courses.is_empty() || courses.contains(&course)
}

/// Lay out the lessons of `input` whose course is in `courses` (all lessons
/// when `courses` is empty), in input order.
///
/// Lessons with an unknown day or an unparseable start hour are skipped
/// with a warning; collisions become overflow columns and conflicts.
///
/// # Errors
/// Returns the config validation error when `input.config` is invalid.
pub fn generate_schedule(input: &ScheduleInput, courses: &[&str]) -> Result<Schedule> {
    let mut builder = GridBuilder::new(input.config.clone())?;
    let mut rooms = ClassroomIndex::new(&input.classrooms);

    for lesson in input.lessons.iter().filter(|l| selected(courses, &l.course)) {
        let room = lesson
            .area_id
            .as_ref()
            .and_then(|id| rooms.lookup(id))
            .map_or_else(|| UNKNOWN_ROOM.to_string(), Classroom::room_name);

        let Some(start_hour) = lesson.start_hour() else {
            warn!(
                "unreadable start time '{}' for '{}', skipping",
                lesson.time_start, lesson.course
            );
            continue;
        };
        let day = lesson.day.resolve(builder.config());
        builder.place(&lesson.payload(&room), &day, start_hour, lesson.duration_hours());
    }

    Ok(Schedule {
        layout: builder.finish(),
        classrooms: rooms.into_used(),
    })
}
