//! Curriculum identity types.
//!
//! Grades and subjects are closed enums so that a typo in an upstream
//! payload is rejected at the boundary instead of silently creating an
//! orphan subject bucket.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// School grade, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    Grade1,
    Grade2,
    Grade3,
    Grade4,
    Grade5,
    Grade6,
    Grade7,
    Grade8,
    Grade9,
    Grade10,
    Grade11,
    Grade12,
}

impl Grade {
    pub const ALL: [Grade; 12] = [
        Grade::Grade1,
        Grade::Grade2,
        Grade::Grade3,
        Grade::Grade4,
        Grade::Grade5,
        Grade::Grade6,
        Grade::Grade7,
        Grade::Grade8,
        Grade::Grade9,
        Grade::Grade10,
        Grade::Grade11,
        Grade::Grade12,
    ];

    /// Numeric grade level (1-12).
    pub fn number(&self) -> u8 {
        match self {
            Grade::Grade1 => 1,
            Grade::Grade2 => 2,
            Grade::Grade3 => 3,
            Grade::Grade4 => 4,
            Grade::Grade5 => 5,
            Grade::Grade6 => 6,
            Grade::Grade7 => 7,
            Grade::Grade8 => 8,
            Grade::Grade9 => 9,
            Grade::Grade10 => 10,
            Grade::Grade11 => 11,
            Grade::Grade12 => 12,
        }
    }

    /// Grade for a numeric level, if it is in 1..=12.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(Self::ALL[n as usize - 1])
        } else {
            None
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grade {}", self.number())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    /// Accepts "Grade 9", "grade9", "G9" and plain "9".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("grade")
            .or_else(|| lower.strip_prefix('g'))
            .unwrap_or(&lower)
            .trim();

        digits
            .parse::<u8>()
            .ok()
            .and_then(Grade::from_number)
            .ok_or_else(|| ValidationError::UnknownGrade(s.to_string()))
    }
}

impl TryFrom<String> for Grade {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.to_string()
    }
}

/// Curriculum subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Physics,
    Chemistry,
    English,
    Chinese,
    Biology,
    History,
    Geography,
    Politics,
    Science,
}

impl Subject {
    pub const ALL: [Subject; 10] = [
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::English,
        Subject::Chinese,
        Subject::Biology,
        Subject::History,
        Subject::Geography,
        Subject::Politics,
        Subject::Science,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::English => "English",
            Subject::Chinese => "Chinese",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Politics => "Politics",
            Subject::Science => "Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Subject::ALL
            .iter()
            .copied()
            .find(|subject| subject.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownSubject(s.to_string()))
    }
}

/// Identity of the smallest addressable curriculum unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTopicKey {
    pub grade: Grade,
    pub subject: Subject,
    pub topic: String,
    pub sub_topic: String,
}

impl SubTopicKey {
    pub fn new(
        grade: Grade,
        subject: Subject,
        topic: impl Into<String>,
        sub_topic: impl Into<String>,
    ) -> Self {
        Self {
            grade,
            subject,
            topic: topic.into(),
            sub_topic: sub_topic.into(),
        }
    }
}

impl fmt::Display for SubTopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.grade, self.subject, self.topic, self.sub_topic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse_variants() {
        assert_eq!("Grade 9".parse::<Grade>().unwrap(), Grade::Grade9);
        assert_eq!("grade12".parse::<Grade>().unwrap(), Grade::Grade12);
        assert_eq!("G3".parse::<Grade>().unwrap(), Grade::Grade3);
        assert_eq!(" 7 ".parse::<Grade>().unwrap(), Grade::Grade7);
    }

    #[test]
    fn test_grade_parse_rejects_out_of_range() {
        assert!("Grade 0".parse::<Grade>().is_err());
        assert!("13".parse::<Grade>().is_err());
        assert!("Kindergarten".parse::<Grade>().is_err());
    }

    #[test]
    fn test_grade_serde_uses_display_form() {
        let json = serde_json::to_string(&Grade::Grade10).unwrap();
        assert_eq!(json, "\"Grade 10\"");
        let parsed: Grade = serde_json::from_str("\"Grade 4\"").unwrap();
        assert_eq!(parsed, Grade::Grade4);
        assert!(serde_json::from_str::<Grade>("\"Grade 42\"").is_err());
    }

    #[test]
    fn test_subject_parse_case_insensitive() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("PHYSICS".parse::<Subject>().unwrap(), Subject::Physics);
        assert_eq!(
            "Maths".parse::<Subject>(),
            Err(ValidationError::UnknownSubject("Maths".to_string()))
        );
    }

    #[test]
    fn test_subtopic_key_serializes_camel_case() {
        let key = SubTopicKey::new(Grade::Grade9, Subject::Math, "Algebra", "Quadratic Equations");
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["grade"], "Grade 9");
        assert_eq!(json["subject"], "Math");
        assert_eq!(json["subTopic"], "Quadratic Equations");
    }
}
