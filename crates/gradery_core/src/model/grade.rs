//! Grade records, word-grade buckets and certificate capability.
//!
//! # Responsibility
//! - Define the canonical grade record with its closed subject set.
//! - Map numeric grade values to word grades on the German 1.0–6.0 scale.
//! - Provide the weighting/certification layer on top of plain grades.
//!
//! # Invariants
//! - `value` is meaningful only in [1.0, 6.0]; out-of-range values are never
//!   classified into a word-grade bucket.
//! - External field names (`Schulfach`, `Datum`, `Bezeichnung`, `Notenwert`)
//!   are fixed tokens, pinned through serde renames.

use serde::{Deserialize, Serialize};

/// Closed set of school subject codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    /// Sentinel for unknown or unparsed subjects.
    #[default]
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "AWE")]
    Awe,
    #[serde(rename = "DEU")]
    Deu,
    #[serde(rename = "ENG")]
    Eng,
    #[serde(rename = "ITS")]
    Its,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "SG")]
    Sg,
    #[serde(rename = "WPG")]
    Wpg,
}

impl Subject {
    /// Stable wire code used by the delimited text format.
    pub fn code(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Awe => "AWE",
            Self::Deu => "DEU",
            Self::Eng => "ENG",
            Self::Its => "ITS",
            Self::Pg => "PG",
            Self::Sg => "SG",
            Self::Wpg => "WPG",
        }
    }

    /// Parses one wire code, case-sensitively. Unknown codes yield `None`.
    pub fn parse_code(value: &str) -> Option<Subject> {
        match value {
            "undefined" => Some(Self::Undefined),
            "AWE" => Some(Self::Awe),
            "DEU" => Some(Self::Deu),
            "ENG" => Some(Self::Eng),
            "ITS" => Some(Self::Its),
            "PG" => Some(Self::Pg),
            "SG" => Some(Self::Sg),
            "WPG" => Some(Self::Wpg),
            _ => None,
        }
    }
}

/// One performance assessment for a subject.
///
/// Constructed from user input or by decoding a persisted line; the codec
/// layer never mutates a grade after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(rename = "Schulfach")]
    pub subject: Subject,
    /// Free-form short-date text, e.g. `2020-07-05`.
    #[serde(rename = "Datum")]
    pub date: String,
    /// Assessment category, e.g. `Klausur` or `SoMi`.
    #[serde(rename = "Bezeichnung")]
    pub category: String,
    /// Numeric score on the 1.0–6.0 scale, lower is better.
    #[serde(rename = "Notenwert")]
    pub value: f64,
}

impl Grade {
    pub fn new(
        subject: Subject,
        date: impl Into<String>,
        category: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            subject,
            date: date.into(),
            category: category.into(),
            value,
        }
    }

    /// Returns the word grade for this value, or `None` when the value falls
    /// outside every bucket.
    pub fn word_grade(&self) -> Option<&'static str> {
        word_grade_for(self.value)
    }
}

/// Maps a numeric value to its word grade on the 1.0–6.0 scale.
///
/// Bucket edges follow the established grading table; values outside
/// [1.0, 6.0] (and values in the gaps between buckets) yield `None` rather
/// than the nearest bucket.
pub fn word_grade_for(value: f64) -> Option<&'static str> {
    if (1.0..=1.4).contains(&value) {
        Some("sehr gut")
    } else if (1.5..=2.4).contains(&value) {
        Some("gut")
    } else if (2.5..=3.4).contains(&value) {
        Some("befriedigend")
    } else if (3.5..=4.4).contains(&value) {
        Some("ausreichend")
    } else if (4.5..=5.4).contains(&value) {
        Some("mangelhaft")
    } else if (5.5..=6.0).contains(&value) {
        Some("ungenügend")
    } else {
        None
    }
}

/// A set of grades sharing one weighting factor, e.g. all written exams of a
/// subject weighted 0.6 against oral participation at 0.4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedGradeSet {
    pub grades: Vec<Grade>,
    pub weighting: f64,
}

impl WeightedGradeSet {
    pub fn new(weighting: f64) -> Self {
        Self {
            grades: Vec::new(),
            weighting,
        }
    }

    pub fn push(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Unweighted mean of the contained grade values. `None` when empty.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: f64 = self.grades.iter().map(|grade| grade.value).sum();
        Some(sum / self.grades.len() as f64)
    }

    /// Mean scaled by this set's weighting factor. `None` when empty.
    pub fn weighted_average(&self) -> Option<f64> {
        self.average().map(|mean| mean * self.weighting)
    }
}

/// Capability for records that can appear on a certificate.
pub trait Certifiable {
    /// Produces the human-readable certification statement. Callers decide
    /// whether to print or log it.
    fn certify(&self) -> String;
}

/// Final certificate grade for one subject, derived from weighted sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateGrade {
    #[serde(rename = "Schulfach")]
    pub subject: Subject,
    #[serde(rename = "Notenwert")]
    pub value: f64,
}

impl CertificateGrade {
    /// Combines weighted set averages into one certificate value, rounded to
    /// one decimal. Empty sets contribute nothing.
    pub fn from_sets(subject: Subject, sets: &[WeightedGradeSet]) -> Self {
        let combined: f64 = sets
            .iter()
            .filter_map(WeightedGradeSet::weighted_average)
            .sum();
        Self {
            subject,
            value: (combined * 10.0).round() / 10.0,
        }
    }
}

impl Certifiable for CertificateGrade {
    fn certify(&self) -> String {
        let word = word_grade_for(self.value).unwrap_or("nicht bestimmbar");
        format!(
            "The certificate grade for {} will be: '{}' ({})",
            self.subject.code(),
            word,
            self.value
        )
    }
}

/// Composite over every certifiable entry of one certificate.
#[derive(Default)]
pub struct CertificateBook {
    entries: Vec<Box<dyn Certifiable>>,
}

impl CertificateBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: Box<dyn Certifiable>) {
        self.entries.push(entry);
    }

    /// Certifies every registered entry in insertion order.
    pub fn certify_all(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.certify()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        word_grade_for, Certifiable, CertificateBook, CertificateGrade, Grade, Subject,
        WeightedGradeSet,
    };

    #[test]
    fn word_grade_buckets_cover_the_scale() {
        assert_eq!(word_grade_for(1.0), Some("sehr gut"));
        assert_eq!(word_grade_for(1.4), Some("sehr gut"));
        assert_eq!(word_grade_for(2.0), Some("gut"));
        assert_eq!(word_grade_for(3.0), Some("befriedigend"));
        assert_eq!(word_grade_for(4.0), Some("ausreichend"));
        assert_eq!(word_grade_for(5.0), Some("mangelhaft"));
        assert_eq!(word_grade_for(6.0), Some("ungenügend"));
    }

    #[test]
    fn out_of_range_values_are_never_bucketed() {
        assert_eq!(word_grade_for(0.0), None);
        assert_eq!(word_grade_for(0.9), None);
        assert_eq!(word_grade_for(6.1), None);
        assert_eq!(word_grade_for(-1.0), None);
    }

    #[test]
    fn subject_codes_round_trip() {
        for subject in [
            Subject::Undefined,
            Subject::Awe,
            Subject::Deu,
            Subject::Eng,
            Subject::Its,
            Subject::Pg,
            Subject::Sg,
            Subject::Wpg,
        ] {
            assert_eq!(Subject::parse_code(subject.code()), Some(subject));
        }
        assert_eq!(Subject::parse_code("MATHE"), None);
        assert_eq!(Subject::parse_code("awe"), None);
    }

    #[test]
    fn certificate_combines_weighted_set_averages() {
        let mut exams = WeightedGradeSet::new(0.6);
        exams.push(Grade::new(Subject::Awe, "2020-07-05", "Klausur", 1.3));
        exams.push(Grade::new(Subject::Awe, "2020-07-06", "Klausur", 2.3));

        let mut oral = WeightedGradeSet::new(0.4);
        oral.push(Grade::new(Subject::Awe, "2020-07-05", "SoMi", 1.3));

        let certificate = CertificateGrade::from_sets(Subject::Awe, &[exams, oral]);
        // (1.3 + 2.3) / 2 * 0.6 + 1.3 * 0.4 = 1.6
        assert_eq!(certificate.value, 1.6);
        assert!(certificate.certify().contains("gut"));
        assert!(certificate.certify().contains("AWE"));
    }

    #[test]
    fn empty_weighted_set_has_no_average() {
        let empty = WeightedGradeSet::new(0.6);
        assert_eq!(empty.average(), None);
        assert_eq!(empty.weighted_average(), None);
    }

    #[test]
    fn certificate_book_certifies_all_entries_in_order() {
        let mut book = CertificateBook::new();
        book.add(Box::new(CertificateGrade {
            subject: Subject::Eng,
            value: 1.3,
        }));
        book.add(Box::new(CertificateGrade {
            subject: Subject::Deu,
            value: 4.0,
        }));

        let statements = book.certify_all();
        assert_eq!(statements.len(), 2);
        assert!(statements[0].contains("ENG"));
        assert!(statements[1].contains("DEU"));
    }
}
