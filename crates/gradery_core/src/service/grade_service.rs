//! Grade use-case service.
//!
//! # Responsibility
//! - Wrap grade persistence behind one caller-facing API.
//! - Host the certificate calculation over weighted grade sets.

use crate::model::grade::{CertificateGrade, Grade, Subject, WeightedGradeSet};
use crate::repo::grade_repo::GradeRepository;
use crate::repo::RepoResult;
use log::info;

/// Service wrapper for grade storage and certification.
pub struct GradeService<R: GradeRepository> {
    repo: R,
}

impl<R: GradeRepository> GradeService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists one grade through the configured repository.
    pub fn add_grade(&self, grade: &Grade) -> RepoResult<()> {
        self.repo.append_grade(grade)
    }

    /// Loads one grade, or `None` when nothing is stored yet.
    pub fn load_grade(&self) -> RepoResult<Option<Grade>> {
        self.repo.read_grade()
    }

    /// Derives the certificate grade for a subject from its weighted sets.
    pub fn calculate_certificate(
        &self,
        subject: Subject,
        sets: &[WeightedGradeSet],
    ) -> CertificateGrade {
        let certificate = CertificateGrade::from_sets(subject, sets);
        info!(
            "event=certificate_calculated module=service subject={} value={}",
            subject.code(),
            certificate.value
        );
        certificate
    }
}

#[cfg(test)]
mod tests {
    use super::GradeService;
    use crate::model::grade::{Grade, Subject, WeightedGradeSet};
    use crate::repo::grade_repo::GradeRepository;
    use crate::repo::RepoResult;
    use std::cell::RefCell;

    /// In-memory repository double keeping appended lines in a Vec.
    struct MemoryGradeRepository {
        grades: RefCell<Vec<Grade>>,
    }

    impl MemoryGradeRepository {
        fn new() -> Self {
            Self {
                grades: RefCell::new(Vec::new()),
            }
        }
    }

    impl GradeRepository for MemoryGradeRepository {
        fn append_grade(&self, grade: &Grade) -> RepoResult<()> {
            self.grades.borrow_mut().push(grade.clone());
            Ok(())
        }

        fn read_grade(&self) -> RepoResult<Option<Grade>> {
            Ok(self.grades.borrow().last().cloned())
        }
    }

    #[test]
    fn add_then_load_returns_the_last_grade() {
        let service = GradeService::new(MemoryGradeRepository::new());
        service
            .add_grade(&Grade::new(Subject::Eng, "2020-07-05", "Klausur", 1.3))
            .expect("append should succeed");
        service
            .add_grade(&Grade::new(Subject::Deu, "2020-07-06", "SoMi", 2.0))
            .expect("append should succeed");

        let loaded = service
            .load_grade()
            .expect("read should succeed")
            .expect("a grade should be stored");
        assert_eq!(loaded.subject, Subject::Deu);
    }

    #[test]
    fn certificate_calculation_uses_weighted_sets() {
        let service = GradeService::new(MemoryGradeRepository::new());

        let mut exams = WeightedGradeSet::new(0.6);
        exams.push(Grade::new(Subject::Awe, "2020-07-05", "Klausur", 1.3));
        exams.push(Grade::new(Subject::Awe, "2020-07-06", "Klausur", 2.3));
        let mut oral = WeightedGradeSet::new(0.4);
        oral.push(Grade::new(Subject::Awe, "2020-07-05", "SoMi", 1.3));

        let certificate = service.calculate_certificate(Subject::Awe, &[exams, oral]);
        assert_eq!(certificate.value, 1.6);
    }
}
