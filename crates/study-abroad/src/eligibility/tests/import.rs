use crate::eligibility::domain::{EnglishTest, TargetCountry};
use crate::eligibility::{IntakeGuard, IntakeViolation, ProfileImporter, RowRejection};

#[test]
fn importer_collects_profiles_and_rejections() {
    let csv = "cgpa,work_experience_years,english_score,score_type,target_country\n\
3.2,2,7.0,IELTS,USA\n\
2.5,0,90,toefl,Canada\n\
3.1,1,7.0,PTE,USA\n\
6.0,1,7.0,IELTS,USA\n\
abc,1,7.0,IELTS,USA\n\
3.0,1,6.5,,\n";

    let rows = ProfileImporter::from_reader(csv.as_bytes(), &IntakeGuard::default())
        .expect("import succeeds");

    assert_eq!(rows.len(), 6);
    let rows_numbers: Vec<usize> = rows.iter().map(|row| row.row).collect();
    assert_eq!(rows_numbers, [1, 2, 3, 4, 5, 6]);

    let first = rows[0].outcome.as_ref().expect("first row valid");
    assert_eq!(first.target_country, Some(TargetCountry::Usa));

    let second = rows[1].outcome.as_ref().expect("second row valid");
    assert_eq!(second.english_test, EnglishTest::Toefl);

    assert_eq!(
        rows[2].outcome,
        Err(RowRejection::UnknownScoreType("PTE".to_string()))
    );
    assert!(matches!(
        rows[3].outcome,
        Err(RowRejection::Intake(IntakeViolation::CgpaOutOfRange { .. }))
    ));
    assert!(matches!(rows[4].outcome, Err(RowRejection::Malformed(_))));

    let defaults = rows[5].outcome.as_ref().expect("blank optionals allowed");
    assert_eq!(defaults.english_test, EnglishTest::Ielts);
    assert!(defaults.target_country.is_none());
}

#[test]
fn importer_reports_missing_file() {
    let err = ProfileImporter::from_path("does/not/exist.csv", &IntakeGuard::default())
        .expect_err("missing file");
    assert!(err.to_string().contains("failed to read profile export"));
}
