use aims_core::error::CoreError;
use aims_core::models::patient::Patient;
use aims_core::models::report::ReportRequest;
use serde_json::json;

fn patient(first: &str, last: &str) -> Patient {
    serde_json::from_value(json!({ "firstName": first, "lastName": last })).unwrap()
}

#[test]
fn deserializes_without_server_fields() {
    let p: Patient = serde_json::from_value(json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "age": 54,
        "gender": "Female",
        "surveyDate": "2025-03-14"
    }))
    .unwrap();
    assert!(p.id.is_nil());
    assert_eq!(p.age, Some(54));
    assert_eq!(p.survey_date.unwrap().to_string(), "2025-03-14");
}

#[test]
fn client_supplied_id_is_replaced() {
    let mut p = patient("Jane", "Doe");
    p.id = uuid::Uuid::new_v4();
    let before = p.id;
    assert_ne!(p.assign_identity().id, before);
}

#[test]
fn name_match_is_case_insensitive_substring() {
    assert!(patient("John", "Smith").name_matches("Jo"));
    assert!(patient("Mary", "Jones").name_matches("jo"));
    assert!(patient("Mary", "Jones").name_matches("y jo"));
    assert!(!patient("Alice", "Brown").name_matches("Jo"));
}

#[test]
fn empty_keyword_matches_everyone() {
    assert!(patient("Alice", "Brown").name_matches(""));
    assert!(patient("Alice", "Brown").name_matches("   "));
}

#[test]
fn report_request_requires_survey() {
    let req: ReportRequest = serde_json::from_value(json!({
        "patient": { "firstName": "Jane", "lastName": "Doe" },
        "chartImage": ""
    }))
    .unwrap();
    match req.into_parts() {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "survey"),
        other => panic!("expected missing survey, got {other:?}"),
    }
}

#[test]
fn report_request_null_patient_is_missing() {
    let req: ReportRequest = serde_json::from_value(json!({
        "patient": null,
        "survey": {}
    }))
    .unwrap();
    assert!(matches!(req.into_parts(), Err(CoreError::MissingField(f)) if f == "patient"));
}

#[test]
fn report_request_drops_blank_chart() {
    let req: ReportRequest = serde_json::from_value(json!({
        "patient": { "firstName": "Jane", "lastName": "Doe" },
        "survey": {
            "patientId": "x", "facialMuscles": 0, "lipsPerioral": 0, "jaw": 0,
            "tongue": 0, "upperExtremities": 0, "lowerExtremities": 0,
            "neckShouldersHips": 0, "severityOfMovements": 0,
            "incapacitationDueToMovements": 0, "patientAwareness": 0,
            "emotionalDistress": 0, "globalRating": 0
        },
        "chartImage": "  "
    }))
    .unwrap();
    let parts = req.into_parts().unwrap();
    assert!(parts.chart_image.is_none());
    assert_eq!(parts.patient.first_name, "Jane");
}
