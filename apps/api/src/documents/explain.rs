//! Rule-based explanations of how each parsed field was obtained.

use std::collections::BTreeMap;

use serde_json::Value;

const SKILLS_EXPLANATION: &str = "Skills were identified by cross-referencing keywords from the 'Skills' and 'Experience' sections against a predefined list of technologies.";
const EXPERIENCE_YEARS_EXPLANATION: &str = "Total years of experience were calculated by summarizing the durations listed in the work history section.";

/// Explains every top-level field of a serialized parse result.
///
/// Empty values (`null`, `""`, `[]`, `{}`, `0`, `false`) get a "not found"
/// sentence. Non-object input yields no explanations.
pub fn explain_fields(parsed: &Value) -> BTreeMap<String, String> {
    let Some(fields) = parsed.as_object() else {
        return BTreeMap::new();
    };

    fields
        .iter()
        .map(|(key, value)| {
            let present = is_present(value);
            let explanation = match key.as_str() {
                "skills" if present => SKILLS_EXPLANATION.to_string(),
                "experience_years" if present => EXPERIENCE_YEARS_EXPLANATION.to_string(),
                _ if present => format!(
                    "The value for '{}' was identified and extracted from the document.",
                    title_case(key)
                ),
                _ => format!(
                    "No clear value for '{}' was found in the document.",
                    title_case(key)
                ),
            };
            (key.clone(), explanation)
        })
        .collect()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// "experience_years_min" → "Experience Years Min"
fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_field_is_explained_as_extracted() {
        let explanations = explain_fields(&json!({ "job_title": "React Developer" }));
        assert_eq!(
            explanations["job_title"],
            "The value for 'Job Title' was identified and extracted from the document."
        );
    }

    #[test]
    fn test_missing_values_are_explained_as_not_found() {
        let explanations = explain_fields(&json!({
            "name": null,
            "qualifications": [],
            "experience_years_min": 0
        }));
        assert_eq!(
            explanations["name"],
            "No clear value for 'Name' was found in the document."
        );
        assert_eq!(
            explanations["qualifications"],
            "No clear value for 'Qualifications' was found in the document."
        );
        assert_eq!(
            explanations["experience_years_min"],
            "No clear value for 'Experience Years Min' was found in the document."
        );
    }

    #[test]
    fn test_skills_and_experience_years_have_custom_text() {
        let explanations = explain_fields(&json!({
            "skills": ["Rust"],
            "experience_years": 4
        }));
        assert_eq!(explanations["skills"], SKILLS_EXPLANATION);
        assert_eq!(explanations["experience_years"], EXPERIENCE_YEARS_EXPLANATION);
    }

    #[test]
    fn test_empty_skills_fall_back_to_not_found() {
        let explanations = explain_fields(&json!({ "skills": [] }));
        assert_eq!(
            explanations["skills"],
            "No clear value for 'Skills' was found in the document."
        );
    }

    #[test]
    fn test_non_object_yields_nothing() {
        assert!(explain_fields(&json!(["skills"])).is_empty());
        assert!(explain_fields(&Value::Null).is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("experience_years_min"), "Experience Years Min");
        assert_eq!(title_case("SKILLS"), "Skills");
        assert_eq!(title_case("name"), "Name");
    }
}
