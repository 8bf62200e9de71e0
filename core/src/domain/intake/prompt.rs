use crate::domain::intake::entities::AnswerRecord;

/// Quotes a value the way a bracketed list literal shows it: single quotes,
/// or double quotes when the value itself holds a single quote.
fn quote(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        format!("\"{value}\"")
    } else {
        format!("'{}'", value.replace('\'', "\\'"))
    }
}

fn list_literal(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Renders a completed questionnaire into the recommendation prompt.
///
/// Pure and deterministic. Every field is always present; empty lists
/// render as `[]` and missing single answers as empty text. Line breaks
/// follow the questionnaire template, indentation is not carried over.
pub fn build_prompt(record: &AnswerRecord) -> String {
    format!(
        "\nBased on the answers provided from the questionnaire, could you provide skincare product recommendations, \n\
         treatment alternatives, and a skincare diagnosis and routine planner for 1 month? Here are the details:\n\
         - Skin goals: {goals}\n\
         - Skin type: {skin_type}\n\
         - Reaction frequency: {reaction}\n\
         - Skin tone: {tone}\n\
         - Recent skin symptoms: {symptoms}\n\
         - Skin conditions: {conditions}\n\
         - Date of birth: {birthdate}\n",
        goals = list_literal(&record.skin_goals),
        skin_type = record.skin_type.as_deref().unwrap_or_default(),
        reaction = record.reaction_frequency.as_deref().unwrap_or_default(),
        tone = record.skin_tone.as_deref().unwrap_or_default(),
        symptoms = list_literal(&record.skin_symptoms),
        conditions = list_literal(&record.skin_conditions),
        birthdate = record.birthdate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::entities::{BirthMonth, Birthdate};

    fn sample_record() -> AnswerRecord {
        AnswerRecord {
            skin_goals: vec!["Reduce redness".to_string(), "Enhance radiance".to_string()],
            skin_type: Some("My skin doesn't feel noticeably oily or dry".to_string()),
            reaction_frequency: Some("Sometimes".to_string()),
            skin_tone: Some("Medium".to_string()),
            skin_symptoms: vec!["Flaky / scaly patches".to_string()],
            skin_conditions: vec!["History of rosacea".to_string()],
            birthdate: Birthdate {
                day: 21,
                month: BirthMonth::October,
                year: 1995,
            },
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let record = sample_record();
        assert_eq!(build_prompt(&record), build_prompt(&record.clone()));
    }

    #[test]
    fn test_prompt_lists_fields_in_order() {
        let prompt = build_prompt(&sample_record());
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(
            &lines[3..],
            &[
                "- Skin goals: ['Reduce redness', 'Enhance radiance']",
                "- Skin type: My skin doesn't feel noticeably oily or dry",
                "- Reaction frequency: Sometimes",
                "- Skin tone: Medium",
                "- Recent skin symptoms: ['Flaky / scaly patches']",
                "- Skin conditions: ['History of rosacea']",
                "- Date of birth: 21 October 1995",
            ]
        );
        assert_eq!(lines[0], "");
        assert_eq!(
            lines[1],
            "Based on the answers provided from the questionnaire, could you provide skincare product recommendations, "
        );
        assert_eq!(
            lines[2],
            "treatment alternatives, and a skincare diagnosis and routine planner for 1 month? Here are the details:"
        );
    }

    #[test]
    fn test_prompt_keeps_template_line_breaks() {
        let prompt = build_prompt(&sample_record());

        assert!(prompt.starts_with("\nBased on the answers"));
        assert!(prompt.contains("product recommendations, \ntreatment alternatives"));
        assert!(prompt.ends_with("- Date of birth: 21 October 1995\n"));
        assert_eq!(prompt.lines().count(), 10);
    }

    #[test]
    fn test_empty_lists_render_as_empty_literal() {
        let prompt = build_prompt(&AnswerRecord::default());
        assert!(prompt.contains("- Skin goals: []\n"));
        assert!(prompt.contains("- Recent skin symptoms: []\n"));
        assert!(prompt.contains("- Skin conditions: []\n"));
        assert!(prompt.contains("- Skin type: \n"));
        assert!(prompt.contains("- Date of birth: 1 January 2000\n"));
    }

    #[test]
    fn test_quote_switches_to_double_quotes_for_apostrophes() {
        assert_eq!(quote("Never"), "'Never'");
        assert_eq!(quote("doesn't"), "\"doesn't\"");
        assert_eq!(quote("it's \"odd\""), "'it\\'s \"odd\"'");
    }
}
