use serde_json::{Map, Value};

use crate::models::AnswerEntry;

/// Field names probed, in priority order, when the payload is an object
/// wrapping its items in an array-valued field.
const ARRAY_FIELDS: [&str; 5] = ["answers", "data", "result", "output", "items"];

/// Field names an item may use to carry its own question text.
const QUESTION_FIELDS: [&str; 3] = ["question", "prompt", "query"];

/// Field names an item may use to carry its answer value.
const ANSWER_FIELDS: [&str; 3] = ["answer", "output", "response"];

/// The response shapes the upstream service has been observed to return.
/// Classification is an ordered chain; the first matching shape wins.
#[derive(Debug)]
enum PayloadShape<'a> {
    /// Null or an empty string: nothing to show.
    Empty,
    /// Already a sequence of items.
    Sequence(&'a [Value]),
    /// An object wrapping the item sequence in a well-known field.
    ArrayField(&'a [Value]),
    /// An object carrying a single scalar `answer`; the whole object is
    /// treated as the one item.
    SingleAnswer(&'a Value),
    /// Any other object: its field values, in payload order, are the items.
    ObjectValues(&'a Map<String, Value>),
    /// A bare scalar: the value itself is the one item.
    Scalar(&'a Value),
}

fn classify(raw: &Value) -> PayloadShape<'_> {
    match raw {
        Value::Null => PayloadShape::Empty,
        Value::String(s) if s.is_empty() => PayloadShape::Empty,
        Value::Array(items) => PayloadShape::Sequence(items),
        Value::Object(fields) => {
            for name in ARRAY_FIELDS {
                if let Some(Value::Array(items)) = fields.get(name) {
                    return PayloadShape::ArrayField(items);
                }
            }
            if fields.get("answer").is_some_and(is_scalar) {
                return PayloadShape::SingleAnswer(raw);
            }
            PayloadShape::ObjectValues(fields)
        }
        other => PayloadShape::Scalar(other),
    }
}

fn is_scalar(value: &Value) -> bool {
    value.is_string() || value.is_number() || value.is_boolean()
}

/// Turns the raw service payload into an ordered list of question/answer
/// pairs. The upstream schema is undocumented, so this is best-effort:
/// unexpected shapes degrade to a serialized fallback, never an error.
pub fn normalize(raw: &Value, questions: &[String]) -> Vec<AnswerEntry> {
    let items: Vec<&Value> = match classify(raw) {
        PayloadShape::Empty => Vec::new(),
        PayloadShape::Sequence(items) | PayloadShape::ArrayField(items) => items.iter().collect(),
        PayloadShape::SingleAnswer(item) => vec![item],
        PayloadShape::ObjectValues(fields) => fields.values().collect(),
        PayloadShape::Scalar(value) => vec![value],
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| AnswerEntry {
            question: question_text(item, index, questions),
            answer: answer_text(item),
        })
        .collect()
}

fn question_text(item: &Value, index: usize, questions: &[String]) -> String {
    if let Value::Object(fields) = item {
        for name in QUESTION_FIELDS {
            if let Some(Value::String(question)) = fields.get(name) {
                return question.clone();
            }
        }
    }
    questions
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Question {}", index + 1))
}

fn answer_text(item: &Value) -> String {
    if let Value::Object(fields) = item {
        for name in ANSWER_FIELDS {
            match fields.get(name) {
                None | Some(Value::Null) => {}
                Some(value) => return value_text(value),
            }
        }
        if let Some(Value::String(text)) = fields.get("text") {
            return text.clone();
        }
    }
    value_text(item)
}

/// Serializes non-string values to stable JSON text for display.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn questions(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn null_payload_yields_nothing() {
        assert!(normalize(&Value::Null, &questions(&["q1"])).is_empty());
    }

    #[test]
    fn empty_string_payload_yields_nothing() {
        assert!(normalize(&json!(""), &questions(&["q1"])).is_empty());
    }

    #[test]
    fn empty_array_yields_nothing() {
        assert!(normalize(&json!([]), &questions(&["q1"])).is_empty());
    }

    #[test]
    fn array_of_strings_pairs_by_position() {
        let entries = normalize(&json!(["A", "B"]), &questions(&["q1", "q2"]));
        assert_eq!(
            entries,
            vec![
                AnswerEntry { question: "q1".into(), answer: "A".into() },
                AnswerEntry { question: "q2".into(), answer: "B".into() },
            ]
        );
    }

    #[test]
    fn single_answer_object_becomes_one_entry() {
        let entries = normalize(&json!({"answer": "X"}), &questions(&["q1"]));
        assert_eq!(
            entries,
            vec![AnswerEntry { question: "q1".into(), answer: "X".into() }]
        );
    }

    #[test]
    fn answers_field_wins_and_item_question_overrides_positional() {
        let raw = json!({"answers": [{"question": "custom?", "answer": "Y"}]});
        let entries = normalize(&raw, &questions(&["ignored"]));
        assert_eq!(
            entries,
            vec![AnswerEntry { question: "custom?".into(), answer: "Y".into() }]
        );
    }

    #[test]
    fn array_field_priority_order() {
        let raw = json!({"data": ["second"], "answers": ["first"]});
        let entries = normalize(&raw, &questions(&["q1"]));
        assert_eq!(entries[0].answer, "first");
    }

    #[test]
    fn non_array_field_is_skipped_in_favor_of_later_name() {
        let raw = json!({"answers": "not a list", "result": ["real"]});
        let entries = normalize(&raw, &questions(&["q1"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, "real");
    }

    #[test]
    fn items_field_is_probed_last() {
        let raw = json!({"items": [{"answer": "Z"}]});
        let entries = normalize(&raw, &questions(&["q1"]));
        assert_eq!(entries, vec![AnswerEntry { question: "q1".into(), answer: "Z".into() }]);
    }

    #[test]
    fn plain_object_flattens_field_values_in_order() {
        let raw = json!({"first": "A1", "second": "A2"});
        let entries = normalize(&raw, &questions(&["q1", "q2"]));
        assert_eq!(
            entries,
            vec![
                AnswerEntry { question: "q1".into(), answer: "A1".into() },
                AnswerEntry { question: "q2".into(), answer: "A2".into() },
            ]
        );
    }

    #[test]
    fn bare_scalar_becomes_single_entry() {
        let entries = normalize(&json!("just text"), &[]);
        assert_eq!(
            entries,
            vec![AnswerEntry { question: "Question 1".into(), answer: "just text".into() }]
        );
    }

    #[test]
    fn zero_is_a_real_answer_not_an_empty_payload() {
        let entries = normalize(&json!(0), &questions(&["q1"]));
        assert_eq!(entries, vec![AnswerEntry { question: "q1".into(), answer: "0".into() }]);
    }

    #[test]
    fn missing_questions_get_synthesized_labels() {
        let entries = normalize(&json!(["A", "B", "C"]), &questions(&["q1"]));
        assert_eq!(entries[0].question, "q1");
        assert_eq!(entries[1].question, "Question 2");
        assert_eq!(entries[2].question, "Question 3");
    }

    #[test]
    fn fewer_items_than_questions_are_not_padded() {
        let entries = normalize(&json!(["only"]), &questions(&["q1", "q2", "q3"]));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn null_answer_field_falls_through_to_text() {
        let raw = json!([{"answer": null, "text": "fallback"}]);
        let entries = normalize(&raw, &questions(&["q1"]));
        assert_eq!(entries[0].answer, "fallback");
    }

    #[test]
    fn output_and_response_fields_are_honored() {
        let entries = normalize(&json!([{"output": "O"}, {"response": "R"}]), &[]);
        assert_eq!(entries[0].answer, "O");
        assert_eq!(entries[1].answer, "R");
    }

    #[test]
    fn item_without_known_fields_serializes_whole_item() {
        let entries = normalize(&json!([{"score": 0.9}]), &questions(&["q1"]));
        assert_eq!(entries[0].answer, r#"{"score":0.9}"#);
    }

    #[test]
    fn numeric_answer_values_serialize_to_text() {
        let entries = normalize(&json!([{"answer": 42}]), &questions(&["q1"]));
        assert_eq!(entries[0].answer, "42");
    }

    #[test]
    fn object_valued_answer_field_still_wins_inside_item() {
        let raw = json!({"answer": {"detail": "nested"}});
        let entries = normalize(&raw, &questions(&["q1"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].answer, r#"{"detail":"nested"}"#);
    }
}
