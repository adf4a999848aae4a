//! Maps an arbitrary prediction-response body onto a [`Prediction`].
//!
//! The two backend generations never agreed on field names, so the
//! normalizer is total: it probes, it never fails, and anything it cannot
//! find is simply absent from the record.

use serde_json::Value;

use crate::{NormalizePolicy, Prediction};

/// Fallback field names probed by [`NormalizePolicy::ClientInferred`],
/// in order of preference.
const LABEL_FIELDS: [&str; 3] = ["label", "prediction", "class"];
const CONFIDENCE_FIELDS: [&str; 3] = ["confidence", "probability", "score"];

/// Dish names the label heuristic accepts as food even though the label
/// never contains the word "food" itself.
const FOOD_TERMS: [&str; 16] = [
    "hot dog", "pizza", "burger", "sandwich", "sushi", "pasta", "noodle", "salad", "soup", "taco",
    "curry", "steak", "ramen", "cake", "pancake", "waffle",
];

/// Normalize a response body under the given policy.
///
/// Total over any JSON value: a body missing every recognized field yields
/// a record with all optional fields `None` and `raw` set to the input.
pub fn normalize(raw: Value, policy: NormalizePolicy) -> Prediction {
    match policy {
        NormalizePolicy::ServerAuthoritative => {
            let is_food = raw.get("is_food").and_then(Value::as_bool);
            let food_guess = if is_food == Some(true) {
                string_field(&raw, "guess")
            } else {
                None
            };
            Prediction {
                label: string_field(&raw, "label"),
                is_food,
                food_guess,
                confidence_percent: fraction_field(&raw, "confidence").map(to_percent),
                raw,
            }
        }
        NormalizePolicy::ClientInferred => {
            let label = LABEL_FIELDS
                .iter()
                .find_map(|field| string_field(&raw, field));
            let confidence_percent = CONFIDENCE_FIELDS
                .iter()
                .find_map(|field| fraction_field(&raw, field))
                .map(to_percent);
            Prediction {
                is_food: label.as_deref().map(label_names_food),
                food_guess: None,
                confidence_percent,
                label,
                raw,
            }
        }
    }
}

fn string_field(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_owned)
}

fn fraction_field(raw: &Value, field: &str) -> Option<f64> {
    raw.get(field).and_then(Value::as_f64)
}

/// Fraction in [0,1] to a whole percentage, round half up, clamped so a
/// malformed body cannot render as 250%.
fn to_percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Case-insensitive food check against the label text: the literal "food"
/// (covers "Food" / "Non-Food" style labels) or a known dish name.
fn label_names_food(label: &str) -> bool {
    let lowered = label.to_lowercase();
    lowered.contains("food") || FOOD_TERMS.iter().any(|term| lowered.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    use NormalizePolicy::{ClientInferred, ServerAuthoritative};

    #[rstest]
    #[case::server(ServerAuthoritative)]
    #[case::client(ClientInferred)]
    fn body_without_recognized_fields_is_all_absent(#[case] policy: NormalizePolicy) {
        let body = json!({"detector": {"prob_food": "n/a"}, "elapsed_ms": 12});
        let prediction = normalize(body.clone(), policy);

        assert_eq!(prediction.label, None);
        assert_eq!(prediction.is_food, None);
        assert_eq!(prediction.food_guess, None);
        assert_eq!(prediction.confidence_percent, None);
        assert_eq!(prediction.raw, body);
    }

    #[rstest]
    #[case::server(ServerAuthoritative)]
    #[case::client(ClientInferred)]
    fn non_object_body_is_all_absent(#[case] policy: NormalizePolicy) {
        let prediction = normalize(json!(["not", "an", "object"]), policy);
        assert_eq!(prediction.label, None);
        assert_eq!(prediction.confidence_percent, None);
    }

    #[rstest]
    #[case(0.8734, 87)]
    #[case(0.995, 100)]
    #[case(0.0, 0)]
    #[case(1.0, 100)]
    #[case(0.005, 1)]
    fn confidence_rounds_half_up(#[case] fraction: f64, #[case] percent: u8) {
        let prediction = normalize(json!({"confidence": fraction}), ServerAuthoritative);
        assert_eq!(prediction.confidence_percent, Some(percent));
    }

    #[test]
    fn out_of_range_confidence_is_clamped() {
        let over = normalize(json!({"confidence": 2.5}), ServerAuthoritative);
        let under = normalize(json!({"confidence": -0.2}), ServerAuthoritative);
        assert_eq!(over.confidence_percent, Some(100));
        assert_eq!(under.confidence_percent, Some(0));
    }

    #[test]
    fn non_numeric_confidence_is_omitted() {
        let prediction = normalize(json!({"confidence": "0.9"}), ServerAuthoritative);
        assert_eq!(prediction.confidence_percent, None);
    }

    #[test]
    fn server_policy_trusts_is_food_and_surfaces_guess() {
        let body = json!({
            "label": "Food",
            "is_food": true,
            "guess": "pizza",
            "confidence": 0.91,
        });
        let prediction = normalize(body, ServerAuthoritative);

        assert_eq!(prediction.label.as_deref(), Some("Food"));
        assert_eq!(prediction.is_food, Some(true));
        assert_eq!(prediction.food_guess.as_deref(), Some("pizza"));
        assert_eq!(prediction.confidence_percent, Some(91));
    }

    #[test]
    fn server_policy_drops_guess_when_not_food() {
        let body = json!({"label": "Non-Food", "is_food": false, "guess": "pizza"});
        let prediction = normalize(body, ServerAuthoritative);

        assert_eq!(prediction.is_food, Some(false));
        assert_eq!(prediction.food_guess, None);
    }

    #[test]
    fn server_policy_ignores_fallback_fields() {
        let body = json!({"prediction": "Food", "probability": 0.8});
        let prediction = normalize(body, ServerAuthoritative);

        assert_eq!(prediction.label, None);
        assert_eq!(prediction.confidence_percent, None);
    }

    #[rstest]
    #[case::direct_food("Hot Dog", Some(true))]
    #[case::non_food_label("Laptop", Some(false))]
    #[case::backend_style_food("Food", Some(true))]
    #[case::backend_style_non_food("Non-Food", Some(false))]
    fn client_policy_infers_food_from_label(#[case] label: &str, #[case] is_food: Option<bool>) {
        let prediction = normalize(json!({"label": label}), ClientInferred);
        assert_eq!(prediction.is_food, is_food);
    }

    #[test]
    fn client_policy_without_label_leaves_food_unknown() {
        let prediction = normalize(json!({"score": 0.5}), ClientInferred);
        assert_eq!(prediction.label, None);
        assert_eq!(prediction.is_food, None);
        assert_eq!(prediction.confidence_percent, Some(50));
    }

    #[rstest]
    #[case::prediction_field(json!({"prediction": "Sushi"}), "Sushi")]
    #[case::class_field(json!({"class": "Laptop"}), "Laptop")]
    #[case::label_wins(json!({"label": "Pizza", "class": "Laptop"}), "Pizza")]
    fn client_policy_probes_label_fields_in_order(#[case] body: Value, #[case] label: &str) {
        let prediction = normalize(body, ClientInferred);
        assert_eq!(prediction.label.as_deref(), Some(label));
    }

    #[rstest]
    #[case::probability(json!({"probability": 0.25}), 25)]
    #[case::score(json!({"score": 0.333}), 33)]
    #[case::confidence_wins(json!({"confidence": 0.9, "score": 0.1}), 90)]
    fn client_policy_probes_confidence_fields_in_order(#[case] body: Value, #[case] pct: u8) {
        let prediction = normalize(body, ClientInferred);
        assert_eq!(prediction.confidence_percent, Some(pct));
    }

    #[test]
    fn client_policy_never_produces_a_guess() {
        let body = json!({"label": "Hot Dog", "guess": "hot dog"});
        let prediction = normalize(body, ClientInferred);
        assert_eq!(prediction.food_guess, None);
    }

    #[test]
    fn raw_body_is_preserved_verbatim() {
        let body = json!({
            "label": "Food",
            "is_food": true,
            "guess": "ramen",
            "confidence": 0.77,
            "detector": {"is_food": true, "prob_food": 0.98},
            "classifier": {"label": "ramen", "confidence": 0.77},
        });
        let prediction = normalize(body.clone(), ServerAuthoritative);
        assert_eq!(prediction.raw, body);
    }
}
