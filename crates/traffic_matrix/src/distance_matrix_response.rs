use serde::{Deserialize, Deserializer};

/// Body returned by the distance matrix endpoint.
/// One row per origin, one element per destination.
#[derive(Deserialize, Debug, Default)]
pub struct DistanceMatrixResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<Row>,

    /// "OK", "REQUEST_DENIED", "INVALID_REQUEST", ...
    #[serde(default)]
    pub status: Option<String>,

    /// Only present when the request was rejected
    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub origin_addresses: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub destination_addresses: Vec<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Row {
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<Element>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Element {
    #[serde(default, deserialize_with = "null_as_default")]
    pub distance: TextValue,

    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: TextValue,

    /// Only filled in when a departure time was requested
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration_in_traffic: TextValue,

    #[serde(default)]
    pub status: Option<String>,
}

/// A measure as given by the service: display text plus the raw value
/// (meters for distances, seconds for durations).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct TextValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: i64,
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DistanceMatrixResponse {
    /// First element of the first row, if the service returned any.
    pub fn first_element(&self) -> Option<&Element> {
        self.rows.first().and_then(|row| row.elements.first())
    }

    pub fn duration_in_traffic(&self) -> Option<&str> {
        self.first_element()
            .map(|element| element.duration_in_traffic.text.as_str())
    }

    /// Human readable reason for an empty response, built from the vendor
    /// status fields when they are present.
    pub fn empty_reason(&self) -> String {
        let missing = if self.rows.is_empty() {
            "response contains no rows"
        } else {
            "first row contains no elements"
        };

        match (&self.status, &self.error_message) {
            (Some(status), Some(message)) => format!("{missing} (status {status}: {message})"),
            (Some(status), None) => format!("{missing} (status {status})"),
            (None, Some(message)) => format!("{missing} ({message})"),
            (None, None) => missing.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> DistanceMatrixResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_minimal_body_decodes() {
        let response =
            parse(r#"{"rows":[{"elements":[{"duration_in_traffic":{"text":"5 mins","value":300}}]}]}"#);

        assert_eq!(response.duration_in_traffic(), Some("5 mins"));
        let element = response.first_element().unwrap();
        assert_eq!(element.duration_in_traffic.value, 300);
        assert_eq!(element.distance, TextValue::default());
        assert!(response.status.is_none());
    }

    #[test]
    fn test_full_body_uses_first_row_first_element() {
        let response = parse(
            r#"{
                "destination_addresses": ["Antwerp, Belgium", "Ghent, Belgium"],
                "origin_addresses": ["Brussels, Belgium"],
                "rows": [
                    {
                        "elements": [
                            {
                                "distance": {"text": "45.2 km", "value": 45213},
                                "duration": {"text": "41 mins", "value": 2460},
                                "duration_in_traffic": {"text": "52 mins", "value": 3120},
                                "status": "OK"
                            },
                            {
                                "distance": {"text": "56.0 km", "value": 56012},
                                "duration": {"text": "45 mins", "value": 2700},
                                "duration_in_traffic": {"text": "49 mins", "value": 2940},
                                "status": "OK"
                            }
                        ]
                    }
                ],
                "status": "OK"
            }"#,
        );

        assert_eq!(response.duration_in_traffic(), Some("52 mins"));
        assert_eq!(response.origin_addresses, vec!["Brussels, Belgium"]);
        assert_eq!(response.first_element().unwrap().distance.value, 45213);
    }

    #[test]
    fn test_missing_traffic_field_gives_empty_text() {
        let response = parse(r#"{"rows":[{"elements":[{"duration":{"text":"3 mins","value":180}}]}]}"#);
        assert_eq!(response.duration_in_traffic(), Some(""));
    }

    #[test]
    fn test_empty_rows() {
        let response = parse(r#"{"rows":[]}"#);
        assert!(response.duration_in_traffic().is_none());
        assert_eq!(response.empty_reason(), "response contains no rows");
    }

    #[test]
    fn test_empty_elements() {
        let response = parse(r#"{"rows":[{"elements":[]}]}"#);
        assert!(response.duration_in_traffic().is_none());
        assert_eq!(response.empty_reason(), "first row contains no elements");
    }

    #[test]
    fn test_empty_reason_includes_vendor_status() {
        let response = parse(
            r#"{"rows":[],"status":"REQUEST_DENIED","error_message":"The provided API key is invalid."}"#,
        );
        assert_eq!(
            response.empty_reason(),
            "response contains no rows (status REQUEST_DENIED: The provided API key is invalid.)"
        );
    }

    #[test]
    fn test_missing_rows_is_treated_as_empty() {
        let response = parse(r#"{"status":"OVER_QUERY_LIMIT"}"#);
        assert!(response.duration_in_traffic().is_none());
        assert_eq!(
            response.empty_reason(),
            "response contains no rows (status OVER_QUERY_LIMIT)"
        );
    }

    #[test]
    fn test_null_rows_is_treated_as_empty() {
        let response = parse(r#"{"rows":null,"status":"ZERO_RESULTS"}"#);
        assert!(response.duration_in_traffic().is_none());
        assert_eq!(
            response.empty_reason(),
            "response contains no rows (status ZERO_RESULTS)"
        );
    }

    #[test]
    fn test_null_elements_is_treated_as_empty() {
        let response = parse(r#"{"rows":[{"elements":null}]}"#);
        assert!(response.duration_in_traffic().is_none());
        assert_eq!(response.empty_reason(), "first row contains no elements");
    }

    #[test]
    fn test_null_traffic_gives_empty_text() {
        let response = parse(
            r#"{"rows":[{"elements":[{"distance":null,"duration_in_traffic":null,"status":null}]}]}"#,
        );
        assert_eq!(response.duration_in_traffic(), Some(""));
        assert_eq!(response.first_element().unwrap().distance, TextValue::default());
    }

    #[test]
    fn test_null_text_and_value() {
        let response =
            parse(r#"{"rows":[{"elements":[{"duration_in_traffic":{"text":null,"value":null}}]}]}"#);
        assert_eq!(response.duration_in_traffic(), Some(""));
        assert_eq!(response.first_element().unwrap().duration_in_traffic.value, 0);
    }

    #[test]
    fn test_wrong_shape_is_a_decode_error() {
        assert!(serde_json::from_str::<DistanceMatrixResponse>(r#"{"rows":"none"}"#).is_err());
    }
}
