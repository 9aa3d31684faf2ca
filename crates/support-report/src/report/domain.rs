use serde::{Deserialize, Serialize};

/// Disability categories recognized on the form. The wire format uses the
/// Polish template strings; an empty string means "not selected".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabilityType {
    Physical,
    Psychological,
    Intellectual,
    Sensory,
}

impl DisabilityType {
    pub const LABELS: [&'static str; 4] =
        ["Fizyczna", "Psychiczna", "Intelektualna", "Sensoryczna"];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Physical => "Fizyczna",
            Self::Psychological => "Psychiczna",
            Self::Intellectual => "Intelektualna",
            Self::Sensory => "Sensoryczna",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Fizyczna" => Some(Self::Physical),
            "Psychiczna" => Some(Self::Psychological),
            "Intelektualna" => Some(Self::Intellectual),
            "Sensoryczna" => Some(Self::Sensory),
            _ => None,
        }
    }
}

fn deserialize_disability<'de, D>(deserializer: D) -> Result<Option<DisabilityType>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(other) => DisabilityType::from_label(other).map(Some).ok_or_else(|| {
            serde::de::Error::unknown_variant(other, &DisabilityType::LABELS)
        }),
    }
}

fn serialize_disability<S>(
    value: &Option<DisabilityType>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(value.map(DisabilityType::label).unwrap_or(""))
}

/// Numeric scale pick echoed from the form UI (value plus display label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSelection {
    pub value: f64,
    pub label: String,
}

/// One rated support dimension attached to an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    #[serde(
        deserialize_with = "deserialize_disability",
        serialize_with = "serialize_disability"
    )]
    pub disability_type: Option<DisabilityType>,
    pub support_level: ScaleSelection,
    pub frequency: ScaleSelection,
    pub points: f64,
}

impl Assessment {
    /// An assessment counts toward the report only when all three rated
    /// dimensions were actually filled in.
    pub fn is_valid(&self) -> bool {
        self.disability_type.is_some()
            && self.support_level.value != 0.0
            && self.frequency.value != 0.0
    }
}

/// Assessments gathered for one catalog activity, keyed by its zero-based
/// catalog index. `max_points` is precomputed upstream and echoed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAssessment {
    pub activity_index: usize,
    pub activity_name: String,
    pub assessments: Vec<Assessment>,
    pub max_points: f64,
}

/// Which of the two form layouts to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportVariant {
    /// Six columns, one collapsed row per activity.
    #[default]
    Summary,
    /// Seven columns, one row per assessment with a capability flag.
    Detailed,
}

/// The full submission. Activities may arrive in any order and need not
/// cover all 32 catalog positions; missing ones render as independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub activities: Vec<ActivityAssessment>,
    pub final_score: f64,
    #[serde(default)]
    pub variant: ReportVariant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assessment_json(disability: &str, support: f64, frequency: f64, points: f64) -> serde_json::Value {
        json!({
            "id": "a-1",
            "disabilityType": disability,
            "supportLevel": { "value": support, "label": "x" },
            "frequency": { "value": frequency, "label": "y" },
            "points": points,
        })
    }

    #[test]
    fn deserializes_polish_disability_labels() {
        let assessment: Assessment =
            serde_json::from_value(assessment_json("Fizyczna", 0.8, 0.5, 0.4)).expect("parses");
        assert_eq!(assessment.disability_type, Some(DisabilityType::Physical));
        assert!(assessment.is_valid());
    }

    #[test]
    fn empty_disability_string_means_unselected() {
        let assessment: Assessment =
            serde_json::from_value(assessment_json("", 0.8, 0.5, 0.4)).expect("parses");
        assert_eq!(assessment.disability_type, None);
        assert!(!assessment.is_valid());
    }

    #[test]
    fn unknown_disability_label_is_rejected() {
        let result: Result<Assessment, _> =
            serde_json::from_value(assessment_json("Inna", 0.8, 0.5, 0.4));
        assert!(result.is_err());
    }

    #[test]
    fn zero_scale_values_invalidate_the_assessment() {
        let assessment: Assessment =
            serde_json::from_value(assessment_json("Sensoryczna", 0.0, 0.5, 0.0)).expect("parses");
        assert!(!assessment.is_valid());
    }

    #[test]
    fn request_defaults_to_summary_variant() {
        let request: ReportRequest =
            serde_json::from_value(json!({ "activities": [], "finalScore": 0 })).expect("parses");
        assert_eq!(request.variant, ReportVariant::Summary);
        assert_eq!(request.final_score, 0.0);
    }

    #[test]
    fn disability_round_trips_through_the_wire_format() {
        let assessment: Assessment =
            serde_json::from_value(assessment_json("Intelektualna", 0.9, 0.75, 1.2)).expect("parses");
        let value = serde_json::to_value(&assessment).expect("serializes");
        assert_eq!(value["disabilityType"], "Intelektualna");
    }
}
