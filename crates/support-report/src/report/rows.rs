use super::catalog;
use super::codes;
use super::domain::{Assessment, ReportRequest, ReportVariant};
use tracing::warn;

/// Sentinel printed in summary cells when no support is needed.
pub const NO_SUPPORT: &str = "Brak";
/// Capability flag: performs the activity independently.
pub const INDEPENDENT: &str = "TAK";
/// Capability flag: requires support.
pub const REQUIRES_SUPPORT: &str = "NIE";

/// One printable table row. Continuation rows of a detailed group leave
/// `ordinal` and `activity` blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub ordinal: String,
    pub activity: &'static str,
    pub disability: String,
    pub capability: &'static str,
    pub support_code: &'static str,
    pub frequency_code: &'static str,
    pub points: String,
}

/// All rows derived for one catalog activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRows {
    pub activity_index: usize,
    pub rows: Vec<ReportRow>,
}

impl ActivityRows {
    /// True when the group is the "no support needed" sentinel.
    pub fn is_independent(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].capability == INDEPENDENT
    }
}

/// Derive the canonical row model: exactly one group per catalog activity,
/// in catalog order, regardless of input order or omissions.
pub fn derive_rows(request: &ReportRequest) -> Vec<ActivityRows> {
    for activity in &request.activities {
        if activity.activity_index >= catalog::ACTIVITY_COUNT {
            warn!(
                index = activity.activity_index,
                "ignoring activity outside the catalog range"
            );
        }
    }

    (0..catalog::ACTIVITY_COUNT)
        .map(|index| {
            let entry = request
                .activities
                .iter()
                .find(|activity| activity.activity_index == index);
            let valid: Vec<&Assessment> = entry
                .map(|activity| {
                    activity
                        .assessments
                        .iter()
                        .filter(|assessment| assessment.is_valid())
                        .collect()
                })
                .unwrap_or_default();

            let max_points = entry.map(|activity| activity.max_points).unwrap_or(0.0);
            let rows = match (&valid[..], request.variant) {
                ([], variant) => vec![sentinel_row(index, variant)],
                (valid, ReportVariant::Summary) => {
                    vec![summary_row(index, max_points, valid)]
                }
                (valid, ReportVariant::Detailed) => detailed_rows(index, valid),
            };

            ActivityRows {
                activity_index: index,
                rows,
            }
        })
        .collect()
}

fn activity_name(index: usize) -> &'static str {
    catalog::name(index).unwrap_or("")
}

fn sentinel_row(index: usize, variant: ReportVariant) -> ReportRow {
    let (filler, points) = match variant {
        ReportVariant::Summary => (NO_SUPPORT.to_string(), NO_SUPPORT.to_string()),
        // The printed form shows an empty assessment with a zero score,
        // comma decimal separator included.
        ReportVariant::Detailed => (String::new(), "0,000".to_string()),
    };

    ReportRow {
        ordinal: (index + 1).to_string(),
        activity: activity_name(index),
        disability: filler,
        capability: INDEPENDENT,
        support_code: "",
        frequency_code: "",
        points,
    }
}

fn summary_row(index: usize, max_points: f64, valid: &[&Assessment]) -> ReportRow {
    let mut labels: Vec<&'static str> = Vec::new();
    for assessment in valid {
        if let Some(kind) = assessment.disability_type {
            if !labels.contains(&kind.label()) {
                labels.push(kind.label());
            }
        }
    }

    // Stable reduce: only a strictly higher score displaces the current
    // maximum, so ties keep the first-encountered assessment.
    let Some(top) = valid
        .iter()
        .copied()
        .reduce(|max, current| if current.points > max.points { current } else { max })
    else {
        return sentinel_row(index, ReportVariant::Summary);
    };

    let points = if max_points > 0.0 {
        max_points.to_string()
    } else {
        "0".to_string()
    };

    ReportRow {
        ordinal: (index + 1).to_string(),
        activity: activity_name(index),
        disability: labels.join(", "),
        capability: REQUIRES_SUPPORT,
        support_code: codes::support_code(top.support_level.value),
        frequency_code: codes::frequency_code(top.frequency.value),
        points,
    }
}

fn detailed_rows(index: usize, valid: &[&Assessment]) -> Vec<ReportRow> {
    valid
        .iter()
        .enumerate()
        .map(|(position, assessment)| {
            let first = position == 0;
            ReportRow {
                ordinal: if first {
                    (index + 1).to_string()
                } else {
                    String::new()
                },
                activity: if first { activity_name(index) } else { "" },
                disability: assessment
                    .disability_type
                    .map(|kind| kind.label().to_string())
                    .unwrap_or_default(),
                capability: REQUIRES_SUPPORT,
                support_code: codes::support_code(assessment.support_level.value),
                frequency_code: codes::frequency_code(assessment.frequency.value),
                points: format!("{:.3}", assessment.points),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::domain::{ActivityAssessment, DisabilityType, ScaleSelection};

    fn assessment(
        id: &str,
        disability: Option<DisabilityType>,
        support: f64,
        frequency: f64,
        points: f64,
    ) -> Assessment {
        Assessment {
            id: id.to_string(),
            disability_type: disability,
            support_level: ScaleSelection {
                value: support,
                label: String::new(),
            },
            frequency: ScaleSelection {
                value: frequency,
                label: String::new(),
            },
            points,
        }
    }

    fn activity(index: usize, assessments: Vec<Assessment>, max_points: f64) -> ActivityAssessment {
        ActivityAssessment {
            activity_index: index,
            activity_name: catalog::name(index).unwrap_or("").to_string(),
            assessments,
            max_points,
        }
    }

    fn request(activities: Vec<ActivityAssessment>, variant: ReportVariant) -> ReportRequest {
        ReportRequest {
            activities,
            final_score: 0.0,
            variant,
        }
    }

    #[test]
    fn empty_request_yields_32_sentinel_groups() {
        let groups = derive_rows(&request(Vec::new(), ReportVariant::Summary));
        assert_eq!(groups.len(), catalog::ACTIVITY_COUNT);
        for (index, group) in groups.iter().enumerate() {
            assert_eq!(group.activity_index, index);
            assert!(group.is_independent());
            let row = &group.rows[0];
            assert_eq!(row.ordinal, (index + 1).to_string());
            assert_eq!(row.disability, NO_SUPPORT);
            assert_eq!(row.points, NO_SUPPORT);
        }
    }

    #[test]
    fn catalog_order_wins_over_input_order() {
        let activities = vec![
            activity(
                7,
                vec![assessment(
                    "a",
                    Some(DisabilityType::Sensory),
                    0.8,
                    0.5,
                    0.4,
                )],
                0.4,
            ),
            activity(
                2,
                vec![assessment(
                    "b",
                    Some(DisabilityType::Physical),
                    0.9,
                    0.75,
                    0.675,
                )],
                0.675,
            ),
        ];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));

        assert_eq!(groups.len(), 32);
        assert_eq!(groups[2].rows[0].support_code, "WC");
        assert_eq!(groups[7].rows[0].support_code, "WT");
        assert!(groups[0].is_independent());
    }

    #[test]
    fn activity_with_only_invalid_assessments_renders_sentinel() {
        let activities = vec![activity(
            0,
            vec![
                assessment("a", None, 0.8, 0.5, 0.4),
                assessment("b", Some(DisabilityType::Physical), 0.0, 0.5, 0.0),
            ],
            0.4,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));
        assert!(groups[0].is_independent());
    }

    #[test]
    fn summary_picks_codes_from_the_max_points_assessment() {
        let activities = vec![activity(
            4,
            vec![
                assessment("a", Some(DisabilityType::Physical), 0.9, 0.75, 2.5),
                assessment("b", Some(DisabilityType::Psychological), 1.0, 1.0, 4.0),
            ],
            4.0,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));

        let row = &groups[4].rows[0];
        assert_eq!(row.support_code, "WS");
        assert_eq!(row.frequency_code, "A");
        assert_eq!(row.points, "4");
        assert_eq!(row.disability, "Fizyczna, Psychiczna");
        assert_eq!(row.capability, REQUIRES_SUPPORT);
    }

    #[test]
    fn summary_tie_keeps_the_first_assessment() {
        let activities = vec![activity(
            0,
            vec![
                assessment("first", Some(DisabilityType::Physical), 0.8, 0.5, 1.5),
                assessment("second", Some(DisabilityType::Physical), 1.0, 1.0, 1.5),
            ],
            1.5,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));

        let row = &groups[0].rows[0];
        assert_eq!(row.support_code, "WT");
        assert_eq!(row.frequency_code, "D");
        assert_eq!(row.points, "1.5");
    }

    #[test]
    fn summary_joins_distinct_disability_labels_once() {
        let activities = vec![activity(
            1,
            vec![
                assessment("a", Some(DisabilityType::Sensory), 0.8, 0.5, 0.4),
                assessment("b", Some(DisabilityType::Sensory), 0.9, 0.75, 0.675),
            ],
            0.675,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));
        assert_eq!(groups[1].rows[0].disability, "Sensoryczna");
    }

    #[test]
    fn detailed_emits_one_row_per_valid_assessment() {
        let activities = vec![activity(
            3,
            vec![
                assessment("a", Some(DisabilityType::Physical), 0.8, 0.5, 0.4),
                assessment("b", None, 0.9, 0.75, 0.675),
                assessment("c", Some(DisabilityType::Intellectual), 0.99, 0.95, 0.9405),
            ],
            0.9405,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Detailed));

        let rows = &groups[3].rows;
        assert_eq!(rows.len(), 2, "invalid assessment is filtered out");
        assert_eq!(rows[0].ordinal, "4");
        assert_eq!(rows[0].activity, catalog::name(3).unwrap());
        assert_eq!(rows[0].points, "0.400");
        assert_eq!(rows[1].ordinal, "");
        assert_eq!(rows[1].activity, "");
        assert_eq!(rows[1].support_code, "WP");
        assert_eq!(rows[1].frequency_code, "B");
        assert_eq!(rows[1].points, "0.941");
    }

    #[test]
    fn detailed_sentinel_shows_empty_cells_and_zero_score() {
        let groups = derive_rows(&request(Vec::new(), ReportVariant::Detailed));
        let row = &groups[9].rows[0];
        assert_eq!(row.disability, "");
        assert_eq!(row.capability, INDEPENDENT);
        assert_eq!(row.support_code, "");
        assert_eq!(row.points, "0,000");
    }

    #[test]
    fn out_of_range_indexes_are_ignored() {
        let activities = vec![activity(
            40,
            vec![assessment(
                "a",
                Some(DisabilityType::Physical),
                0.8,
                0.5,
                0.4,
            )],
            0.4,
        )];
        let groups = derive_rows(&request(activities, ReportVariant::Summary));
        assert_eq!(groups.len(), 32);
        assert!(groups.iter().all(ActivityRows::is_independent));
    }
}
