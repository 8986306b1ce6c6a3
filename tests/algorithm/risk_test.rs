#[cfg(test)]
mod tests {
    use health_risk::algorithm::health::risk::EMERGENCY_WARNING;
    use health_risk::algorithm::health::risk::weights::CHEST_TIGHTNESS;
    use health_risk::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    /// A spread of inputs covering every rule branch
    fn input_grid() -> Vec<HealthInput> {
        let symptom_sets = [
            vec![],
            strings(&["headache"]),
            strings(&["fever", "cough", "fatigue"]),
            strings(&["shortness-of-breath", "palpitations", "dizziness", "unlisted"]),
            strings(&[CHEST_TIGHTNESS]),
        ];
        let diagnosis_sets = [
            vec![],
            strings(&["Asthma"]),
            strings(&["Heart Disease", "Diabetes", "COPD"]),
        ];

        let mut inputs = Vec::new();
        for symptoms in &symptom_sets {
            for severity in [0, 5, 10] {
                for sleep_score in [20, 60, 90] {
                    for diagnoses in &diagnosis_sets {
                        for age in [None, Some(30), Some(50), Some(75)] {
                            let mut input =
                                HealthInput::new(symptoms.clone(), severity, sleep_score)
                                    .with_past_diagnoses(diagnoses.clone());
                            input.age = age;
                            inputs.push(input.clone());
                            inputs.push(
                                input
                                    .with_smoking(true)
                                    .with_alcohol(true)
                                    .with_activity_level("sedentary"),
                            );
                        }
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn test_chest_tightness_example() {
        let input = HealthInput::new(strings(&["chest-tightness"]), 8, 40).with_age(50);
        let assessment = analyze_health(&input);

        // 25 * 0.8 + 15 (low sleep) + 8 (age over 45)
        assert_eq!(assessment.health_risk_score, 43);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Emergency);
        assert_eq!(assessment.recommended_doctor_type, DoctorType::Cardiologist);
        assert!(
            assessment
                .reasoning
                .iter()
                .any(|r| r.starts_with("Low sleep score"))
        );
        assert!(
            assessment
                .reasoning
                .last()
                .is_some_and(|r| r == EMERGENCY_WARNING)
        );
    }

    #[test]
    fn test_empty_input_example() {
        let input = HealthInput::new(vec![], 0, 80);
        let assessment = analyze_health(&input);

        assert_eq!(assessment.health_risk_score, 0);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Normal);
        assert_eq!(assessment.recommended_doctor_type, DoctorType::GeneralPhysician);
        assert_eq!(assessment.reasoning, vec!["Overall health status appears stable"]);
        assert_eq!(
            assessment.summary,
            "Your health risk score is 0/100, which is considered low. \
             Keep up your current habits and check in again if anything changes."
        );
    }

    #[test]
    fn test_monitor_with_asthma() {
        let input = HealthInput::new(strings(&["cough", "shortness-of-breath"]), 6, 55)
            .with_past_diagnoses(strings(&["Asthma"]))
            .with_activity_level("sedentary");
        let assessment = analyze_health(&input);

        // 4.8 + 12 + 8 + 10 + 10 = 44.8
        assert_eq!(assessment.health_risk_score, 45);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Monitor);
        assert_eq!(assessment.recommended_doctor_type, DoctorType::Pulmonologist);
        assert_eq!(assessment.risk_label(), RiskLabel::Moderate);
        assert_eq!(assessment.reasoning.len(), 5);
        assert!(assessment.reasoning[4].starts_with("Monitoring advised"));
    }

    #[test]
    fn test_score_is_clamped_at_100() {
        let input = HealthInput::new(strings(&["fatigue", "dizziness"]), 7, 35)
            .with_past_diagnoses(strings(&["Heart Disease", "Diabetes"]))
            .with_smoking(true)
            .with_alcohol(true)
            .with_age(67);
        let scorer = RiskScorer::default();

        assert!(scorer.raw_score(&input) > 100.0);
        let assessment = scorer.analyze(&input);
        assert_eq!(assessment.health_risk_score, 100);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Emergency);
        assert_eq!(assessment.recommended_doctor_type, DoctorType::EmergencyMedicine);
        assert_eq!(assessment.risk_label(), RiskLabel::High);
        assert_eq!(
            assessment.reasoning.last().map(String::as_str),
            Some(EMERGENCY_WARNING)
        );
    }

    #[test]
    fn test_reasoning_follows_rule_order() {
        let input = HealthInput::new(strings(&["fever"]), 4, 65)
            .with_past_diagnoses(strings(&["Hypertension", "Gout"]))
            .with_smoking(true)
            .with_alcohol(true)
            .with_activity_level("sedentary")
            .with_age(61);
        let reasoning = analyze_health(&input).reasoning;

        let prefixes = [
            "Reported 1 symptom(s)",
            "Moderate sleep score",
            "Past diagnosis of Hypertension",
            "Past diagnosis of Gout",
            "Smoking",
            "Alcohol",
            "A sedentary lifestyle",
            "Age over 60",
        ];
        assert_eq!(reasoning.len(), prefixes.len() + 1);
        for (entry, prefix) in reasoning.iter().zip(prefixes) {
            assert!(entry.starts_with(prefix), "{entry:?} should start with {prefix:?}");
        }
    }

    #[test]
    fn test_allergies_do_not_affect_scoring() {
        let input = HealthInput::new(strings(&["fever"]), 5, 60).with_age(50);
        let with_allergies = input
            .clone()
            .with_allergies(strings(&["penicillin", "peanuts"]));

        assert_eq!(analyze_health(&input), analyze_health(&with_allergies));
    }

    #[test]
    fn test_score_range_and_urgency_invariants() {
        let scorer = RiskScorer::default();
        for input in input_grid() {
            let assessment = scorer.analyze(&input);
            let score = assessment.health_risk_score;

            assert!(score <= 100, "score {score} out of range for {input:?}");
            if score >= 70 {
                assert_eq!(assessment.urgency_level, UrgencyLevel::Emergency);
            }
            if input.has_symptom(CHEST_TIGHTNESS) {
                assert_eq!(assessment.urgency_level, UrgencyLevel::Emergency);
                assert_eq!(assessment.recommended_doctor_type, DoctorType::Cardiologist);
            } else if score < 40 {
                assert_eq!(assessment.urgency_level, UrgencyLevel::Normal);
                assert_eq!(assessment.recommended_doctor_type, DoctorType::GeneralPhysician);
            } else if score < 70 {
                assert_eq!(assessment.urgency_level, UrgencyLevel::Monitor);
            }
        }
    }

    #[test]
    fn test_single_factor_never_lowers_raw_score() {
        let scorer = RiskScorer::default();
        for input in input_grid() {
            let base = scorer.raw_score(&input);

            let mut with_symptom = input.clone();
            with_symptom.symptoms.push("nausea".to_string());
            assert!(scorer.raw_score(&with_symptom) >= base);

            let mut with_unknown_symptom = input.clone();
            with_unknown_symptom.symptoms.push("hiccups".to_string());
            assert!(scorer.raw_score(&with_unknown_symptom) >= base);

            let mut with_diagnosis = input.clone();
            with_diagnosis.past_diagnoses.push("Stroke".to_string());
            assert!(scorer.raw_score(&with_diagnosis) > base);

            assert!(scorer.raw_score(&input.clone().with_smoking(true)) >= base);
            assert!(scorer.raw_score(&input.clone().with_alcohol(true)) >= base);
            assert!(scorer.raw_score(&input.clone().with_activity_level("sedentary")) >= base);

            if input.age.is_none() {
                assert!(scorer.raw_score(&input.clone().with_age(46)) > base);
                assert!(scorer.raw_score(&input.clone().with_age(61)) > base);
            }
        }
    }

    #[test]
    fn test_clamping_preserves_monotonicity() {
        let scorer = RiskScorer::default();
        let input = HealthInput::new(strings(&["fever"]), 10, 90).with_age(70);
        let baseline = scorer.analyze(&input).health_risk_score;
        let riskier = scorer.analyze(&input.with_smoking(true)).health_risk_score;
        assert!(riskier >= baseline);
    }

    #[test]
    fn test_summary_label_and_urgency_can_diverge() {
        // 10 * 0.5 * 2 + 15 (low sleep) + 20 + 15 + 15 = 75
        let input = HealthInput::new(strings(&["fever", "fever"]), 5, 10)
            .with_past_diagnoses(strings(&["Heart Disease", "Diabetes"]))
            .with_smoking(true);
        let assessment = analyze_health(&input);

        assert_eq!(assessment.health_risk_score, 75);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Emergency);
        assert_eq!(assessment.risk_label(), RiskLabel::Elevated);
        assert!(assessment.summary.contains("75/100, which is considered elevated"));
        assert!(assessment.summary.contains("sleep quality needs attention"));
        assert!(assessment.summary.ends_with("Please seek immediate medical attention."));
    }

    #[test]
    fn test_custom_thresholds() {
        let scorer = RiskScorer::new(ScoringConfig {
            monitor_threshold: 10,
            emergency_threshold: 20,
            ..ScoringConfig::default()
        })
        .unwrap();

        let input = HealthInput::new(vec![], 0, 45);
        let assessment = scorer.analyze(&input);
        assert_eq!(assessment.health_risk_score, 15);
        assert_eq!(assessment.urgency_level, UrgencyLevel::Monitor);
        // the summary label is not configurable
        assert_eq!(assessment.risk_label(), RiskLabel::Low);
    }
}
