use anyhow::Context;
use health_risk::utils::logging::{log_assessment, log_credential_issued};
use health_risk::{HealthInput, RiskScorer, calculate_sleep_score, generate_access_key};
use log::{info, warn};
use std::time::Instant;

fn sample_inputs() -> Vec<(&'static str, HealthInput)> {
    vec![
        ("healthy adult", HealthInput::new(vec![], 0, 80).with_age(34)),
        (
            "asthma follow-up",
            HealthInput::new(vec!["cough".to_string(), "shortness-of-breath".to_string()], 6, 55)
                .with_past_diagnoses(vec!["Asthma".to_string()])
                .with_activity_level("sedentary"),
        ),
        (
            "chest tightness",
            HealthInput::new(vec!["chest-tightness".to_string()], 8, 40).with_age(50),
        ),
        (
            "high lifestyle risk",
            HealthInput::new(vec!["fatigue".to_string(), "dizziness".to_string()], 7, 35)
                .with_past_diagnoses(vec!["Heart Disease".to_string(), "Diabetes".to_string()])
                .with_smoking(true)
                .with_alcohol(true)
                .with_age(67),
        ),
    ]
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scorer = RiskScorer::default();

    // Example 1: Score a set of sample inputs
    for (label, input) in sample_inputs() {
        if let Err(e) = input.validate() {
            warn!("{label}: input fails validation ({e}), scoring anyway");
        }

        let start = Instant::now();
        let assessment = scorer.analyze(&input);
        log_assessment(label, &assessment, Some(start.elapsed()));

        let json = assessment
            .to_json_pretty()
            .with_context(|| format!("Failed to serialize assessment for {label}"))?;
        println!("{json}");
    }

    // Example 2: Sleep scores
    for (hours, quality) in [(8.0, "excellent"), (6.5, "good"), (9.5, "good"), (4.0, "poor")] {
        info!(
            "Sleep score for {hours} h of {quality} sleep: {}",
            calculate_sleep_score(hours, quality)
        );
    }

    // Example 3: Display credential
    let credential = generate_access_key();
    log_credential_issued(&credential);

    Ok(())
}
