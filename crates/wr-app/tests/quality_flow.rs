use wr_app::{AppError, classify_reading, quality_report, reading_stats};
use wr_quality::{QualityLabel, SensorReading, ThresholdClassifier, WaterSample};
use wr_readings::{MemoryReadingStore, ReadingStore};

#[test]
fn classify_without_store() {
    let reading = SensorReading::new(7.1, 2.0, 24.0, 310.0).unwrap();
    let (classification, record) =
        classify_reading(&ThresholdClassifier::default(), &reading, None).unwrap();
    assert_eq!(classification.label(), QualityLabel::SafeForReuse);
    assert!(record.is_none());
}

#[test]
fn classify_and_log() {
    let classifier = ThresholdClassifier::default();
    let mut store = MemoryReadingStore::new();

    for (ph, turbidity) in [(7.0, 1.0), (5.0, 20.0), (2.0, 90.0), (7.2, 3.0)] {
        let reading = SensorReading::new(ph, turbidity, 25.0, 400.0).unwrap();
        let (_, record) = classify_reading(&classifier, &reading, Some(&mut store)).unwrap();
        assert!(record.is_some());
    }

    let stats = reading_stats(&store).unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.safe_count, 2);
    assert_eq!(stats.treatment_count, 1);
    assert_eq!(stats.unsafe_count, 1);
    assert_eq!(stats.avg_ph, 5.3);

    let recent = store.recent(1).unwrap();
    assert_eq!(recent[0].id, 4);
}

#[test]
fn invalid_reading_is_not_logged() {
    let mut store = MemoryReadingStore::new();
    let reading = SensorReading {
        ph: 15.0,
        turbidity_ntu: 1.0,
        temperature_c: 20.0,
        tds_mg_l: 100.0,
    };
    let err = classify_reading(&ThresholdClassifier::default(), &reading, Some(&mut store));
    assert!(matches!(err, Err(AppError::Quality(_))));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn treated_reference_meets_is10500() {
    let report = quality_report(&WaterSample::TREATED_REFERENCE);
    assert_eq!(report.checks.len(), 8);
    assert!(report.all_pass);

    let cloudy = WaterSample {
        turbidity_ntu: 4.0,
        ..WaterSample::TREATED_REFERENCE
    };
    let report = quality_report(&cloudy);
    assert!(!report.all_pass);
    assert_eq!(report.passed, 7);
}
