use chrono::{TimeZone, Utc};
use wr_quality::{Classifier, QualityLabel, SensorReading, ThresholdClassifier};
use wr_readings::{JsonlReadingStore, MemoryReadingStore, ReadingStore, ReadingsError};

fn temp_log(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("wr_readings_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("readings.jsonl")
}

fn classified(ph: f64, turbidity: f64, temp: f64, tds: f64) -> (SensorReading, wr_quality::Classification) {
    let reading = SensorReading::new(ph, turbidity, temp, tds).unwrap();
    let classification = ThresholdClassifier::default().classify(&reading).unwrap();
    (reading, classification)
}

fn fill(store: &mut impl ReadingStore) {
    let t0 = Utc.with_ymd_and_hms(2026, 5, 1, 6, 0, 0).unwrap();
    for (i, (ph, turb)) in [(7.2, 1.0), (6.0, 8.0), (3.5, 60.0)].into_iter().enumerate() {
        let (r, c) = classified(ph, turb, 26.0, 350.0);
        let at = t0 + chrono::Duration::hours(i as i64);
        store.append_at(r, &c, at).unwrap();
    }
}

#[test]
fn memory_store_ids_and_recent() {
    let mut store = MemoryReadingStore::new();
    assert_eq!(store.count().unwrap(), 0);
    fill(&mut store);

    assert_eq!(store.count().unwrap(), 3);
    let recent = store.recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, 3);
    assert_eq!(recent[1].id, 2);
    assert_eq!(recent[0].timestamp, "2026-05-01T08:00:00Z");
}

#[test]
fn stats_count_labels() {
    let mut store = MemoryReadingStore::new();
    fill(&mut store);
    let stats = store.stats().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.count_for(QualityLabel::SafeForReuse), 1);
    assert_eq!(stats.count_for(QualityLabel::NeedsTreatment), 1);
    assert_eq!(stats.count_for(QualityLabel::Unsafe), 1);
    assert_eq!(stats.avg_temperature, 26.0);
    assert_eq!(stats.avg_ph, 5.57);
    assert_eq!(stats.water_recovered_l, 100.0);
    assert_eq!(stats.water_treated_l, 80.0);
    assert_eq!(stats.water_reused_l, 85.0);
}

#[test]
fn jsonl_store_persists_and_continues_ids() {
    let path = temp_log("persist");
    {
        let mut store = JsonlReadingStore::open(&path).unwrap();
        fill(&mut store);
    }

    let mut reopened = JsonlReadingStore::open(&path).unwrap();
    assert_eq!(reopened.count().unwrap(), 3);
    let (r, c) = classified(7.0, 0.5, 24.0, 200.0);
    let record = reopened.append(r, &c).unwrap();
    assert_eq!(record.id, 4);
    assert!(record.timestamp.ends_with('Z'));

    let all = reopened.records().unwrap();
    let ids: Vec<u64> = all.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(all[0].label, QualityLabel::SafeForReuse);
}

#[test]
fn missing_file_reads_as_empty() {
    let path = temp_log("empty");
    let store = JsonlReadingStore::open(&path).unwrap();
    assert_eq!(store.count().unwrap(), 0);
    assert_eq!(store.stats().unwrap().avg_ph, 0.0);
}

#[test]
fn corrupt_line_is_reported() {
    let path = temp_log("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{\"id\":1}\nnot json\n").unwrap();
    match JsonlReadingStore::open(&path) {
        Err(ReadingsError::Corrupt { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected corrupt log error, got {other:?}"),
    }
}

fn write_tampered_log(name: &str, tamper: impl FnOnce(&mut wr_readings::ReadingRecord)) -> std::path::PathBuf {
    let mut memory = MemoryReadingStore::new();
    fill(&mut memory);
    let mut records = memory.records().unwrap();
    tamper(&mut records[1]);

    let path = temp_log(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let body: String = records
        .iter()
        .map(|r| serde_json::to_string(r).unwrap() + "\n")
        .collect();
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn out_of_range_reading_is_reported() {
    let path = write_tampered_log("out_of_range", |r| {
        r.reading.ph = 99.0;
        r.reading.turbidity_ntu = -5.0;
    });
    match JsonlReadingStore::open(&path) {
        Err(ReadingsError::Corrupt { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("ph"), "{message}");
        }
        other => panic!("expected corrupt log error, got {other:?}"),
    }
}

#[test]
fn confidence_outside_unit_interval_is_reported() {
    let path = write_tampered_log("bad_confidence", |r| r.confidence = 1.5);
    match JsonlReadingStore::open(&path) {
        Err(ReadingsError::Corrupt { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("confidence"), "{message}");
        }
        other => panic!("expected corrupt log error, got {other:?}"),
    }
}
