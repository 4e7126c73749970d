//! End-to-End Pipeline Tests
//!
//! Exercises the full path from raw log text through parsing, kinematic
//! analysis, resampling and CSV export, including the multi-performer
//! choreography merge with mirroring and degraded inputs.

use choreo_lab::analysis::kinematics::ChannelLimits;
use choreo_lab::analysis::{calculate_stats, group_frames_into_intervals};
use choreo_lab::export::{
    build_log_table, create_full_choreography, csv_bytes, csv_file_name, Cell,
    ChoreographyMapping, MappingEntry,
};
use choreo_lab::parse::{parse_section, ParsedLog, CHANNEL_ROTATION};
use choreo_lab::resample::ResamplePolicy;

// ============================================================================
// Test Helpers
// ============================================================================

/// Render a log with the three standard sections from value slices.
fn log_text(rotation: &[f64], left: &[f64], right: &[f64]) -> String {
    let mut text = String::new();
    for (name, values) in [
        ("Rotation", rotation),
        ("Left Arm", left),
        ("Right Arm", right),
    ] {
        text.push_str(&format!("User Data: {}\n", name));
        for (i, v) in values.iter().enumerate() {
            text.push_str(&format!("  Frame {}: {}\n", i, v));
        }
    }
    text
}

fn mapping(entries: &[(&str, &[i32])]) -> ChoreographyMapping {
    ChoreographyMapping {
        entries: entries
            .iter()
            .map(|(file, modules)| MappingEntry {
                file: file.to_string(),
                modules: modules.to_vec(),
            })
            .collect(),
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_absent_section_is_none_present_section_has_exact_keys() {
    let text = log_text(&[1.0, 2.0, 3.0], &[5.0], &[]);

    assert!(parse_section(&text, "Torso").is_none());

    let rotation = parse_section(&text, "Rotation").unwrap();
    let keys: Vec<usize> = rotation.keys().copied().collect();
    assert_eq!(keys, vec![0, 1, 2]);

    let left = parse_section(&text, "Left Arm").unwrap();
    assert_eq!(left.len(), 1);
}

#[test]
fn test_parsed_log_from_messy_text() {
    let text = "\
garbage preamble
User Data: Rotation
  Frame 0: 1.0
  Frame 0: 2.0
  not a frame line
  Frame 3: -1e1
NULL OBJECTS
User Data: Left Arm
  Frame 0: 9.0
";
    let log = ParsedLog::from_text("messy.txt", text);
    let rotation = log.channel(CHANNEL_ROTATION).unwrap();
    // Duplicate frame 0: last write wins
    assert_eq!(rotation[&0], 2.0);
    assert_eq!(rotation[&3], -10.0);
    // The sentinel only terminates the Rotation section; the Left Arm
    // header after it still starts a section of its own
    let left = log.channel("Left Arm").unwrap();
    assert_eq!(left[&0], 9.0);
    assert_eq!(log.frames, vec![0, 3]);
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_stats_to_intervals_path() {
    // A burst of fast motion in the middle of an otherwise calm series
    let values = [0.0, 0.0, 0.0, 30.0, 60.0, 90.0, 90.0, 90.0];
    let rotation: Vec<f64> = values.to_vec();
    let text = log_text(&rotation, &[], &[]);
    let log = ParsedLog::from_text("burst.txt", &text);

    let limits = ChannelLimits {
        speed: 100.0,
        accel: f64::MAX,
    };
    let series = log.channel(CHANNEL_ROTATION).unwrap();
    let stats = calculate_stats(series, &log.frames, &limits);

    // Steps of 30 units at 50 fps: speed = 30 * 50 / 6 = 250 at frames 3..5
    assert_eq!(stats.max_speed, 250.0);
    assert_eq!(stats.max_speed_frame, 3);
    assert_eq!(stats.exceeded_speed.len(), 3);

    let intervals = group_frames_into_intervals(&stats.exceeded_speed);
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals[0].start, 3);
    assert_eq!(intervals[0].end, 5);
    assert_eq!(intervals[0].peak, 250.0);
}

#[test]
fn test_interval_coalescing_reference_case() {
    use choreo_lab::analysis::kinematics::ExceedanceEvent;

    let events: Vec<ExceedanceEvent> = [(5, 1.0), (6, 3.0), (7, 2.0), (10, 5.0), (11, 4.0)]
        .iter()
        .map(|&(frame, magnitude)| ExceedanceEvent { frame, magnitude })
        .collect();

    let intervals = group_frames_into_intervals(&events);
    assert_eq!(intervals.len(), 2);
    assert_eq!(
        (intervals[0].start, intervals[0].end, intervals[0].peak),
        (5, 7, 3.0)
    );
    assert_eq!(
        (intervals[1].start, intervals[1].end, intervals[1].peak),
        (10, 11, 5.0)
    );
}

// ============================================================================
// Resampling + CSV export
// ============================================================================

#[test]
fn test_decimation_reference_case() {
    let text = log_text(&[0.0, 10.0, 20.0, 30.0, 40.0], &[], &[]);
    let log = ParsedLog::from_text("decimate.txt", &text);

    let series = log.channel(CHANNEL_ROTATION).unwrap();
    let out = ResamplePolicy::PairAveraging.resample(series, &log.frames);
    assert_eq!(out, vec![0.0, 15.0, 35.0]);
}

#[test]
fn test_csv_export_exact_bytes() {
    let mut table = choreo_lab::CsvTable::new(vec!["0".into(), "1".into(), "2".into()]);
    table.push_row(vec![Cell::Num(1.0), Cell::Num(2.0), Cell::Num(3.0)]);
    assert_eq!(csv_bytes(&table), b"0,1,2\n1,2,3");
}

#[test]
fn test_single_log_export_shape() {
    let text = log_text(
        &[0.0, 10.0, 20.0, 30.0, 40.0],
        &[1.0, 1.0, 1.0, 1.0, 1.0],
        &[2.0, 2.0, 2.0, 2.0, 2.0],
    );
    let log = ParsedLog::from_text("show1.txt", &text);
    let table = build_log_table(&log, ResamplePolicy::PairAveraging);

    assert_eq!(table.headers, vec!["0", "1", "2"]);
    assert_eq!(table.rows.len(), 3);
    for row in &table.rows {
        assert_eq!(row.len(), table.headers.len());
    }

    assert_eq!(csv_file_name(&log.file_name), "show1.csv");
}

// ============================================================================
// Choreography merge
// ============================================================================

#[test]
fn test_merge_mirrored_module_swaps_and_flips() {
    let text = log_text(&[10.0, 20.0, 30.0], &[1.0, 2.0, 3.0], &[5.0, 6.0, 7.0]);
    let log = ParsedLog::from_text("a.txt", &text);

    let plain = create_full_choreography(&[log.clone()], &mapping(&[("a.txt", &[2])]));
    let mirrored = create_full_choreography(&[log], &mapping(&[("a.txt", &[-2])]));

    // Same column block either way
    assert_eq!(plain.headers, mirrored.headers);
    assert_eq!(plain.headers, vec!["3", "4", "5"]);

    for (p, m) in plain.rows.iter().zip(mirrored.rows.iter()) {
        // Rotation carries the opposite sign
        match (&p[0], &m[0]) {
            (Cell::Num(a), Cell::Num(b)) => assert_eq!(*a, -*b),
            _ => panic!("expected numeric rotation cells"),
        }
        // Arm columns are swapped
        assert_eq!(p[1], m[2]);
        assert_eq!(p[2], m[1]);
    }
}

#[test]
fn test_merge_missing_source_emits_blank_block_without_error() {
    let text = log_text(&[1.0, 2.0, 3.0], &[0.0; 3], &[0.0; 3]);
    let log = ParsedLog::from_text("a.txt", &text);

    let table = create_full_choreography(
        &[log],
        &mapping(&[("a.txt", &[1]), ("missing.txt", &[2])]),
    );

    assert_eq!(table.headers.len(), 6);
    for row in &table.rows {
        assert_eq!(row.len(), 6);
        assert_eq!(row[3], Cell::Empty);
        assert_eq!(row[4], Cell::Empty);
        assert_eq!(row[5], Cell::Empty);
    }
    // Blank cells render as empty fields, row width is preserved
    let bytes = csv_bytes(&table);
    let text = String::from_utf8(bytes).unwrap();
    for line in text.lines() {
        assert_eq!(line.matches(',').count(), 5);
    }
}

#[test]
fn test_full_pipeline_two_performers() {
    let a = ParsedLog::from_text(
        "lead.txt",
        &log_text(&[0.0, 10.0, 20.0, 30.0], &[1.0; 4], &[2.0; 4]),
    );
    let b = ParsedLog::from_text(
        "follow.txt",
        &log_text(&[5.0, 5.0], &[3.0, 3.0], &[4.0, 4.0]),
    );

    let m = mapping(&[("lead.txt", &[1]), ("follow.txt", &[-2])]);
    let table = create_full_choreography(&[a, b], &m);

    // Longest rotation series has 4 samples: decimated positions 0 and 2
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.headers, vec!["0", "1", "2", "3", "4", "5"]);

    // Lead, frame 0: rotation as-is, right arm negated
    assert_eq!(table.rows[0][0], Cell::Num(0.0));
    assert_eq!(table.rows[0][2], Cell::Num(-2.0));

    // Follow is mirrored: rotation flipped, arms swapped
    assert_eq!(table.rows[0][3], Cell::Num(-5.0));
    assert_eq!(table.rows[0][4], Cell::Num(-4.0));
    assert_eq!(table.rows[0][5], Cell::Num(3.0));

    // Follow ran out of samples by position 2: missing frames read as 0,
    // so the averages use half the last real sample
    assert_eq!(table.rows[1][3], Cell::Num(-2.5));
    assert_eq!(table.rows[1][4], Cell::Num(-2.0));
    assert_eq!(table.rows[1][5], Cell::Num(1.5));

    let bytes = csv_bytes(&table);
    assert!(!bytes.is_empty());
    assert!(!bytes.ends_with(b"\n"));
}
