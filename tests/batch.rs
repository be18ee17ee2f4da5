//! Integration tests for stats batch validation.

use team_record_web::{
    validate_and_normalize_batch, BatchConfig, EntrySlot, RecordError, StatsEntry,
};
use uuid::Uuid;

fn filled(player: Uuid, goals: i64) -> StatsEntry {
    StatsEntry {
        goals: Some(goals),
        ..StatsEntry::for_player(player)
    }
}

#[test]
fn default_config_offers_five_blank_slots() {
    let slots = BatchConfig::default().blank_batch();
    assert_eq!(slots.len(), 5);
    assert!(slots.into_iter().all(|s| s.classify() == EntrySlot::Blank));
}

#[test]
fn slot_count_follows_config() {
    let config = BatchConfig { extra_slots: 3 };
    assert_eq!(config.blank_batch().len(), 3);
}

#[test]
fn all_blank_batch_is_valid_and_empty() {
    let game = Uuid::new_v4();
    let params = validate_and_normalize_batch(BatchConfig::default().blank_batch(), game).unwrap();
    assert!(params.is_empty());
}

#[test]
fn empty_batch_is_valid() {
    assert!(validate_and_normalize_batch(Vec::new(), Uuid::new_v4())
        .unwrap()
        .is_empty());
}

#[test]
fn distinct_players_keep_submission_order_and_skip_blanks() {
    let game = Uuid::new_v4();
    let (p1, p2, p3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let entries = vec![
        filled(p2, 1),
        StatsEntry::default(),
        filled(p1, 2),
        StatsEntry::default(),
        filled(p3, 0),
    ];

    let params = validate_and_normalize_batch(entries, game).unwrap();

    let players: Vec<Uuid> = params.iter().map(|p| p.player).collect();
    assert_eq!(players, vec![p2, p1, p3]);
    assert!(params.iter().all(|p| p.game == game));
    assert_eq!(params[1].goals, 2);
}

#[test]
fn same_player_in_first_two_slots_is_rejected() {
    let p = Uuid::new_v4();
    let mut entries = BatchConfig::default().blank_batch();
    entries[0] = StatsEntry::for_player(p);
    entries[1] = StatsEntry::for_player(p);

    let err = validate_and_normalize_batch(entries, Uuid::new_v4()).unwrap_err();
    assert_eq!(err, RecordError::DuplicatePlayer(p));
}

#[test]
fn duplicate_anywhere_in_batch_is_rejected() {
    let (p, q) = (Uuid::new_v4(), Uuid::new_v4());
    let entries = vec![
        StatsEntry::for_player(p),
        StatsEntry::default(),
        StatsEntry::for_player(q),
        StatsEntry::default(),
        StatsEntry::for_player(p),
    ];
    assert!(matches!(
        validate_and_normalize_batch(entries, Uuid::new_v4()),
        Err(RecordError::DuplicatePlayer(id)) if id == p
    ));
}

#[test]
fn duplicate_wins_over_malformed_entry() {
    let p = Uuid::new_v4();
    let entries = vec![
        filled(Uuid::new_v4(), -1),
        StatsEntry::for_player(p),
        StatsEntry::for_player(p),
    ];
    assert!(matches!(
        validate_and_normalize_batch(entries, Uuid::new_v4()),
        Err(RecordError::DuplicatePlayer(_))
    ));
}

#[test]
fn absent_counters_default_to_zero_and_remark_to_empty() {
    let p = Uuid::new_v4();
    let params = validate_and_normalize_batch(vec![StatsEntry::for_player(p)], Uuid::new_v4())
        .unwrap();
    let s = &params[0];
    assert_eq!(
        (s.goals, s.assists, s.passes, s.intercepts, s.dribbles, s.tackles),
        (0, 0, 0, 0, 0, 0)
    );
    assert_eq!(s.remark, "");
}

#[test]
fn negative_counter_rejects_whole_batch() {
    let entries = vec![
        filled(Uuid::new_v4(), 3),
        StatsEntry {
            tackles: Some(-2),
            ..StatsEntry::for_player(Uuid::new_v4())
        },
    ];

    let err = validate_and_normalize_batch(entries, Uuid::new_v4()).unwrap_err();
    assert_eq!(
        err,
        RecordError::OutOfRange {
            entry: Some(1),
            field: "tackles",
            value: -2
        }
    );
    assert_eq!(err.entry(), Some(1));
    assert_eq!(err.field(), Some("tackles"));
}

#[test]
fn blank_slot_with_counters_is_ignored() {
    let entries = vec![StatsEntry {
        goals: Some(-5),
        ..StatsEntry::default()
    }];
    assert!(validate_and_normalize_batch(entries, Uuid::new_v4())
        .unwrap()
        .is_empty());
}

#[test]
fn entries_deserialize_with_missing_fields() {
    let p = Uuid::new_v4();
    let json = format!(r#"[{{"player": "{p}", "goals": 2}}, {{}}, {{"player": null}}]"#);
    let entries: Vec<StatsEntry> = serde_json::from_str(&json).unwrap();
    let params = validate_and_normalize_batch(entries, Uuid::new_v4()).unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].goals, 2);
}
