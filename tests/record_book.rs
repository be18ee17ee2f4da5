//! Integration tests for the record book: names, lookups and updates.

use team_record_web::{
    ErrorKind, PlayerParams, RecordBook, RecordError, RivalParams,
};
use uuid::Uuid;

fn rival_params(name: &str) -> RivalParams {
    RivalParams {
        team_name: name.into(),
        home: "test_home".into(),
        remark: String::new(),
    }
}

fn player_params(name: &str, number: u32) -> PlayerParams {
    PlayerParams {
        name: name.into(),
        jersey_number: number,
        remark: String::new(),
    }
}

#[test]
fn add_and_look_up_rival() {
    let mut book = RecordBook::new();
    let id = book.add_rival(rival_params("test_team")).unwrap().id;
    assert_eq!(book.rival(id).unwrap().team_name, "test_team");
    assert_eq!(book.rivals.len(), 1);
}

#[test]
fn rival_names_are_unique() {
    let mut book = RecordBook::new();
    book.add_rival(rival_params("Rovers")).unwrap();
    let err = book.add_rival(rival_params(" Rovers ")).unwrap_err();
    assert!(matches!(err, RecordError::DuplicateName { field: "team_name", .. }));
    assert_eq!(err.kind(), ErrorKind::Field);
    assert_eq!(book.rivals.len(), 1);
}

#[test]
fn names_differing_only_in_case_are_distinct() {
    let mut book = RecordBook::new();
    book.add_rival(rival_params("Rovers")).unwrap();
    book.add_rival(rival_params("ROVERS")).unwrap();
    book.add_player(player_params("test_name", 10)).unwrap();
    book.add_player(player_params("Test_Name", 11)).unwrap();
    assert_eq!(book.rivals.len(), 2);
    assert_eq!(book.players.len(), 2);
}

#[test]
fn non_ascii_names_are_unique() {
    let mut book = RecordBook::new();
    book.add_player(player_params("山田", 9)).unwrap();
    assert!(matches!(
        book.add_player(player_params("山田", 10)),
        Err(RecordError::DuplicateName { field: "name", .. })
    ));
    book.add_rival(rival_params("東京FC")).unwrap();
    assert!(book.add_rival(rival_params("東京FC")).is_err());
}

#[test]
fn rival_can_be_updated_to_its_own_name() {
    let mut book = RecordBook::new();
    let id = book.add_rival(rival_params("Rovers")).unwrap().id;
    let updated = book
        .update_rival(
            id,
            RivalParams {
                remark: "updated".into(),
                ..rival_params("Rovers")
            },
        )
        .unwrap();
    assert_eq!(updated.remark, "updated");
}

#[test]
fn rival_cannot_take_another_rivals_name() {
    let mut book = RecordBook::new();
    book.add_rival(rival_params("Rovers")).unwrap();
    let id = book.add_rival(rival_params("United")).unwrap().id;
    assert!(book.update_rival(id, rival_params("Rovers")).is_err());
    assert_eq!(book.rival(id).unwrap().team_name, "United");
}

#[test]
fn player_names_are_unique() {
    let mut book = RecordBook::new();
    book.add_player(player_params("test_name", 10)).unwrap();
    assert!(matches!(
        book.add_player(player_params("test_name", 11)),
        Err(RecordError::DuplicateName { field: "name", .. })
    ));
}

#[test]
fn update_player_changes_fields() {
    let mut book = RecordBook::new();
    let id = book.add_player(player_params("test_name", 10)).unwrap().id;
    book.update_player(id, player_params("renamed", 7)).unwrap();
    let p = book.player(id).unwrap();
    assert_eq!((p.name.as_str(), p.jersey_number), ("renamed", 7));
}

#[test]
fn unknown_ids_are_reference_errors() {
    let mut book = RecordBook::new();
    let id = Uuid::new_v4();
    assert_eq!(book.rival(id).unwrap_err(), RecordError::RivalNotFound(id));
    assert_eq!(book.player(id).unwrap_err(), RecordError::PlayerNotFound(id));
    assert_eq!(book.game(id).unwrap_err().kind(), ErrorKind::ReferenceNotFound);
    assert!(matches!(
        book.update_player(id, player_params("x", 1)),
        Err(RecordError::PlayerNotFound(_))
    ));
}
