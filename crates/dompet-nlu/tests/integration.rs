//! Integration tests for the dompet-nlu crate.
//!
//! These exercise the assembled pipeline end to end: normalization, intent
//! classification, entity extraction, alias resolution, and missing-field
//! reporting against a realistic pocket roster.

use uuid::Uuid;

use dompet_nlu::{
    CommandParser, Entities, Field, Intent, NluError, Pocket, generate_aliases, parse_command,
};
use dompet_text::normalize;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn roster() -> Vec<Pocket> {
    vec![
        Pocket::new(Uuid::now_v7(), "Tabungan"),
        Pocket::new(Uuid::now_v7(), "e-money"),
        Pocket::new(Uuid::now_v7(), "Kebutuhan Pokok"),
        Pocket::new(Uuid::now_v7(), "Jajan"),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
//  End-to-end scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn income_with_compound_amount() {
    init_tracing();
    let result = parse_command("aku dapat gaji 3jt400 hari ini", &roster()).unwrap();

    assert_eq!(result.intent, Intent::IncomeToPocket);
    assert_eq!(result.entities.amount, Some(3_400_000));
    assert!(result.missing.contains(&Field::Pocket));
    assert!(!result.missing.contains(&Field::Amount));
    assert!(!result.is_actionable());
}

#[test]
fn transfer_with_pair_and_note() {
    init_tracing();
    let result =
        parse_command("kirim 250k dari tabungan ke e money buat top up", &roster()).unwrap();

    assert_eq!(result.intent, Intent::TransferBetweenPockets);
    assert_eq!(result.entities.amount, Some(250_000));
    assert_eq!(result.entities.pocket_from.as_deref(), Some("Tabungan"));
    assert_eq!(result.entities.pocket_to.as_deref(), Some("e-money"));
    assert_eq!(result.entities.note.as_deref(), Some("top up"));
    assert!(result.missing.is_empty());
    assert!(result.is_actionable());
}

#[test]
fn expense_with_abbreviated_pocket() {
    init_tracing();
    let result = parse_command("keluarkan 50rb dari keb pokok", &roster()).unwrap();

    assert_eq!(result.intent, Intent::ExpenseFromPocket);
    assert_eq!(result.entities.amount, Some(50_000));
    assert_eq!(result.entities.pocket.as_deref(), Some("Kebutuhan Pokok"));
    assert!(result.missing.is_empty());
}

#[test]
fn income_routed_to_a_pocket() {
    let result = parse_command("terima gaji 2jt ke tabungan", &roster()).unwrap();

    assert_eq!(result.intent, Intent::IncomeToPocket);
    assert_eq!(result.entities.amount, Some(2_000_000));
    assert_eq!(result.entities.pocket.as_deref(), Some("Tabungan"));
    assert!(result.missing.is_empty());
}

#[test]
fn messy_punctuation_and_case_still_parse() {
    let result =
        parse_command("  KIRIM Rp250.000, dari TABUNGAN ke E-MONEY!!  ", &roster()).unwrap();

    assert_eq!(result.intent, Intent::TransferBetweenPockets);
    assert_eq!(result.entities.amount, Some(250_000));
    assert_eq!(result.entities.pocket_from.as_deref(), Some("Tabungan"));
    assert_eq!(result.entities.pocket_to.as_deref(), Some("e-money"));
}

#[test]
fn unknown_command_reports_nothing_missing() {
    let result = parse_command("eh besok jadi ke rumah nenek ga", &roster()).unwrap();

    assert_eq!(result.intent, Intent::Unknown);
    assert_eq!(result.entities, Entities::default());
    assert!(result.missing.is_empty());
}

#[test]
fn empty_input_is_unknown() {
    let result = parse_command("", &roster()).unwrap();
    assert_eq!(result.intent, Intent::Unknown);
    assert!(result.missing.is_empty());
}

#[test]
fn expense_without_amount_or_pocket_asks_for_both() {
    let result = parse_command("bayar kos bulan depan", &roster()).unwrap();

    assert_eq!(result.intent, Intent::ExpenseFromPocket);
    assert_eq!(result.missing, vec![Field::Amount, Field::Pocket]);
}

// ═══════════════════════════════════════════════════════════════════════
//  Contract violations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn duplicate_pocket_ids_are_a_contract_violation() {
    let id = Uuid::now_v7();
    let bad_roster = vec![Pocket::new(id, "Tabungan"), Pocket::new(id, "Jajan")];

    let err = parse_command("bayar 10rb dari tabungan", &bad_roster).unwrap_err();
    assert!(matches!(err, NluError::DuplicatePocketId { id: dup } if dup == id));
}

// ═══════════════════════════════════════════════════════════════════════
//  Properties
// ═══════════════════════════════════════════════════════════════════════

/// Whether a reported-missing field actually has a value in the entities.
fn populated(field: Field, entities: &Entities) -> bool {
    match field {
        Field::Amount => entities.amount.is_some(),
        Field::Pocket => entities.pocket.is_some(),
        Field::PocketFrom => entities.pocket_from.is_some(),
        Field::PocketTo => entities.pocket_to.is_some(),
    }
}

#[test]
fn missing_fields_are_never_populated() {
    let inputs = [
        "aku dapat gaji 3jt400 hari ini",
        "kirim 250k dari tabungan ke e money buat top up",
        "keluarkan 50rb dari keb pokok",
        "kirim dari sini ke sana",
        "bayar",
        "terima 20 ribu",
        "pindah 1,25jt dari jajan ke tabungan",
        "beli kopi 18rb untuk meeting",
        "dapat sejuta",
        "halo apa kabar",
        "",
    ];

    for input in inputs {
        let result = parse_command(input, &roster()).unwrap();
        for field in &result.missing {
            assert!(
                !populated(*field, &result.entities),
                "{input:?}: field {field} is both missing and populated"
            );
        }
    }
}

#[test]
fn every_canonical_name_round_trips_through_its_alias_set() {
    for pocket in roster() {
        let aliases = generate_aliases(&pocket.name);
        assert!(
            aliases.contains(&normalize(&pocket.name)),
            "pocket {:?} does not round-trip",
            pocket.name
        );
    }
}

#[test]
fn ambiguous_reference_prefers_full_name_then_roster_order() {
    let shared = vec![
        Pocket::new(Uuid::now_v7(), "Dana Umum"),
        Pocket::new(Uuid::now_v7(), "Umum"),
    ];
    let result = parse_command("bayar 5rb dari umum", &shared).unwrap();
    assert_eq!(result.entities.pocket.as_deref(), Some("Umum"));

    let twins = vec![
        Pocket::new(Uuid::now_v7(), "Belanja Bulanan"),
        Pocket::new(Uuid::now_v7(), "Belanja Harian"),
    ];
    let result = parse_command("bayar 5rb dari belanja", &twins).unwrap();
    assert_eq!(result.entities.pocket.as_deref(), Some("Belanja Bulanan"));
}

#[test]
fn results_are_deterministic_across_parsers() {
    let roster = roster();
    let a = CommandParser::new().unwrap();
    let b = CommandParser::new().unwrap();
    let text = "pindahkan 75rb dari jajan ke kebutuhan pokok untuk belanja";

    assert_eq!(
        a.parse(text, &roster).unwrap(),
        b.parse(text, &roster).unwrap()
    );
}

// ═══════════════════════════════════════════════════════════════════════
//  Serialization hand-off
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn parse_result_serializes_for_the_execution_layer() {
    let result = parse_command("kirim 250k dari tabungan ke e money", &roster()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["intent"], "transfer_between_pockets");
    assert_eq!(json["entities"]["amount"], 250_000);
    assert_eq!(json["entities"]["pocket_from"], "Tabungan");
    assert_eq!(json["missing"].as_array().map(Vec::len), Some(0));
}
