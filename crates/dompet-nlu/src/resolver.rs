//! Missing-field resolution.
//!
//! The required slots per intent are a data table, not control flow, so the
//! mapping can be read (and, if ever needed, extended) at a glance.

use crate::command::{Entities, Field, Intent};

/// Required slots per intent, in reporting order. `Unknown` requires
/// nothing: no action is inferable, so nothing is reported as missing.
const REQUIRED_FIELDS: &[(Intent, &[Field])] = &[
    (Intent::IncomeToPocket, &[Field::Amount, Field::Pocket]),
    (Intent::ExpenseFromPocket, &[Field::Amount, Field::Pocket]),
    (
        Intent::TransferBetweenPockets,
        &[Field::Amount, Field::PocketFrom, Field::PocketTo],
    ),
    (Intent::Unknown, &[]),
];

/// The slots an intent requires before it can be executed.
#[must_use]
pub fn required_fields(intent: Intent) -> &'static [Field] {
    REQUIRED_FIELDS
        .iter()
        .find(|(i, _)| *i == intent)
        .map(|(_, fields)| *fields)
        .unwrap_or(&[])
}

/// Required fields that are not yet populated in `entities`.
///
/// A field never appears here while simultaneously holding a value.
#[must_use]
pub fn missing_fields(intent: Intent, entities: &Entities) -> Vec<Field> {
    required_fields(intent)
        .iter()
        .copied()
        .filter(|field| !is_present(*field, entities))
        .collect()
}

fn is_present(field: Field, entities: &Entities) -> bool {
    match field {
        Field::Amount => entities.amount.is_some(),
        Field::Pocket => entities.pocket.is_some(),
        Field::PocketFrom => entities.pocket_from.is_some(),
        Field::PocketTo => entities.pocket_to.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_requires_nothing() {
        assert!(required_fields(Intent::Unknown).is_empty());
        assert!(missing_fields(Intent::Unknown, &Entities::default()).is_empty());
    }

    #[test]
    fn empty_entities_miss_everything() {
        assert_eq!(
            missing_fields(Intent::TransferBetweenPockets, &Entities::default()),
            vec![Field::Amount, Field::PocketFrom, Field::PocketTo]
        );
        assert_eq!(
            missing_fields(Intent::IncomeToPocket, &Entities::default()),
            vec![Field::Amount, Field::Pocket]
        );
    }

    #[test]
    fn populated_fields_are_not_missing() {
        let entities = Entities {
            amount: Some(3_400_000),
            ..Entities::default()
        };
        assert_eq!(
            missing_fields(Intent::IncomeToPocket, &entities),
            vec![Field::Pocket]
        );
    }

    #[test]
    fn note_is_never_required() {
        let entities = Entities {
            amount: Some(50_000),
            pocket: Some("Tabungan".into()),
            note: None,
            ..Entities::default()
        };
        assert!(missing_fields(Intent::ExpenseFromPocket, &entities).is_empty());
    }
}
