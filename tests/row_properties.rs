// tests/row_properties.rs
//
// Properties of emitted rows over arbitrary cell text and roster shapes.
//
mod common;

use match_crawler::specs::{MatchRow, Normalized, Rejection, normalize};
use match_crawler::store::Table;
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use common::match_doc;

/// Cell text that exercises quoting under both delimiters.
fn cell_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,;\t\r\n\"'#é]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any row written to a table file reads back slot by slot.
    #[test]
    fn stored_rows_parse_back(
        names in prop::collection::vec(cell_text(), 10),
        champions in prop::collection::vec(cell_text(), 10),
        tsv in any::<bool>(),
    ) {
        let mut raw = match_doc("NA1_77", "ARAM", 10);
        for (i, (name, champ)) in names.iter().zip(&champions).enumerate() {
            raw["info"]["participants"][i]["summonerName"] = json!(name);
            raw["info"]["participants"][i]["championName"] = json!(champ);
        }
        let Normalized::Row(row) = normalize(&raw, "NA1_77").unwrap() else {
            panic!("fixture must normalize");
        };

        let dir = TempDir::new().unwrap();
        let path = dir.path().join(if tsv { "t.tsv" } else { "t.csv" });
        let mut table = Table::default();
        table.push(&row);
        table.save(&path).unwrap();

        let loaded = Table::load(&path).unwrap();
        prop_assert_eq!(loaded.len(), 1);
        let back = MatchRow::from_cells(&loaded.rows[0]).unwrap();
        for slot in 1..=10 {
            prop_assert_eq!(back.scalar(slot, "summonerName"), Some(names[slot - 1].as_str()));
            prop_assert_eq!(back.scalar(slot, "championName"), Some(champions[slot - 1].as_str()));
        }
        prop_assert_eq!(back, row);
    }

    /// A mode other than the required one is rejected whatever the roster looks like.
    #[test]
    fn wrong_mode_never_errors(
        mode in "[A-Za-z_]{0,10}".prop_filter("not the required mode", |m| m != "ARAM"),
        players in 0usize..14,
    ) {
        let out = normalize(&match_doc("NA1_78", &mode, players), "NA1_78").unwrap();
        prop_assert_eq!(out, Normalized::Rejected(Rejection::WrongGameMode { found: mode }));
    }
}
