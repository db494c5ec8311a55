use vantage::search::tt::{NodeType, TranspositionTable};

#[test]
fn test_tt_mate_score_normalization() {
    let mut tt = TranspositionTable::new(1); // 1MB table
    let key = 123456789;

    // Scenario: a mate score stored at one search ply is read back verbatim
    // at a later ply; mate-distance normalization is an external search
    // driver's job, not the table's.
    let search_score = 30985;

    tt.save(key, None, search_score, 0, 5, NodeType::Exact as u8, false);

    // 1. Probe once. Should return 30985.
    if let Some((_, score, _, _)) = tt.probe(key, 0, -50000, 50000, 10) {
        assert_eq!(
            score, 30985,
            "Probing at original ply should return original score"
        );
    } else {
        panic!("Entry not found at ply 10");
    }

    // 2. Transposition: probe again later. We expect the exact same score we
    // stored, regardless of ply, since the table stores raw values.
    if let Some((_, score, _, _)) = tt.probe(key, 0, -50000, 50000, 20) {
        assert_eq!(
            score, 30985,
            "Probing at ply 20 should return raw stored score (normalization is external)"
        );
    } else {
        panic!("Entry not found at ply 20");
    }
}
