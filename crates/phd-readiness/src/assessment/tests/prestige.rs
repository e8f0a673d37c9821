use super::common::assert_close;
use crate::assessment::domain::{
    DomesticTier, InstitutionHistory, InstitutionSelection, QsTier,
};
use crate::assessment::prestige::{
    prestige_from, relative_advantage, resolve_history, source_prestige, RELATIVE_CAP,
};

#[test]
fn prestige_takes_the_more_favorable_ranking() {
    assert_eq!(
        prestige_from(Some(QsTier::Top10), Some(DomesticTier::C9)),
        Some(10.0)
    );
    assert_eq!(
        prestige_from(Some(QsTier::Beyond800), Some(DomesticTier::C9)),
        Some(9.2)
    );
}

#[test]
fn prestige_uses_a_single_ranking_or_nothing() {
    assert_eq!(prestige_from(Some(QsTier::Rank101To200), None), Some(8.0));
    assert_eq!(prestige_from(None, Some(DomesticTier::Project211)), Some(7.2));
    assert_eq!(prestige_from(None, None), None);
}

#[test]
fn tier_tables_descend_from_their_top_scores() {
    let qs: Vec<f64> = QsTier::ordered().into_iter().map(QsTier::score).collect();
    assert_eq!(qs.first(), Some(&10.0));
    assert_eq!(qs.last(), Some(&6.0));
    assert!(qs.windows(2).all(|pair| pair[0] > pair[1]));

    let domestic: Vec<f64> = DomesticTier::ordered()
        .into_iter()
        .map(DomesticTier::score)
        .collect();
    assert_eq!(domestic, vec![9.2, 8.0, 7.2, 6.5, 5.0]);
}

#[test]
fn source_prestige_weights_the_first_degree() {
    assert_close(source_prestige(Some(10.0), Some(8.0)).expect("blend"), 9.3);
    assert_eq!(source_prestige(None, Some(8.0)), Some(8.0));
    assert_eq!(source_prestige(None, None), None);
}

#[test]
fn relative_advantage_ignores_gaps_inside_the_deadzone() {
    assert_eq!(relative_advantage(Some(8.0), Some(8.2)), 0.0);
    assert_eq!(relative_advantage(Some(8.2), Some(8.0)), 0.0);
}

#[test]
fn relative_advantage_shrinks_then_caps_large_gaps() {
    assert_close(relative_advantage(Some(9.0), Some(7.0)), RELATIVE_CAP);
    assert_close(relative_advantage(Some(7.0), Some(9.0)), -RELATIVE_CAP);
    assert_close(relative_advantage(Some(8.0), Some(7.5)), 0.2);
    assert_close(relative_advantage(Some(7.5), Some(8.5)), -0.7);
}

#[test]
fn relative_advantage_needs_both_sides() {
    assert_eq!(relative_advantage(None, Some(9.0)), 0.0);
    assert_eq!(relative_advantage(Some(9.0), None), 0.0);
}

#[test]
fn history_resolves_source_and_target() {
    let history = InstitutionHistory {
        undergraduate: InstitutionSelection::domestic(DomesticTier::Project985),
        postgraduate: InstitutionSelection::qs(QsTier::Rank21To50),
        target: InstitutionSelection::default(),
    };

    let (source, target) = resolve_history(&history);

    assert_close(source.expect("source"), 0.65 * 8.0 + 0.35 * 9.0);
    assert_eq!(target, None);
}
