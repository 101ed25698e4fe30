//! Feature bank: positional heuristics computed per color
//!
//! Every feature is a pure function of a [`Position`] (and, for per-color
//! features, a [`Color`]). None of them can fail on a decoded position,
//! including positions with no legal moves.
//!
//! ## Module Organization
//!
//! - `material` - Material count, balance, bishop pair
//! - `pawns` - Pawn structure, passed pawn advancement, backward pawns
//! - `king` - King safety, castling status, king zone, pawn shield
//! - `activity` - Mobility, piece activity, development, rook placement
//! - `control` - Centre, space, weak squares, outposts, threats, pins
//!
//! ## Bundle Layout
//!
//! [`extract`] assembles the features in a fixed order. `mobility` and
//! `material_balance` are position-wide scalars; every other feature is a
//! `{white, black}` record.

mod activity;
mod control;
mod king;
mod material;
mod pawns;

pub use activity::{
    connected_rooks, development, mobility, open_file_control, piece_activity, rook_activity,
    rook_on_7th_rank,
};
pub use control::{
    attacked_vs_defended, center_control, outposts, piece_coordination, pinned_pieces,
    space_advantage, threats, weak_squares, AttackBalance,
};
pub use king::{castling_status, king_safety, king_zone_control, pawn_shield, KingSafety};
pub use material::{bishop_pair_bonus, material, material_balance};
pub use pawns::{
    backward_pawns, isolated_weakness_clusters, passed_pawn_advancement, pawn_structure,
    PawnStructure,
};

use tracing::debug;

use crate::bundle::{FeatureBundle, FeatureValue};
use crate::position::Position;
use crate::types::Color;

/// Per-color feature, in bundle order
type ColorFeature = fn(&Position, Color) -> FeatureValue;

const PER_COLOR_FEATURES: [(&str, ColorFeature); 23] = [
    ("king_safety", |p, c| king_safety(p, c).into()),
    ("pawn_structure", |p, c| pawn_structure(p, c).into()),
    ("center_control", |p, c| center_control(p, c).into()),
    ("development", |p, c| development(p, c).into()),
    ("rook_activity", |p, c| rook_activity(p, c).into()),
    ("threats", |p, c| threats(p, c).into()),
    ("piece_activity", |p, c| piece_activity(p, c).into()),
    ("piece_coordination", |p, c| piece_coordination(p, c).into()),
    ("bishop_pair_bonus", |p, c| bishop_pair_bonus(p, c).into()),
    ("open_file_control", |p, c| open_file_control(p, c).into()),
    ("space_advantage", |p, c| space_advantage(p, c).into()),
    ("weak_squares", |p, c| weak_squares(p, c).into()),
    ("outposts", |p, c| outposts(p, c).into()),
    ("pinned_pieces", |p, c| pinned_pieces(p, c).into()),
    ("attacked_vs_defended", |p, c| attacked_vs_defended(p, c).into()),
    ("castling_status", |p, c| castling_status(p, c).into()),
    ("king_zone_control", |p, c| king_zone_control(p, c).into()),
    ("rook_on_7th_rank", |p, c| rook_on_7th_rank(p, c).into()),
    ("connected_rooks", |p, c| connected_rooks(p, c).into()),
    ("passed_pawn_advancement", |p, c| passed_pawn_advancement(p, c).into()),
    ("pawn_shield", |p, c| pawn_shield(p, c).into()),
    ("backward_pawns", |p, c| backward_pawns(p, c).into()),
    ("isolated_weakness_clusters", |p, c| isolated_weakness_clusters(p, c).into()),
];

/// Compute every feature for both colors
pub fn extract(position: &Position) -> FeatureBundle {
    let mut bundle = FeatureBundle::new();
    bundle.insert(
        "material",
        FeatureValue::per_color(
            material(position, Color::White),
            material(position, Color::Black),
        ),
    );
    bundle.insert("material_balance", material_balance(position));
    bundle.insert("mobility", mobility(position));

    for (name, feature) in PER_COLOR_FEATURES {
        bundle.insert(
            name,
            FeatureValue::per_color(
                feature(position, Color::White),
                feature(position, Color::Black),
            ),
        );
    }

    debug!(features = bundle.len(), "extracted feature bundle");
    bundle
}

/// Names of the features [`extract`] produces, in order
pub fn feature_names() -> impl Iterator<Item = &'static str> {
    ["material", "material_balance", "mobility"]
        .into_iter()
        .chain(PER_COLOR_FEATURES.iter().map(|&(name, _)| name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_bundle_keys_in_order() {
        let bundle = extract(&Position::starting());
        let keys: Vec<_> = bundle.keys().collect();
        let names: Vec<_> = feature_names().collect();
        assert_eq!(keys, names);
        assert_eq!(keys.len(), 26);
        assert_eq!(keys[0], "material");
        assert_eq!(keys[3], "king_safety");
    }

    #[test]
    fn test_starting_position_symmetry() {
        let bundle = extract(&Position::starting());
        let get = |path: &str| bundle.get_path(path).cloned();

        assert_eq!(get("material.white"), get("material.black"));
        assert_eq!(get("material_balance"), Some(FeatureValue::Int(0)));
        assert!(bundle.get("mobility").and_then(FeatureValue::as_int).unwrap() > 0);
        assert_eq!(get("castling_status.white"), Some(FeatureValue::Bool(true)));
        assert_eq!(get("castling_status.black"), Some(FeatureValue::Bool(true)));
        assert_eq!(get("pawn_shield.white"), Some(FeatureValue::Int(3)));
        assert_eq!(get("pawn_shield.black"), Some(FeatureValue::Int(3)));
        assert_eq!(
            get("pawn_structure.white.doubled"),
            Some(FeatureValue::Int(0))
        );
    }

    #[test]
    fn test_checkmate_extracts_without_moves() {
        let pos = decode("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        let bundle = extract(&pos);
        assert_eq!(bundle.get("mobility"), Some(&FeatureValue::Int(0)));
        assert_eq!(
            bundle.get_path("piece_activity.white"),
            Some(&FeatureValue::Int(0))
        );
    }
}
