// ABOUTME: Constitution scorer converting questionnaire answers into dosha tallies and a label
// ABOUTME: Implements deterministic tie-break rules for single, dual, and balanced classifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Core Contributors

//! Constitution Scorer
//!
//! Converts a patient's questionnaire answers into per-dosha tallies and a
//! derived [`ConstitutionLabel`]. Scoring is a pure total function: it cannot
//! fail, unrecognized answers are ignored, and re-scoring always replaces the
//! prior score wholesale.
//!
//! Tie-breaks are deterministic because winners are collected in the fixed
//! canonical dosha order (Vata, Pitta, Kapha):
//! - one winner → single label
//! - two winners → hyphenated dual label in canonical order
//! - three winners (including empty input) → the balanced "Tridoshic" sentinel

use crate::models::{ConstitutionLabel, ConstitutionScore, Dosha, QuestionnaireAnswer};
use tracing::debug;

/// Score a questionnaire response into a constitution classification.
///
/// Each answer is leniently matched against the dosha names; anything
/// unrecognized contributes nothing. Duplicate question identifiers are
/// allowed and each entry counts independently.
#[must_use]
pub fn score_constitution(answers: &[QuestionnaireAnswer]) -> ConstitutionScore {
    let mut vata = 0u32;
    let mut pitta = 0u32;
    let mut kapha = 0u32;

    for entry in answers {
        match Dosha::parse(&entry.answer) {
            Some(Dosha::Vata) => vata += 1,
            Some(Dosha::Pitta) => pitta += 1,
            Some(Dosha::Kapha) => kapha += 1,
            None => {
                debug!(
                    question_id = %entry.question_id,
                    answer = %entry.answer,
                    "ignoring unrecognized questionnaire answer"
                );
            }
        }
    }

    let label = derive_label(vata, pitta, kapha);
    debug!(vata, pitta, kapha, %label, "constitution scored");

    ConstitutionScore {
        vata,
        pitta,
        kapha,
        label,
    }
}

/// Derive the classification label from raw tallies.
///
/// The winner list is assembled in canonical dosha order so tied outputs are
/// stable regardless of answer submission order.
#[must_use]
pub fn derive_label(vata: u32, pitta: u32, kapha: u32) -> ConstitutionLabel {
    let max_tally = vata.max(pitta).max(kapha);
    if max_tally == 0 {
        return ConstitutionLabel::Balanced;
    }

    let tallies = [vata, pitta, kapha];
    let winners: Vec<Dosha> = Dosha::ALL
        .iter()
        .zip(tallies)
        .filter(|(_, tally)| *tally == max_tally)
        .map(|(dosha, _)| *dosha)
        .collect();

    match winners.as_slice() {
        [single] => ConstitutionLabel::Single(*single),
        [first, second] => ConstitutionLabel::Dual(*first, *second),
        _ => ConstitutionLabel::Balanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(categories: &[&str]) -> Vec<QuestionnaireAnswer> {
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| QuestionnaireAnswer::new(format!("q{index}"), *category))
            .collect()
    }

    #[test]
    fn test_single_dominant_category() {
        let score = score_constitution(&answers(&["vata", "vata", "pitta"]));
        assert_eq!(score.vata, 2);
        assert_eq!(score.pitta, 1);
        assert_eq!(score.label, ConstitutionLabel::Single(Dosha::Vata));
    }

    #[test]
    fn test_two_way_tie_canonical_order() {
        // Kapha submitted first; canonical order still puts Pitta before Kapha
        let score = score_constitution(&answers(&["kapha", "pitta"]));
        assert_eq!(
            score.label,
            ConstitutionLabel::Dual(Dosha::Pitta, Dosha::Kapha)
        );
    }

    #[test]
    fn test_empty_input_is_balanced() {
        let score = score_constitution(&[]);
        assert_eq!(score.label, ConstitutionLabel::Balanced);
        assert_eq!((score.vata, score.pitta, score.kapha), (0, 0, 0));
    }

    #[test]
    fn test_unrecognized_answers_ignored() {
        let score = score_constitution(&answers(&["vata", "maybe", ""]));
        assert_eq!(score.vata, 1);
        assert_eq!(score.label, ConstitutionLabel::Single(Dosha::Vata));
    }
}
