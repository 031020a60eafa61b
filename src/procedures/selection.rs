/*!
Selects the best remainders by weight.

Each remainder is scored by the sum of the recorded weights of its members, and every remainder achieving the maximal score is returned --- ties are kept, and how tied remainders combine is the caller's concern (see [the tie rule](crate::config::TieRule)).

A remainder member with no recorded weight breaks the belief-database invariant (see [db::belief](crate::db::belief)), and selection reports this as [MissingWeight](crate::types::err::SelectionError::MissingWeight) rather than defaulting the weight --- a silent default would corrupt the entrenchment order every belief-change guarantee rests on.
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::{Formula, FormulaSet},
        weight::Weight,
    },
    types::err::{self},
};

/// The remainders of maximal summed weight, with ties kept.
///
/// Empty exactly when `remainders` is empty.
pub fn select(
    remainders: Vec<FormulaSet>,
    weights: &BTreeMap<Formula, Weight>,
) -> Result<Vec<FormulaSet>, err::SelectionError> {
    if remainders.is_empty() {
        return Ok(remainders);
    }

    let mut scores: Vec<Weight> = Vec::with_capacity(remainders.len());

    for remainder in &remainders {
        let mut total: Weight = 0.0;

        for formula in remainder {
            match weights.get(formula) {
                Some(weight) => total += weight,

                None => {
                    log::error!(target: targets::SELECTION, "No weight recorded for {formula}");
                    return Err(err::SelectionError::MissingWeight);
                }
            }
        }

        scores.push(total);
    }

    let best = scores.iter().copied().fold(Weight::NEG_INFINITY, Weight::max);
    log::trace!(target: targets::SELECTION, "Best weight {best} over {} remainders", remainders.len());

    let selected = remainders
        .into_iter()
        .zip(scores)
        .filter(|(_, score)| *score == best)
        .map(|(remainder, _)| remainder)
        .collect();

    Ok(selected)
}
