//! Returning word tiles to the banks

use super::RackState;

/// Clear words back into the banks
///
/// With `clear_only_invalid`, only words flagged invalid are cleared. Cleared
/// tiles are dealt one at a time onto the shorter bank (the first bank on a
/// tie). If nothing was cleared, the rack is shuffled instead.
pub fn reset(
    state: &RackState,
    clear_only_invalid: bool,
    word1_valid: bool,
    word2_valid: bool,
    shuffle: impl FnOnce(&RackState) -> RackState,
) -> RackState {
    let clear_word1 = !clear_only_invalid || !word1_valid;
    let clear_word2 = !clear_only_invalid || !word2_valid;

    let mut next = state.clone();
    let mut removed = Vec::with_capacity(state.word1.len() + state.word2.len());
    if clear_word1 {
        removed.append(&mut next.word1);
    }
    if clear_word2 {
        removed.append(&mut next.word2);
    }

    if removed.is_empty() {
        return shuffle(state);
    }

    for tile in removed {
        if next.bank1.len() <= next.bank2.len() {
            next.bank1.push(tile);
        } else {
            next.bank2.push(tile);
        }
    }

    next
}
