//! Summary strings shown after scoring and submitting

/// Singular or plural form of `word` for `count`
fn plural(count: impl Into<i64>, word: &str) -> String {
    if count.into() == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `"You scored N points, beating P% of other players."`
///
/// # Examples
/// ```
/// use wordiest::output::summary::score_text;
///
/// assert_eq!(score_text(1, 50), "You scored 1 point, beating 50% of other players.");
/// ```
#[must_use]
pub fn score_text(score: i32, percentile: i32) -> String {
    format!(
        "You scored {score} {}, beating {percentile}% of other players.",
        plural(score, "point")
    )
}

/// Describe a rating change; `match_count` is the number of matches played
/// before this one
#[must_use]
pub fn rating_text(old: f64, new: f64, match_count: usize) -> String {
    if match_count == 0 {
        return format!("Your new rating is {new:.1}!");
    }

    let delta = (new - old).abs();
    if new > old {
        format!("Your {old:.1} rating grew by {delta:.1} to {new:.1}!")
    } else if new < old {
        format!("Your {old:.1} rating fell by {delta:.1} to {new:.1}.")
    } else {
        format!("No rating change, still {old:.1}.")
    }
}

#[must_use]
pub fn expected_losses_text(count: usize) -> String {
    format!("{count} higher rated {} beat you.", plural_players(count))
}

#[must_use]
pub fn upset_losses_text(count: usize) -> String {
    format!("{count} lower rated {} beat you.", plural_players(count))
}

#[must_use]
pub fn expected_wins_text(count: usize) -> String {
    format!("You beat {count} lower rated {}.", plural_players(count))
}

#[must_use]
pub fn upset_wins_text(count: usize) -> String {
    format!("You beat {count} higher rated {}.", plural_players(count))
}

fn plural_players(count: usize) -> &'static str {
    if count == 1 { "player" } else { "players" }
}

/// `"Total N points"`
#[must_use]
pub fn total_score(score: u32) -> String {
    format!("Total {score} {}", plural(score, "point"))
}

/// Total with the best score of the match appended when it is higher
///
/// # Examples
/// ```
/// use wordiest::output::summary::total_score_with_best;
///
/// assert_eq!(total_score_with_best(12, 30), "Total 12 points (best 30)");
/// assert_eq!(total_score_with_best(30, 30), "Total 30 points");
/// ```
#[must_use]
pub fn total_score_with_best(score: u32, best: u32) -> String {
    let total = total_score(score);
    if best > score {
        format!("{total} (best {best})")
    } else {
        total
    }
}

/// Confirmation prompt for a submission with `valid_words` valid words
#[must_use]
pub const fn submission_warning(valid_words: usize) -> Option<&'static str> {
    match valid_words {
        0 => Some("Submit no words?"),
        1 => Some("Submit only one word?"),
        2 => Some("Submit these words?"),
        _ => None,
    }
}

/// One-line definition, e.g. `"AARDVARK (2 pts), see FOOBAR: A nocturnal animal."`
#[must_use]
pub fn definition_text(word: &str, points: u32, see_word: Option<&str>, definition: &str) -> String {
    let unit = if points == 1 { "pt" } else { "pts" };
    let see = see_word
        .map(|see| format!(", see {}", see.to_uppercase()))
        .unwrap_or_default();
    format!("{} ({points} {unit}){see}: {definition}", word.to_uppercase())
}

/// History list label, e.g. `"17 (36 pts)"`
#[must_use]
pub fn history_label(match_id: &str, score: i32) -> String {
    format!("{match_id} ({score} pts)")
}
