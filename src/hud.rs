//! Text shown around the canvas

/// Score counter text
pub fn score_text(score: u64) -> String {
    score.to_string()
}

/// End-of-run message, one item per line
pub fn game_over_message(score: u64) -> String {
    format!("Game Over\nScore: {score}")
}

/// End-of-run message for the overlay element
pub fn game_over_html(score: u64) -> String {
    format!("Game Over<br>Score: <strong>{score}</strong>")
}
