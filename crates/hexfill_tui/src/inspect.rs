//! Plain-text rendering of a fetched game, for the `inspect` command.

use hexfill::Session;

/// Renders `session` as a staggered letter grid with a player legend.
///
/// Odd rows indent by one column to mirror the half-cell shift of the
/// graphical board.
pub fn render_text(session: &Session) -> String {
    let board = session.board();
    let mut out = format!("Board: {} x {}\n", board.width(), board.height());
    for player in [session.players().one, session.players().two] {
        let mark = if session.winner().map(|winner| winner.id) == Some(player.id) {
            "  <- winner"
        } else if !session.is_decided() && session.current_player().id == player.id {
            "  <- to move"
        } else {
            ""
        };
        out.push_str(&format!(
            "Player {}: {} ({}){mark}\n",
            player.id,
            player.color.letter(),
            player.color
        ));
    }
    out.push('\n');
    for (row, cells) in board.rows().enumerate() {
        if row % 2 == 1 {
            out.push(' ');
        }
        let letters: Vec<String> = cells
            .iter()
            .map(|cell| cell.color().letter().to_string())
            .collect();
        out.push_str(&letters.join(" "));
        out.push('\n');
    }
    out
}
