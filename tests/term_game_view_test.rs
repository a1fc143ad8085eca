use blockfall::core::{EngineConfig, GameState, Grid, ScriptedSource};
use blockfall::term::{color_rgb, encode_diff_into, GameView, HudStatus, Viewport};
use blockfall::types::{Color, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_source(ScriptedSource::repeat(PieceKind::O)).snapshot();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = GameView::default().render(&snap, HudStatus::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut rows = vec![".........."; 19];
    rows.push("I.........");
    let grid = Grid::from_text(10, &rows);
    let game = GameState::with_grid(
        EngineConfig::default(),
        grid,
        ScriptedSource::repeat(PieceKind::O),
    )
    .unwrap();

    let fb = GameView::default().render(
        &game.snapshot(),
        HudStatus::default(),
        Viewport::new(22, 22),
    );

    // Bottom-left board cell at y=19 maps to fb x=1..2, y=20.
    for x in [1, 2] {
        let cell = fb.get(x, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Cyan));
    }
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_side_panel_shows_score_and_last_clear() {
    let mut snap = GameState::with_source(ScriptedSource::repeat(PieceKind::O)).snapshot();
    snap.score = 300;
    snap.lines = 3;
    let hud = HudStatus {
        paused: false,
        last_clear: Some(2),
    };

    // 60 wide: board frame at x=19..40, panel at x=43.
    let fb = GameView::default().render(&snap, hud, Viewport::new(60, 24));
    assert!(fb.line(1).contains("SCORE"));
    assert!(fb.line(2).contains("300"));
    assert!(fb.line(4).contains("LINES"));
    assert!(fb.line(5).contains('3'));
    assert!(fb.line(6).contains("+2"));
}

#[test]
fn term_view_overlays_game_over_and_pause() {
    let mut snap = GameState::with_source(ScriptedSource::repeat(PieceKind::O)).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let paused = view.render(
        &snap,
        HudStatus {
            paused: true,
            last_clear: None,
        },
        vp,
    );
    assert!(paused.line(11).contains("PAUSED"));

    snap.game_over = true;
    let over = view.render(&snap, HudStatus::default(), vp);
    assert!(over.line(11).contains("GAME OVER"));
}

#[test]
fn term_diff_is_empty_for_unchanged_game() {
    let mut game = GameState::with_source(ScriptedSource::repeat(PieceKind::O));
    game.tick();
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let a = view.render(&game.snapshot(), HudStatus::default(), vp);
    let b = view.render(&game.snapshot(), HudStatus::default(), vp);
    let mut same = Vec::new();
    encode_diff_into(&a, &b, &mut same).unwrap();

    game.tick();
    let c = view.render(&game.snapshot(), HudStatus::default(), vp);
    let mut moved = Vec::new();
    encode_diff_into(&a, &c, &mut moved).unwrap();

    assert!(moved.len() > same.len());
}
