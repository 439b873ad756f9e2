//! End-to-end rule scenarios played through move requests.

use rookery_core::{
    Board, CastleSide, Color, DrawReason, GameStatus, MoveError, MoveKind, MoveRequest, PieceKind,
    STARTING_FINGERPRINT, Square,
};

fn req(text: &str) -> MoveRequest {
    text.parse().unwrap()
}

#[test]
fn fingerprint_roundtrip_start() {
    let board: Board = STARTING_FINGERPRINT.parse().unwrap();
    assert_eq!(board.fingerprint(), STARTING_FINGERPRINT);
}

#[test]
fn opening_pawn_push() {
    let mut board = Board::starting_position();
    let receipt = board.apply_move(&req("PAWN E2 E4")).unwrap();
    assert_eq!(receipt.to_string(), "PAWN: E2 -> E4");
    assert_eq!(
        board.fingerprint(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

#[test]
fn scholars_mate() {
    let mut board = Board::starting_position();
    for text in [
        "PAWN E2 E4",
        "PAWN E7 E5",
        "BISHOP F1 C4",
        "KNIGHT B8 C6",
        "QUEEN D1 H5",
        "KNIGHT G8 F6",
    ] {
        board.apply_move(&req(text)).unwrap();
        assert_eq!(board.status(), GameStatus::Ongoing);
    }
    let receipt = board.apply_move(&req("QUEEN H5 F7")).unwrap();
    assert_eq!(receipt.to_string(), "QUEEN TAKES PAWN: H5 -> F7");
    assert_eq!(
        board.status(),
        GameStatus::Checkmate {
            loser: Color::Black
        }
    );
    assert!(board.legal_moves().is_empty());
}

#[test]
fn underpromotion_to_knight() {
    let mut board: Board = "8/1P5k/8/8/8/8/8/4K3".parse().unwrap();
    let receipt = board.apply_move(&req("PAWN B7 B8 KNIGHT")).unwrap();
    assert!(receipt.to_string().ends_with("(PROMOTION: KNIGHT)"));
    let piece = board.piece_at(Square::B8).unwrap();
    assert_eq!(piece.kind(), PieceKind::Knight);
    assert_eq!(piece.color(), Color::White);
    assert_eq!(board.fingerprint(), "1N6/7k/8/8/8/8/8/4K3");
}

#[test]
fn double_check_allows_only_king_moves() {
    // Knight d6 and bishop b5 both give check to the e8 king.
    let board: Board = "r3k2r/8/3N4/1B6/8/8/8/4K3 b".parse().unwrap();
    assert_eq!(board.checkers(Color::Black).len(), 2);
    let moves = board.legal_moves();
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.piece_kind() == PieceKind::King));
}

#[test]
fn pinned_piece_moves_stay_on_pin_path() {
    // Bishop b4 pins the d2 queen against e1.
    let board: Board = "4k3/8/8/8/1b6/8/3Q4/4K3".parse().unwrap();
    let queen = board.piece_at(Square::D2).unwrap();
    let pin = queen.pin().expect("queen is pinned");
    let moves: Vec<_> = board
        .legal_moves()
        .into_iter()
        .filter(|m| m.from() == Square::D2)
        .collect();
    assert_eq!(moves.len(), 2);
    for mv in &moves {
        assert!(pin.path.contains(mv.to()));
    }
    assert!(moves.iter().any(|m| m.to() == Square::B4 && m.kind() == MoveKind::Capture));
}

#[test]
fn castling_preconditions() {
    let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
    assert!(board.can_castle(Color::White, CastleSide::Short));

    // A bishop covering f1 forbids the short castle on its own.
    let covered: Board = "r3k2r/8/8/8/8/8/6b1/R3K2R".parse().unwrap();
    assert!(!covered.can_castle(Color::White, CastleSide::Short));

    // Blocking g1 forbids it on its own.
    let blocked: Board = "r3k2r/8/8/8/8/8/8/R3K1NR".parse().unwrap();
    assert!(!blocked.can_castle(Color::White, CastleSide::Short));

    // A king that has moved and returned forbids it on its own.
    board.apply_move(&req("KING E1 F1")).unwrap();
    board.apply_move(&req("KING E8 F8")).unwrap();
    board.apply_move(&req("KING F1 E1")).unwrap();
    board.apply_move(&req("KING F8 E8")).unwrap();
    assert!(!board.can_castle(Color::White, CastleSide::Short));
    assert!(matches!(
        board.apply_move(&req("KING E1 G1")),
        Err(MoveError::Illegal { .. })
    ));
}

#[test]
fn same_colored_bishops_draw() {
    let mut board: Board = "4k3/8/8/8/8/1b6/8/3BK3".parse().unwrap();
    board.apply_move(&req("BISHOP D1 E2")).unwrap();
    assert_eq!(
        board.status(),
        GameStatus::Draw(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn rejection_receipt_and_untouched_board() {
    let mut board = Board::starting_position();
    let before = board.clone();
    let err = board.apply_move(&req("KNIGHT G1 G3")).unwrap_err();
    assert_eq!(err.receipt(), "KNIGHT: G1 -> G3 is not a valid move");
    assert_eq!(board, before);
}

#[test]
fn undo_walks_back_the_receipt_log() {
    let mut board = Board::starting_position();
    board.apply_move(&req("PAWN D2 D4")).unwrap();
    board.apply_move(&req("PAWN D7 D5")).unwrap();
    assert_eq!(board.receipts().len(), 2);
    board.undo_move().unwrap();
    assert_eq!(board.receipts(), ["PAWN: D2 -> D4".to_string()]);
    assert_eq!(board.side_to_move(), Color::Black);
}
