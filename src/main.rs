use pawn_core::{GameConfig, Players};
use pawn_engine::{play_match, PawnAI, RandomMover, SearchMover};

const MAX_PLIES: usize = 200;

fn main() {
    let config = GameConfig::default();
    let search = SearchMover::default().with_win_condition(config.win_condition);
    let mut players = Players::new(
        Box::new(PawnAI::new(Box::new(search))),
        Box::new(PawnAI::new(Box::new(RandomMover::default()))),
    );

    match play_match(&config, &mut players, MAX_PLIES) {
        Ok(result) => {
            let moves: Vec<String> = result.moves.iter().map(|mv| mv.to_string()).collect();
            println!("{}", moves.join(" "));
            match result.winner {
                Some(color) => println!("{} wins", players.get(color).name()),
                None => println!("no winner"),
            }
        }
        Err(err) => {
            eprintln!("match aborted: {}", err);
            std::process::exit(1);
        }
    }
}
