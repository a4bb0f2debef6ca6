use crate::{
    Bag, Color, Direction, Game, GameStatus, Grid, Player, Players, Rules, Shape, Tile,
};
use smallvec::smallvec;

impl Game {
    /// Generates a [Game] in progress where nobody can move.
    ///
    /// # Returns
    ///
    /// A [Game] struct with the properties set to the following:
    /// * `grid`: A red round at the centre.
    /// * `bag`: An empty bag.
    /// * `players`: `Sonia` holding a blue star and a green cross, and `Cedric` holding a red
    /// round and a yellow diamond, both with `0` points.
    /// * `current_player`: `0`.
    pub fn stuck_game() -> Game {
        let mut grid = Grid::with_rules(Rules {
            green_wildcard: false,
        });
        grid.first_add(Direction::Up, &[Tile::new(Color::Red, Shape::Round)])
            .expect("first_add should return Ok");

        let mut sonia = Player::new("Sonia");
        *sonia.mut_hand() = smallvec![
            Tile::new(Color::Blue, Shape::Star),
            Tile::new(Color::Green, Shape::Cross),
        ];
        let mut cedric = Player::new("Cedric");
        *cedric.mut_hand() = smallvec![
            Tile::new(Color::Red, Shape::Round),
            Tile::new(Color::Yellow, Shape::Diamond),
        ];

        Game {
            grid,
            bag: Bag::from_tiles(Vec::new(), 0),
            players: smallvec![sonia, cedric],
            current_player: 0,
            status: GameStatus::InProgress,
            bonus_awarded: false,
        }
    }

    /// A mutable reference to `self.grid`.
    pub fn mut_grid(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.status`.
    pub fn mut_status(&mut self) -> &mut GameStatus {
        &mut self.status
    }
}
