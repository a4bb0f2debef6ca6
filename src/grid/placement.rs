use crate::{
    adjacent_coordinates, is_on_board, line_points, Coordinate, Direction, Grid, RuleViolation,
    Tile, TileAtPosition, CENTER,
};
use itertools::Itertools;
use tracing::debug;

impl Grid {
    /// Places the opening line of the game. The first [tile](Tile) lands on the [centre](CENTER)
    /// of the board and each following [tile](Tile) one step further in `direction`.
    ///
    /// # Arguments
    ///
    /// * `direction`: The [direction](Direction) the line grows in from the centre.
    /// * `tiles`: The [tiles](Tile) in the order they are laid.
    ///
    /// # Errors
    ///
    /// * [RuleViolation::GridNotEmpty] When a first move has already been played.
    /// * [RuleViolation::EmptyLine] When `tiles` is empty.
    /// * [RuleViolation::TilesNotCompatible] When some pair of `tiles` does not share exactly
    /// one trait.
    /// * [RuleViolation::OutOfBounds] When the line would leave the board.
    ///
    /// # Returns
    ///
    /// The points earned: one per [tile](Tile), or [QWIRKLE_POINTS](crate::QWIRKLE_POINTS)
    /// for a complete line.
    pub fn first_add(
        &mut self,
        direction: Direction,
        tiles: &[Tile],
    ) -> Result<usize, RuleViolation> {
        if !self.is_empty() {
            return Err(RuleViolation::GridNotEmpty);
        }
        if tiles.is_empty() {
            return Err(RuleViolation::EmptyLine);
        }
        if !self.rules.pairwise_compatible(tiles) {
            return Err(RuleViolation::TilesNotCompatible);
        }

        let coordinates: Vec<Coordinate> = (0..tiles.len() as isize)
            .map(|steps| Direction::step(CENTER, direction, steps))
            .collect();
        if let Some(&coordinate) = coordinates
            .iter()
            .find(|&&coordinate| !is_on_board(coordinate))
        {
            return Err(RuleViolation::OutOfBounds { coordinate });
        }

        self.tiles.extend(coordinates.into_iter().zip(tiles.iter().copied()));
        debug!(?direction, placed = tiles.len(), "placed opening line");

        Ok(line_points(tiles.len()))
    }

    /// Places one [tile](Tile) at `(row, col)`.
    ///
    /// # Errors
    ///
    /// * [RuleViolation::OutOfBounds] When `(row, col)` is not on the board.
    /// * [RuleViolation::Occupied] When `(row, col)` already holds a [tile](Tile).
    /// * [RuleViolation::DuplicateInLine] When the row or the column through `(row, col)`
    /// would hold the same [tile](Tile) twice.
    /// * [RuleViolation::NotConnected] When no neighbor of `(row, col)` is occupied.
    /// * [RuleViolation::Incompatible] When `tile` does not match some [tile](Tile) on the row
    /// or the column through `(row, col)`.
    /// * [RuleViolation::MixedLine] When `tile` would join two lines that do not match each
    /// other.
    ///
    /// # Returns
    ///
    /// The [points](Grid::cell_points) earned by the row and the column through `(row, col)`.
    pub fn add(&mut self, row: isize, col: isize, tile: Tile) -> Result<usize, RuleViolation> {
        self.place((row, col), tile)?;
        Ok(self.cell_points((row, col)))
    }

    /// Places `tiles` one after another starting at `(row, col)` and stepping in `direction`.
    /// Either every [tile](Tile) is placed or none is.
    ///
    /// # Points Calculation
    ///
    /// The anchor `(row, col)` earns the [points](Grid::cell_points) of both of its lines,
    /// which includes the line being laid. Every other placed [tile](Tile) earns the points
    /// of the perpendicular line through it, if any.
    ///
    /// # Errors
    ///
    /// * [RuleViolation::EmptyLine] When `tiles` is empty.
    /// * [RuleViolation::TilesNotCompatible] When some pair of `tiles` does not share exactly
    /// one trait.
    /// * [RuleViolation::OutOfBounds] When the anchor `(row, col)` is off the board.
    /// * Any error of [Grid::add] for the first [tile](Tile) that cannot be placed.
    pub fn add_line(
        &mut self,
        row: isize,
        col: isize,
        direction: Direction,
        tiles: &[Tile],
    ) -> Result<usize, RuleViolation> {
        if tiles.is_empty() {
            return Err(RuleViolation::EmptyLine);
        }
        if !self.rules.pairwise_compatible(tiles) {
            return Err(RuleViolation::TilesNotCompatible);
        }
        if !is_on_board((row, col)) {
            return Err(RuleViolation::OutOfBounds {
                coordinate: (row, col),
            });
        }

        let coordinates: Vec<Coordinate> = (0..tiles.len() as isize)
            .map(|steps| Direction::step((row, col), direction, steps))
            .collect();

        self.transaction(|grid| {
            for (&coordinate, &tile) in coordinates.iter().zip(tiles) {
                grid.place(coordinate, tile)?;
            }
            Ok(grid.run_points(&coordinates, direction.is_horizontal()))
        })
    }

    /// Places every [tile](Tile) at its own [coordinate](Coordinate) in the given order.
    /// The positions must share one row or one column, and once placed, every cell between the
    /// outermost positions must be occupied. Either every [tile](Tile) is placed or none is.
    ///
    /// # Points Calculation
    ///
    /// The first position is the anchor, scored like [Grid::add_line].
    ///
    /// # Errors
    ///
    /// * [RuleViolation::EmptyLine] When `placements` is empty.
    /// * [RuleViolation::DuplicatePosition] When some position is given twice.
    /// * [RuleViolation::NotOnOneLine] When the positions share neither a row nor a column.
    /// * [RuleViolation::NotContiguous] When an empty cell is left between the positions.
    /// * Any error of [Grid::add] for the first [tile](Tile) that cannot be placed.
    pub fn add_scattered(
        &mut self,
        placements: &[TileAtPosition],
    ) -> Result<usize, RuleViolation> {
        let Some(anchor) = placements.first() else {
            return Err(RuleViolation::EmptyLine);
        };
        if let Some(coordinate) = placements
            .iter()
            .map(TileAtPosition::coordinate)
            .duplicates()
            .next()
        {
            return Err(RuleViolation::DuplicatePosition { coordinate });
        }

        let horizontal = if placements.iter().all(|placement| placement.row == anchor.row) {
            true
        } else if placements.iter().all(|placement| placement.col == anchor.col) {
            false
        } else {
            return Err(RuleViolation::NotOnOneLine);
        };

        let coordinates: Vec<Coordinate> =
            placements.iter().map(TileAtPosition::coordinate).collect();

        self.transaction(|grid| {
            for placement in placements {
                grid.place(placement.coordinate(), placement.tile)?;
            }
            if let Some(gap) = grid.find_gap(&coordinates, horizontal) {
                return Err(RuleViolation::NotContiguous { gap });
            }
            Ok(grid.run_points(&coordinates, horizontal))
        })
    }

    /// Checks `tile` against every placement rule at `coordinate` without touching the board.
    pub(super) fn check_placement(
        &self,
        coordinate: Coordinate,
        tile: Tile,
    ) -> Result<(), RuleViolation> {
        if !is_on_board(coordinate) {
            return Err(RuleViolation::OutOfBounds { coordinate });
        }
        if self.tiles.contains_key(&coordinate) {
            return Err(RuleViolation::Occupied { coordinate });
        }

        let lines = [true, false].map(|horizontal| {
            let (before, after) = self.neighbors_in_line(coordinate, horizontal);
            before
                .into_iter()
                .chain([tile])
                .chain(after)
                .collect::<Vec<Tile>>()
        });

        if let Some(&tile) = lines.iter().find_map(|line| line.iter().duplicates().next()) {
            return Err(RuleViolation::DuplicateInLine { coordinate, tile });
        }

        if !adjacent_coordinates(coordinate)
            .iter()
            .any(|adjacent| self.tiles.contains_key(adjacent))
        {
            return Err(RuleViolation::NotConnected { coordinate });
        }

        if let Some(existing) = Direction::directions()
            .into_iter()
            .flat_map(|direction| self.walk(coordinate, direction))
            .map(|(_, existing)| existing)
            .find(|&existing| !self.rules.compatible(tile, existing))
        {
            return Err(RuleViolation::Incompatible {
                coordinate,
                placed: tile,
                existing,
            });
        }

        if let Some((&first, &second)) = lines.iter().find_map(|line| {
            line.iter()
                .tuple_combinations()
                .find(|&(&first, &second)| !self.rules.matches(first, second))
        }) {
            return Err(RuleViolation::MixedLine {
                coordinate,
                first,
                second,
            });
        }

        Ok(())
    }

    /// Checks then inserts one [tile](Tile).
    fn place(&mut self, coordinate: Coordinate, tile: Tile) -> Result<(), RuleViolation> {
        self.check_placement(coordinate, tile)?;
        self.tiles.insert(coordinate, tile);
        debug!(?coordinate, %tile, "placed tile");
        Ok(())
    }

    /// # Returns
    ///
    /// The first empty cell between the outermost of `coordinates`, which share a row when
    /// `horizontal` or a column otherwise.
    fn find_gap(&self, coordinates: &[Coordinate], horizontal: bool) -> Option<Coordinate> {
        let (&(row, col), rest) = coordinates.split_first()?;
        let along = |&(row, col): &Coordinate| if horizontal { col } else { row };
        let (min, max) = rest
            .iter()
            .map(along)
            .fold((along(&(row, col)), along(&(row, col))), |(min, max), value| {
                (min.min(value), max.max(value))
            });

        (min..=max)
            .map(|value| if horizontal { (row, value) } else { (value, col) })
            .find(|coordinate| !self.tiles.contains_key(coordinate))
    }
}
