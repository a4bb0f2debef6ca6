use crate::{
    Bag, Game, GameStatus, Grid, Player, BAG_LEN, HAND_LEN, MAX_PLAYERS, MIN_PLAYERS,
    SNAPSHOT_VERSION,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Everything needed to resume a [game](Game) exactly where it was left, including the state
/// of the bag's random number generator.
///
/// # See Also
///
/// * [Game::snapshot]
/// * [Game::restore]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The format of the snapshot. Always [SNAPSHOT_VERSION] when taken by this crate.
    pub version: u32,
    /// The board and its rules.
    pub grid: Grid,
    /// The undrawn [tiles](crate::Tile).
    pub bag: Bag,
    /// The players in seat order with their hands and scores.
    pub players: Vec<Player>,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// The phase of the game.
    pub status: GameStatus,
    /// Whether the [last tile bonus](crate::LAST_TILE_BONUS) has been given.
    pub bonus_awarded: bool,
}

/// Describes the reason why a [snapshot](GameSnapshot) could not be encoded, decoded,
/// or [restored](Game::restore).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SnapshotError {
    /// The snapshot could not be serialized.
    #[error("could not encode snapshot: {reason}")]
    Encode {
        /// The message of the serializer.
        reason: String,
    },
    /// The bytes are not a snapshot.
    #[error("could not decode snapshot: {reason}")]
    Decode {
        /// The message of the deserializer.
        reason: String,
    },
    /// The snapshot was written in another format.
    #[error(
        "snapshot version {version} is not supported, expected {expected}",
        expected = SNAPSHOT_VERSION
    )]
    UnsupportedVersion {
        /// The version found in the snapshot.
        version: u32,
    },
    /// Tiles were lost or added.
    #[error("the snapshot holds {found} tiles, expected {expected}")]
    TileCountMismatch {
        /// The number of [tiles](crate::Tile) on the board, in the bag, and in hands.
        found: usize,
        /// [BAG_LEN].
        expected: usize,
    },
    /// The current player is not seated.
    #[error("player {current_player} is not one of the {players} players")]
    CurrentPlayerOutOfRange {
        /// The index of the player whose turn it is.
        current_player: usize,
        /// The number of players.
        players: usize,
    },
    /// Some hand holds more than [HAND_LEN] [tiles](crate::Tile).
    #[error("player {player} holds {hand_len} tiles, more than a full hand")]
    HandTooLarge {
        /// The index of the player.
        player: usize,
        /// The number of [tiles](crate::Tile) in the hand.
        hand_len: usize,
    },
    /// There are fewer than [MIN_PLAYERS] or more than [MAX_PLAYERS] players.
    #[error("{players} players cannot play a game")]
    InvalidPlayerCount {
        /// The number of players.
        players: usize,
    },
}

impl GameSnapshot {
    /// # Errors
    ///
    /// * [SnapshotError::Encode] When serialization fails.
    ///
    /// # Returns
    ///
    /// The snapshot as bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|error| SnapshotError::Encode {
            reason: error.to_string(),
        })
    }

    /// Reads a snapshot from `bytes`. The version is read first so that bytes of another
    /// format are rejected as such.
    ///
    /// # Errors
    ///
    /// * [SnapshotError::Decode] When `bytes` are not a snapshot.
    /// * [SnapshotError::UnsupportedVersion] When the version is not [SNAPSHOT_VERSION].
    pub fn decode(bytes: &[u8]) -> Result<GameSnapshot, SnapshotError> {
        let decode_error = |error: bincode::Error| SnapshotError::Decode {
            reason: error.to_string(),
        };

        let version: u32 = bincode::deserialize(bytes).map_err(decode_error)?;
        if version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion { version });
        }

        bincode::deserialize(bytes).map_err(decode_error)
    }
}

impl Game {
    /// # Returns
    ///
    /// A [snapshot](GameSnapshot) of the whole game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            grid: self.grid.clone(),
            bag: self.bag.clone(),
            players: self.players.to_vec(),
            current_player: self.current_player,
            status: self.status,
            bonus_awarded: self.bonus_awarded,
        }
    }

    /// Checks `snapshot`, then rebuilds the game it was taken from.
    ///
    /// # Errors
    ///
    /// * [SnapshotError::UnsupportedVersion] When the version is not [SNAPSHOT_VERSION].
    /// * [SnapshotError::InvalidPlayerCount] When there are fewer than [MIN_PLAYERS] or
    /// more than [MAX_PLAYERS] players.
    /// * [SnapshotError::CurrentPlayerOutOfRange] When the current player is not seated.
    /// * [SnapshotError::HandTooLarge] When some hand holds more than [HAND_LEN]
    /// [tiles](crate::Tile).
    /// * [SnapshotError::TileCountMismatch] When the board, the bag, and the hands do not hold
    /// [BAG_LEN] [tiles](crate::Tile) together.
    pub fn restore(snapshot: GameSnapshot) -> Result<Game, SnapshotError> {
        let GameSnapshot {
            version,
            grid,
            bag,
            players,
            current_player,
            status,
            bonus_awarded,
        } = snapshot;

        if version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion { version });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(SnapshotError::InvalidPlayerCount {
                players: players.len(),
            });
        }
        if current_player >= players.len() {
            return Err(SnapshotError::CurrentPlayerOutOfRange {
                current_player,
                players: players.len(),
            });
        }
        if let Some((player, hand_len)) = players
            .iter()
            .map(|player| player.hand().len())
            .enumerate()
            .find(|&(_, hand_len)| hand_len > HAND_LEN)
        {
            return Err(SnapshotError::HandTooLarge { player, hand_len });
        }
        let found = grid.len()
            + bag.remaining_count()
            + players
                .iter()
                .map(|player| player.hand().len())
                .sum::<usize>();
        if found != BAG_LEN {
            return Err(SnapshotError::TileCountMismatch {
                found,
                expected: BAG_LEN,
            });
        }

        info!(
            players = players.len(),
            current_player,
            ?status,
            placed = grid.len(),
            "restored game"
        );

        Ok(Game {
            grid,
            bag,
            players: players.into_iter().collect(),
            current_player,
            status,
            bonus_awarded,
        })
    }

    /// [Snapshots](Game::snapshot) and [encodes](GameSnapshot::encode) the game.
    ///
    /// # Errors
    ///
    /// Same as [GameSnapshot::encode].
    pub fn save(&self) -> Result<Vec<u8>, SnapshotError> {
        self.snapshot().encode()
    }

    /// [Decodes](GameSnapshot::decode) and [restores](Game::restore) a game from `bytes`.
    ///
    /// # Errors
    ///
    /// Same as [GameSnapshot::decode] and [Game::restore].
    pub fn load(bytes: &[u8]) -> Result<Game, SnapshotError> {
        Game::restore(GameSnapshot::decode(bytes)?)
    }
}
