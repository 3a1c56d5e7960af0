/*
 *  The rules engine for a game of 2048 on a square board of any size.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub(crate) mod model;
pub mod notation;
pub(crate) mod tile;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Grid, Perspective},
        consts::*,
        coords::{self, *},
        model::{Model, RulesConfig},
        notation::*,
        tile::Tile,
    };
}
