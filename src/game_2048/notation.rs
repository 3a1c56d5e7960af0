use regex::Regex;

use crate::{game_2048::board::Grid, utils::prelude::*};

/// A segment of a gamestring that lists the tiles on the board, top row first.
///
/// Rows are separated by `/`, slots by whitespace or commas; `0`, `.` and `_` mark empty slots.
/// For example, `0 0 0 0/0 0 0 0/0 4 0 0/2 2 0 0`.
#[derive(Clone, Debug)]
pub struct GridString {
    pub repr: String,
    pub grid: Grid,
}

/// Parses a single slot of a grid string.
fn _parse_slot(s: &str) -> std::result::Result<u32, Error> {
    match s {
        "." | "_" => Ok(0),
        _ => {
            let value = s.parse::<u32>().with_context(|| format!("invalid slot {s} in grid string"))?;
            if value != 0 && !value.is_power_of_two() {
                return Err(anyhow!("slot value {value} is not a power of two"));
            }
            Ok(value)
        }
    }
}

impl std::str::FromStr for GridString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let separator = Regex::new(r"[\s,]+")?;
        let mut rows = vec![];
        for row_str in s.trim().split('/') {
            let row = separator
                .split(row_str.trim())
                .filter(|tok| !tok.is_empty())
                .map(_parse_slot)
                .collect::<Result<Vec<u32>>>()?;
            rows.push(row);
        }

        let size = rows.len();
        if let Some(bad) = rows.iter().position(|row| row.len() != size) {
            return Err(anyhow!("row {bad} of grid string {s} does not have {size} slots"));
        }

        rows.reverse(); // row 0 sits at the bottom
        Ok(GridString { repr: s.to_owned(), grid: Grid(rows) })
    }
}

/// A parsed gamestring: a grid string, optionally followed by the score and the best score.
///
/// `0 0/2 2; 12; 40` restores a 2x2 board with score 12 and best score 40.
#[derive(Clone, Debug)]
pub struct GameString {
    pub setup: GridString,
    pub score: u64,
    pub max_score: u64,
}

impl std::str::FromStr for GameString {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s.split(';').map(str::trim).collect::<Vec<&str>>();
        let Some((setup_str, counters)) = parts.split_first() else {
            return Err(anyhow!("gamestring cannot be empty!"));
        };
        if counters.len() > 2 {
            return Err(anyhow!("gamestring {s} has too many segments"));
        }

        let setup = setup_str.parse::<GridString>()?;
        let mut values = [0u64; 2];
        for (i, counter) in counters.iter().enumerate() {
            values[i] = counter.parse::<u64>().with_context(|| format!("invalid score {counter}"))?;
        }

        let [score, max_score] = values;
        Ok(GameString { setup, score, max_score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_string_puts_first_row_on_top() {
        let gs = "0 0 0 0/0 0 0 0/0 4 0 0/2,2,.,_".parse::<GridString>().unwrap();
        assert_eq!(gs.grid.0[0], vec![2, 2, 0, 0]);
        assert_eq!(gs.grid.0[1], vec![0, 4, 0, 0]);
        assert_eq!(gs.grid.notate(), "0 0 0 0/0 0 0 0/0 4 0 0/2 2 0 0");
    }

    #[test]
    fn grid_string_rejects_bad_shapes_and_values() {
        assert!("2 2/2".parse::<GridString>().is_err());
        assert!("2 3/0 0".parse::<GridString>().is_err());
        assert!("2 x/0 0".parse::<GridString>().is_err());
    }

    #[test]
    fn game_string_counters() {
        let g = "0 0/2 2; 12; 40".parse::<GameString>().unwrap();
        assert_eq!((g.score, g.max_score), (12, 40));
        assert_eq!(g.setup.grid.size(), 2);

        let bare = "2".parse::<GameString>().unwrap();
        assert_eq!((bare.score, bare.max_score), (0, 0));

        assert!("0 0/0 0; 1; 2; 3".parse::<GameString>().is_err());
        assert!("0 0/0 0; many".parse::<GameString>().is_err());
    }
}
