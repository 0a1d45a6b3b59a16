//! Turning a path into ride and transfer instructions.

use std::fmt;

use crate::domain::{Line, Station};

/// One step of travel advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Ride `line` from one station to another.
    Take { line: Line, from: String, to: String },
    /// Change to another line at the current station.
    ChangeTo { line: Line },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Take { line, from, to } => write!(f, "Take {line} from {from} to {to}"),
            Instruction::ChangeTo { line } => write!(f, "Change to line {line}"),
        }
    }
}

/// Render `path` as instructions.
///
/// Each line change closes the current ride at the interchange and emits a
/// change instruction; a final ride ends at the last stop. A path on one
/// line yields a single instruction.
///
/// # Panics
///
/// Panics if `path` is empty.
pub fn render(stations: &[&Station], path: &[usize]) -> Vec<Instruction> {
    let (&first, _) = path.split_first().expect("path must not be empty");
    let first = stations[first];
    let last = stations[path[path.len() - 1]];

    let mut instructions = Vec::new();
    let mut current_line = first.line();
    let mut boarded_at = first.name();

    for &step in path {
        let station = stations[step];
        if station.line() != current_line {
            instructions.push(Instruction::Take {
                line: current_line.clone(),
                from: boarded_at.to_string(),
                to: station.name().to_string(),
            });
            instructions.push(Instruction::ChangeTo {
                line: station.line().clone(),
            });
            current_line = station.line();
            boarded_at = station.name();
        }
    }

    instructions.push(Instruction::Take {
        line: current_line.clone(),
        from: boarded_at.to_string(),
        to: last.name().to_string(),
    });

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCode;
    use chrono::NaiveDate;

    fn stations() -> Vec<Station> {
        let opened = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        [
            ("EW23", "Clementi"),
            ("EW24", "Jurong East"),
            ("NS1", "Jurong East"),
            ("NS2", "Bukit Batok"),
            ("NS3", "Bukit Gombak"),
        ]
        .into_iter()
        .map(|(code, name)| Station::new(StationCode::parse(code).unwrap(), name, opened))
        .collect()
    }

    fn lines(instructions: &[Instruction]) -> Vec<String> {
        instructions.iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn display_literals() {
        let take = Instruction::Take {
            line: Line::new("NS"),
            from: "Jurong East".into(),
            to: "Yishun".into(),
        };
        assert_eq!(take.to_string(), "Take NS from Jurong East to Yishun");

        let change = Instruction::ChangeTo {
            line: Line::new("EW"),
        };
        assert_eq!(change.to_string(), "Change to line EW");
    }

    #[test]
    fn single_line_path() {
        let owned = stations();
        let refs: Vec<&Station> = owned.iter().collect();
        assert_eq!(
            lines(&render(&refs, &[2, 3, 4])),
            vec!["Take NS from Jurong East to Bukit Gombak"]
        );
    }

    #[test]
    fn single_node_path() {
        let owned = stations();
        let refs: Vec<&Station> = owned.iter().collect();
        assert_eq!(
            lines(&render(&refs, &[0])),
            vec!["Take EW from Clementi to Clementi"]
        );
    }

    #[test]
    fn one_change() {
        let owned = stations();
        let refs: Vec<&Station> = owned.iter().collect();
        assert_eq!(
            lines(&render(&refs, &[0, 1, 2, 3])),
            vec![
                "Take EW from Clementi to Jurong East",
                "Change to line NS",
                "Take NS from Jurong East to Bukit Batok",
            ]
        );
    }

    #[test]
    #[should_panic(expected = "path must not be empty")]
    fn empty_path_panics() {
        let owned = stations();
        let refs: Vec<&Station> = owned.iter().collect();
        render(&refs, &[]);
    }
}
