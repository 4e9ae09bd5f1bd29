//! Line-oriented operation scripts.
//!
//! Syntax:
//! ```text
//! ; Comment
//! SET 0,0,0 2                      ; Seed a cell (value reduced mod 3)
//! NOT 0,0,0 -> 2,0,0               ; Unary: one operand
//! AND 0,0,0 1,0,0 -> 2,0,0         ; Binary: two operands
//! MULTI_ADD 0,0,0 0,1,0 -> 0,2,0   ; Rows are picked by y and z
//! ```
//!
//! Mnemonics are case-insensitive. Coordinates may be written `x,y,z` or
//! `[x,y,z]` but must not contain spaces.

use crate::engine::{Engine, EngineError, Operation};
use crate::grid::Coord;
use thiserror::Error;

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write a value straight into a cell. Not logged.
    Set { coord: Coord, value: i64 },
    /// Run an operation through the engine.
    Execute {
        op: Operation,
        operand1: Coord,
        operand2: Coord,
        result: Coord,
    },
}

impl Command {
    /// Apply the command to an engine.
    ///
    /// Returns the logged description for operations, `None` for `SET`.
    pub fn apply(&self, engine: &mut Engine) -> Result<Option<String>, EngineError> {
        match *self {
            Command::Set { coord, value } => {
                engine.grid_mut().set(coord, value)?;
                Ok(None)
            }
            Command::Execute { op, operand1, operand2, result } => {
                let desc = engine.step(op, operand1, operand2, result)?;
                Ok(Some(desc.to_string()))
            }
        }
    }
}

/// Parse a whole script.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        if let Some(cmd) = parse_line(line, line_num + 1)? {
            commands.push(cmd);
        }
    }

    Ok(commands)
}

/// Parse one line. Blank and comment-only lines yield `None`.
pub fn parse_line(line: &str, line_num: usize) -> Result<Option<Command>, ScriptError> {
    // Remove comments
    let line = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let mnemonic = parts[0].to_uppercase();
    let args = &parts[1..];

    if mnemonic == "SET" {
        return parse_set(args, line_num).map(Some);
    }

    let op: Operation = mnemonic.parse().map_err(|_| ScriptError::UnknownOperation {
        line: line_num,
        name: parts[0].to_string(),
    })?;

    let arrow = args.iter().position(|&a| a == "->").ok_or_else(|| ScriptError::Syntax {
        line: line_num,
        message: format!("{} requires '-> <result>'", op),
    })?;
    let operands = &args[..arrow];
    let results = &args[arrow + 1..];

    let expected = if op.uses_second_operand() { 2 } else { 1 };
    if operands.len() != expected {
        return Err(ScriptError::Syntax {
            line: line_num,
            message: format!("{} takes {} operand(s), found {}", op, expected, operands.len()),
        });
    }
    if results.len() != 1 {
        return Err(ScriptError::Syntax {
            line: line_num,
            message: format!("expected one result coordinate, found {}", results.len()),
        });
    }

    let operand1 = parse_coord(operands[0], line_num)?;
    let operand2 = match operands.get(1) {
        Some(text) => parse_coord(text, line_num)?,
        None => operand1,
    };
    let result = parse_coord(results[0], line_num)?;

    Ok(Some(Command::Execute { op, operand1, operand2, result }))
}

fn parse_set(args: &[&str], line_num: usize) -> Result<Command, ScriptError> {
    let [coord, value] = args else {
        return Err(ScriptError::Syntax {
            line: line_num,
            message: "SET requires a coordinate and a value".into(),
        });
    };

    let coord = parse_coord(coord, line_num)?;
    let value = value.parse::<i64>().map_err(|_| ScriptError::Syntax {
        line: line_num,
        message: format!("invalid value '{}'", value),
    })?;

    Ok(Command::Set { coord, value })
}

fn parse_coord(text: &str, line_num: usize) -> Result<Coord, ScriptError> {
    text.parse().map_err(|e| ScriptError::Syntax {
        line: line_num,
        message: format!("bad coordinate '{}': {}", text, e),
    })
}

/// Errors that can occur while parsing a script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unknown operation on line {line}: {name}")]
    UnknownOperation { line: usize, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::grid::TritGrid;

    fn c(x: i32, y: i32, z: i32) -> Coord {
        Coord::new(x, y, z)
    }

    #[test]
    fn test_parse_forms() {
        let source = "
            ; seed a row
            SET 0,0,0 2
            not [0,0,0] -> [2,0,0]   ; unary
            AND 0,0,0 1,0,0 -> 2,0,0
            MULTI_ADD 0,0,0 0,1,0 -> 0,2,0
        ";
        let commands = parse_script(source).unwrap();

        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], Command::Set { coord: c(0, 0, 0), value: 2 });
        assert_eq!(
            commands[1],
            Command::Execute { op: Operation::Not, operand1: c(0, 0, 0), operand2: c(0, 0, 0), result: c(2, 0, 0) }
        );
        assert_eq!(
            commands[3],
            Command::Execute { op: Operation::MultiAdd, operand1: c(0, 0, 0), operand2: c(0, 1, 0), result: c(0, 2, 0) }
        );
    }

    #[test]
    fn test_out_of_range_coords_parse() {
        // Bounds are checked when the command runs, not when it is parsed.
        let cmd = parse_line("XOR 4,0,0 0,0,0 -> 0,0,0", 1).unwrap().unwrap();
        assert!(matches!(cmd, Command::Execute { operand1, .. } if operand1 == c(4, 0, 0)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line("ROTATE 0,0,0 -> 1,0,0", 3),
            Err(ScriptError::UnknownOperation { line: 3, name: "ROTATE".into() })
        );
        assert!(matches!(parse_line("AND 0,0,0 -> 1,0,0", 1), Err(ScriptError::Syntax { line: 1, .. })));
        assert!(matches!(parse_line("NOT 0,0,0 1,0,0", 1), Err(ScriptError::Syntax { .. })));
        assert!(matches!(parse_line("NOT 0,0 -> 1,0,0", 1), Err(ScriptError::Syntax { .. })));
        assert!(matches!(parse_line("SET 0,0,0", 1), Err(ScriptError::Syntax { .. })));
        assert!(matches!(parse_line("SET 0,0,0 two", 1), Err(ScriptError::Syntax { .. })));
        assert_eq!(parse_line("   ; nothing", 1), Ok(None));
    }

    #[test]
    fn test_apply_script() {
        let mut engine = Engine::with_grid(TritGrid::zeroed(), &EngineConfig::default());
        let commands = parse_script("SET 0,0,0 2\nSET 1,0,0 2\nADD 0,0,0 1,0,0 -> 2,0,0").unwrap();

        let descriptions: Vec<String> = commands
            .iter()
            .filter_map(|cmd| cmd.apply(&mut engine).unwrap())
            .collect();

        assert_eq!(descriptions, vec!["ADD: 2 + 2 = 1 (carry: 1) → [3,0,0]=1".to_string()]);
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_bundled_demo_script() {
        let commands = parse_script(include_str!("../demos/multi_add.tri")).unwrap();
        let mut engine = Engine::with_grid(TritGrid::zeroed(), &EngineConfig::default());
        for cmd in &commands {
            cmd.apply(&mut engine).unwrap();
        }

        assert_eq!(engine.grid().row(c(0, 2, 0)).unwrap().digits(), [0, 1, 0, 1]);
        assert_eq!(engine.grid().get(c(3, 3, 0)).unwrap().to_u8(), 2);
        assert_eq!(
            engine.log().entries(),
            vec![
                "MULTI_ADD: [0]=0, [1]=1, [2]=0, [3]=1 overflow=1".to_string(),
                "ADD: 2 + 2 = 1 (carry: 1) → [1,3,0]=1".to_string(),
                "SUB: 0 - 1 = 2 (borrow: 1)".to_string(),
                "NOT: NOT(1) = 1".to_string(),
                "CONSENSUS: 2 CONSENSUS 2 = 2".to_string(),
            ]
        );
    }
}
