use std::time::Duration;

use crate::board::SearchParams;
use crate::engine::DEFAULT_MOVE_TIME;

/// Engine options settable through `setoption`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOptions {
    /// Thinking time for a bare `go`
    pub move_time_ms: u64,
    pub params: SearchParams,
}

impl Default for UciOptions {
    fn default() -> Self {
        UciOptions {
            move_time_ms: DEFAULT_MOVE_TIME.as_millis() as u64,
            params: SearchParams::default(),
        }
    }
}

impl UciOptions {
    #[must_use]
    pub fn new() -> Self {
        UciOptions::default()
    }

    #[must_use]
    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }

    pub fn print(&self) {
        println!("id name negamax_chess");
        println!("id author negamax_chess developers");
        println!(
            "option name MoveTime type spin default {} min 1 max 3600000",
            self.move_time_ms
        );
        println!(
            "option name Roughness type spin default {} min 0 max 1000",
            self.params.eval_roughness
        );
        println!(
            "option name QuiescenceBase type spin default {} min -1000 max 1000",
            self.params.qs
        );
        println!(
            "option name QuiescenceStep type spin default {} min 0 max 1000",
            self.params.qs_depth_step
        );
        println!(
            "option name NullMargin type spin default {} min 0 max 10000",
            self.params.null_move_margin
        );
        println!("uciok");
    }

    /// Apply one option. Returns false if the name is unknown or the value
    /// does not parse.
    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let int = value.and_then(|v| v.trim().parse::<i32>().ok());
        match (normalized.as_str(), int) {
            ("movetime", Some(v)) => self.move_time_ms = u64::from(v.max(1).unsigned_abs()),
            ("roughness", Some(v)) => self.params.eval_roughness = v.max(0),
            ("quiescencebase", Some(v)) => self.params.qs = v,
            ("quiescencestep", Some(v)) => self.params.qs_depth_step = v.max(0),
            ("nullmargin", Some(v)) => self.params.null_move_margin = v.max(0),
            _ => return false,
        }
        true
    }
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
