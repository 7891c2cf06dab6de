//! Parsing of `go` arguments into search limits.

use std::time::Duration;

use crate::board::Color;
use crate::engine::{ThinkLimits, TimeControl};

/// Arguments of a `go` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub movestogo: Option<u64>,
    pub movetime: Option<u64>,
    pub depth: Option<u32>,
    pub nodes: Option<u64>,
    pub infinite: bool,
}

impl GoParams {
    /// Parse the tokens of a `go` line, including the leading `go`.
    /// Unknown tokens and unparsable values are skipped.
    #[must_use]
    pub fn parse(parts: &[&str]) -> Self {
        let mut params = GoParams::default();
        let mut i = 1;
        while i < parts.len() {
            let value = parts.get(i + 1).and_then(|v| v.parse::<u64>().ok());
            let consumed = match parts[i] {
                "wtime" => {
                    params.wtime = value;
                    2
                }
                "btime" => {
                    params.btime = value;
                    2
                }
                "winc" => {
                    params.winc = value;
                    2
                }
                "binc" => {
                    params.binc = value;
                    2
                }
                "movestogo" => {
                    params.movestogo = value;
                    2
                }
                "movetime" => {
                    params.movetime = value;
                    2
                }
                "depth" => {
                    params.depth = value.map(|d| d.min(u64::from(u32::MAX)) as u32);
                    2
                }
                "nodes" => {
                    params.nodes = value;
                    2
                }
                "infinite" => {
                    params.infinite = true;
                    1
                }
                _ => 1,
            };
            i += consumed;
        }
        params
    }

    /// Clock settings for the side to move
    #[must_use]
    pub fn time_control(&self, side: Color) -> TimeControl {
        if self.infinite {
            return TimeControl::Infinite;
        }
        if let Some(time_ms) = self.movetime {
            return TimeControl::MoveTime { time_ms };
        }
        let (time, inc) = match side {
            Color::White => (self.wtime, self.winc),
            Color::Black => (self.btime, self.binc),
        };
        match time {
            Some(time_left_ms) => TimeControl::Incremental {
                time_left_ms,
                inc_ms: inc.unwrap_or(0),
                movestogo: self.movestogo,
            },
            None => TimeControl::Infinite,
        }
    }

    /// Limits for the search. Without any clock, depth or node setting the
    /// engine thinks for `default_movetime`.
    #[must_use]
    pub fn limits(&self, side: Color, default_movetime: Duration) -> ThinkLimits {
        let control = self.time_control(side);
        let mut limits = ThinkLimits::from_time_control(control);
        if control.is_unlimited() && !self.infinite && self.depth.is_none() && self.nodes.is_none() {
            limits.movetime = Some(default_movetime);
        }
        limits.depth = self.depth;
        limits.nodes = self.nodes;
        limits
    }
}
