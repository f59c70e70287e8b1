use crate::analysis::inflow::max_inflow;
use crate::analysis::resilience::most_affected_stations;
use crate::flow::cost::cost_augmented_max_flow;
use crate::flow::solver::max_flow;
use crate::network::error::NetworkError;
use crate::network::network::{RailNetwork, SegmentUndo};

/// Menu actions reachable from the session's number keys.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MaxFlow,
    Inflow,
    CostFlow,
    RemoveSegment,
    Impact,
    UndoAll,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MaxFlow,
        Action::Inflow,
        Action::CostFlow,
        Action::RemoveSegment,
        Action::Impact,
        Action::UndoAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::MaxFlow => "Maximum trains between two stations",
            Action::Inflow => "Maximum simultaneous arrivals at a station",
            Action::CostFlow => "Maximum flow with service-cost report",
            Action::RemoveSegment => "Remove a segment",
            Action::Impact => "Most affected stations if a segment fails",
            Action::UndoAll => "Restore every removed segment",
        }
    }

    fn prompts(self) -> &'static [&'static str] {
        match self {
            Action::MaxFlow | Action::CostFlow => &["source station", "destination station"],
            Action::Inflow => &["station"],
            Action::RemoveSegment => &["first endpoint", "second endpoint"],
            Action::Impact => &["first endpoint", "second endpoint", "how many stations"],
            Action::UndoAll => &[],
        }
    }
}

struct Pending {
    action: Action,
    args: Vec<String>,
}

/// Interactive session state: the network, the queue of removed
/// segments, the query being collected and the result history.
pub struct App {
    network: RailNetwork,
    removed: Vec<SegmentUndo>,
    pending: Option<Pending>,
    input: String,
    history: Vec<String>,
    pub running: bool,
}

impl App {
    pub fn new(network: RailNetwork) -> Self {
        Self {
            network,
            removed: Vec::new(),
            pending: None,
            input: String::new(),
            history: Vec::new(),
            running: true,
        }
    }

    pub fn network(&self) -> &RailNetwork {
        &self.network
    }

    pub fn removed(&self) -> &[SegmentUndo] {
        &self.removed
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn awaiting_input(&self) -> bool {
        self.pending.is_some()
    }

    pub fn prompt(&self) -> Option<String> {
        self.pending
            .as_ref()
            .map(|p| format!("{}?", p.action.prompts()[p.args.len()]))
    }

    pub fn start(&mut self, action: Action) {
        if action.prompts().is_empty() {
            self.run(action, Vec::new());
        } else {
            self.pending = Some(Pending {
                action,
                args: Vec::new(),
            });
            self.input.clear();
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.pending.is_some() {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.input.clear();
    }

    /// Accepts the current input line as the next argument; runs the
    /// action once all arguments are in.
    pub fn submit(&mut self) {
        let Some(mut pending) = self.pending.take() else {
            return;
        };
        pending.args.push(self.input.trim().to_string());
        self.input.clear();
        if pending.args.len() < pending.action.prompts().len() {
            self.pending = Some(pending);
        } else {
            self.run(pending.action, pending.args);
        }
    }

    fn run(&mut self, action: Action, args: Vec<String>) {
        let line = match action {
            Action::MaxFlow => match max_flow(&self.network, &args[0], &args[1]) {
                Ok(total) => format!("max flow {} -> {}: {total} trains", args[0], args[1]),
                Err(err) => format!("rejected: {err}"),
            },
            Action::Inflow => match max_inflow(&mut self.network, &args[0]) {
                Ok(total) => format!("max simultaneous arrivals at {}: {total} trains", args[0]),
                Err(err) => format!("rejected: {err}"),
            },
            Action::CostFlow => match cost_augmented_max_flow(&self.network, &args[0], &args[1]) {
                Ok(records) => {
                    let parts: Vec<String> = records
                        .iter()
                        .map(|(flow, cost)| format!("{flow} trains at cost {cost}"))
                        .collect();
                    format!(
                        "best augmentations {} -> {}: [{}]",
                        args[0],
                        args[1],
                        parts.join(", ")
                    )
                }
                Err(err) => format!("rejected: {err}"),
            },
            Action::RemoveSegment => match self.remove_segment(&args[0], &args[1]) {
                Ok(()) => format!(
                    "segment {} / {} removed ({} queued)",
                    args[0],
                    args[1],
                    self.removed.len()
                ),
                Err(err) => format!("rejected: {err}"),
            },
            Action::Impact => match args[2].parse::<usize>() {
                Ok(k) => match most_affected_stations(&mut self.network, &args[0], &args[1], k) {
                    Ok(impacts) => {
                        let parts: Vec<String> = impacts
                            .iter()
                            .map(|i| format!("{} (-{})", i.station, i.delta))
                            .collect();
                        format!(
                            "most affected by losing {} / {}: {}",
                            args[0],
                            args[1],
                            parts.join(", ")
                        )
                    }
                    Err(err) => format!("rejected: {err}"),
                },
                Err(_) => format!("rejected: `{}` is not a number", args[2]),
            },
            Action::UndoAll => {
                let queued = std::mem::take(&mut self.removed);
                let count = queued.len();
                for undo in queued {
                    if let Err(err) = self.network.restore_segment(undo) {
                        self.history.push(format!("restore failed: {err}"));
                    }
                }
                format!("restored {count} removed segment(s)")
            }
        };
        self.history.push(line);
    }

    fn remove_segment(&mut self, a: &str, b: &str) -> Result<(), NetworkError> {
        let va = self.network.require(a)?;
        let vb = self.network.require(b)?;
        let undo = self.network.remove_segment(va, vb)?;
        self.removed.push(undo);
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::basic::BasicNetwork;

    fn submit_all(app: &mut App, action: Action, args: &[&str]) {
        app.start(action);
        for arg in args {
            for c in arg.chars() {
                app.push_char(c);
            }
            app.submit();
        }
    }

    #[test]
    fn test_max_flow_round_trip() {
        let mut app = App::new(BasicNetwork::build());
        submit_all(&mut app, Action::MaxFlow, &["Porto Campanha", "Lisboa Oriente"]);
        assert!(!app.awaiting_input());
        assert!(app.history().last().unwrap().contains("8 trains"));
    }

    #[test]
    fn test_rejection_recorded_in_history() {
        let mut app = App::new(BasicNetwork::build());
        submit_all(&mut app, Action::MaxFlow, &["Porto Campanha", "Regua"]);
        assert!(app.history().last().unwrap().starts_with("rejected"));
    }

    #[test]
    fn test_remove_then_undo_all() {
        let mut app = App::new(BasicNetwork::build());
        submit_all(&mut app, Action::RemoveSegment, &["Espinho", "Aveiro"]);
        assert_eq!(1, app.removed().len());
        assert_eq!(6, app.network().segment_count());

        submit_all(&mut app, Action::UndoAll, &[]);
        assert!(app.removed().is_empty());
        assert_eq!(7, app.network().segment_count());
    }

    #[test]
    fn test_prompt_advances_per_argument() {
        let mut app = App::new(BasicNetwork::build());
        app.start(Action::MaxFlow);
        assert_eq!(Some("source station?".to_string()), app.prompt());
        for c in "Aveiro".chars() {
            app.push_char(c);
        }
        app.submit();
        assert_eq!(Some("destination station?".to_string()), app.prompt());
    }

    #[test]
    fn test_cancel_discards_pending_query() {
        let mut app = App::new(BasicNetwork::build());
        app.start(Action::Inflow);
        app.push_char('A');
        app.cancel();
        assert!(!app.awaiting_input());
        assert_eq!("", app.input());
        assert!(app.history().is_empty());
    }
}
