//! Main TUI application state and logic

use crate::playback::PlaybackController;
use crate::project::{self, Projection};
use crate::runners::{AlgorithmId, RunInput};
use crate::step::Step;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Which algorithm this run visualizes
    pub algorithm: AlgorithmId,

    /// The input the run was computed from (graphs and texts are rendered
    /// directly from it)
    pub input: RunInput,

    /// Playback cursor and auto-play timer over the precomputed run
    pub controller: PlaybackController,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over a loaded controller
    pub fn new(algorithm: AlgorithmId, input: RunInput, controller: PlaybackController) -> Self {
        App {
            algorithm,
            input,
            controller,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance auto-play against the wall clock
            let was_playing = self.controller.is_playing();
            self.controller.tick();
            if was_playing && !self.controller.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Visualization + narrative, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(pane_area);

        let steps = self.controller.steps();
        let position = self.controller.position();
        let projection = project::project(steps, position);

        self.render_visualization(frame, columns[0], &projection);

        super::panes::render_narrative_pane(frame, columns[1], steps, position, &projection);

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            position,
            self.controller.len(),
            self.controller.speed(),
            self.controller.is_playing(),
        );
    }

    /// Render the family-specific visualization pane
    fn render_visualization(
        &self,
        frame: &mut Frame,
        area: ratatui::layout::Rect,
        projection: &Projection,
    ) {
        let title = self.algorithm.name();
        match self.controller.current_step() {
            Some(Step::Sort(step)) => {
                super::panes::render_bars_pane(frame, area, step, title);
            }
            Some(Step::Search(step)) => {
                super::panes::render_search_pane(frame, area, step, title);
            }
            Some(Step::Path(step)) => {
                if let RunInput::Graph { graph, .. } = &self.input {
                    let rows = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                        .split(area);
                    super::panes::render_graph_pane(
                        frame,
                        rows[0],
                        graph,
                        &projection.highlights,
                        title,
                    );
                    super::panes::render_distances_pane(frame, rows[1], graph, step);
                }
            }
            Some(Step::Mst(_)) | Some(Step::Trace(_)) => {
                if let RunInput::Graph { graph, .. } = &self.input {
                    super::panes::render_graph_pane(
                        frame,
                        area,
                        graph,
                        &projection.highlights,
                        title,
                    );
                }
            }
            Some(Step::Match(step)) => {
                if let RunInput::Text { text, pattern } = &self.input {
                    super::panes::render_matching_pane(frame, area, text, pattern, step, title);
                }
            }
            None => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                self.controller.step_forward(n);
                self.status_message = format!("Stepped forward {} step(s)", n);
            }
            KeyCode::Left => {
                self.controller.step_backward(1);
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right => {
                self.controller.step_forward(1);
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.controller.toggle_play();
                    self.status_message = if self.controller.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                let speed = self.controller.speed().saturating_add(5);
                self.controller.set_speed(speed);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            KeyCode::Char('-') | KeyCode::Down => {
                let speed = self.controller.speed().saturating_sub(5);
                self.controller.set_speed(speed);
                self.status_message = format!("Speed {}", self.controller.speed());
            }
            KeyCode::Enter => {
                // Jump to the final step
                let total = self.controller.len();
                if total > 0 {
                    self.controller.jump_to(total - 1);
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.controller.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.status_message = "Reset".to_string();
            }
            _ => {}
        }
    }
}
