//! Line-oriented terminal view layer.
//!
//! Reads one [`Command`] per line, drives the [`NavigationController`]
//! and re-renders whatever the dispatcher resolves to.
//!
//! [`NavigationController`]: folio_app::usecases::NavigationController

mod command;
mod render;

pub use command::{Command, ParseCommandError, SlideMove, HELP};

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use folio_app::App;
use folio_core::ports::NavigationEventPort;
use folio_core::{BookingLink, Carousel, CatalogFilter, NavigationState, View, ViewDescriptor};

/// Navigation observer that only traces; the shell re-renders after
/// every command anyway.
pub struct LoggingNavigationEvents;

impl NavigationEventPort for LoggingNavigationEvents {
    fn on_navigated(&self, state: &NavigationState) {
        debug!(
            view = %state.current_view,
            selected = ?state.selected_entry_id,
            "View changed"
        );
    }
}

const DEFAULT_TITLE: &str = "Folio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    app: App,
    filter: CatalogFilter,
    carousel: Carousel,
    interval: Duration,
    last_slide: Instant,
    booking: Option<BookingLink>,
}

impl Shell {
    pub fn new(app: App) -> Self {
        Self {
            filter: CatalogFilter::new(),
            carousel: app.featured_carousel(),
            interval: app.carousel_interval(),
            last_slide: Instant::now(),
            booking: app.booking_link(),
            app,
        }
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn state(&self) -> &NavigationState {
        self.app.navigation.state()
    }

    /// Runs until `quit` or end of input.
    pub fn run(mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        self.render(&mut out)?;
        prompt(&mut out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                prompt(&mut out)?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, &mut out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => {
                    writeln!(out, "{err}. Type `help` for commands.")?;
                }
            }
            prompt(&mut out)?;
        }

        out.flush()
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(?command, "Shell command");

        match command {
            Command::GoTo(view) => {
                self.app.navigation.go_to(view);
            }
            Command::Open(id) => {
                if !self.app.catalog.contains(&id) {
                    warn!(id = %id, "Open requested for unknown project");
                    writeln!(out, "No project with id {id}.")?;
                }
                self.app.navigation.open_case_study(id);
            }
            Command::Next => {
                let current = match self.state() {
                    NavigationState {
                        current_view: View::CaseStudy,
                        selected_entry_id: Some(id),
                    } => id.clone(),
                    _ => {
                        writeln!(out, "`next` works on a case study page.")?;
                        return Ok(Flow::Continue);
                    }
                };
                self.app.navigation.go_to_next_entry(current);
            }
            Command::Back => {
                self.app.navigation.back();
            }
            Command::Category(category) => {
                self.filter.category = category;
                self.show_projects();
            }
            Command::Toggle(toggle) => {
                self.filter.toggle(toggle);
                self.show_projects();
            }
            Command::Search(query) => {
                self.filter.query = query;
                self.show_projects();
            }
            Command::ResetFilters => {
                self.filter.reset();
                self.show_projects();
            }
            Command::Slide(movement) => {
                match movement {
                    SlideMove::Next => self.carousel.advance(),
                    SlideMove::Previous => self.carousel.retreat(),
                    SlideMove::Pause => self.carousel.toggle_playing(),
                }
                self.last_slide = Instant::now();
                self.app.navigation.go_to(View::Home);
            }
            Command::Book { email, name } => {
                match &self.booking {
                    Some(link) => {
                        let url = link.prefill_url(name.as_deref(), email.as_deref());
                        writeln!(out, "{url}")?;
                    }
                    None => writeln!(out, "Booking is not configured.")?,
                }
                return Ok(Flow::Continue);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.render(out)?;
        Ok(Flow::Continue)
    }

    fn show_projects(&mut self) {
        if self.state().current_view != View::ProjectList {
            self.app.navigation.go_to(View::ProjectList);
        }
    }

    /// Catch the carousel up with wall-clock time since the last slide.
    fn catch_up_carousel(&mut self) {
        let interval = self.interval.as_millis().max(1);
        let steps = self.last_slide.elapsed().as_millis() / interval;
        if steps == 0 {
            return;
        }
        // Whole cycles land on the same slide
        let len = self.carousel.len().max(1) as u128;
        for _ in 0..steps % len {
            self.carousel.tick();
        }
        self.last_slide = Instant::now();
    }

    fn render(&mut self, out: &mut impl Write) -> io::Result<()> {
        let descriptor = self.app.navigation.resolve();
        let title = match self.app.config.site_title.trim() {
            "" => DEFAULT_TITLE.to_string(),
            title => title.to_string(),
        };

        match &descriptor {
            ViewDescriptor::Home => {
                self.catch_up_carousel();
                render::header(out, &title, "Home")?;
                render::home(out, &self.app.catalog.featured(), &self.carousel)?;
            }
            ViewDescriptor::ProjectList => {
                render::header(out, &title, "Projects")?;
                let counts = self.app.projects.category_counts();
                render::filter_bar(out, &counts, &self.filter.category)?;
                render::project_list(out, &self.app.projects.execute(&self.filter))?;
            }
            ViewDescriptor::About => {
                render::header(out, &title, "About")?;
                render::about(out, self.app.catalog.len())?;
            }
            ViewDescriptor::Contact => {
                render::header(out, &title, "Contact")?;
                render::contact(out, self.booking.as_ref())?;
            }
            ViewDescriptor::CaseStudy(entry) => {
                render::header(out, &title, &entry.title)?;
                render::case_study(out, entry)?;
            }
        }
        Ok(())
    }
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
