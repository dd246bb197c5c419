use std::path::Path;

use crate::config::{PrismConfig, write_atomic};
use crate::deploy::{DeployRequest, DeployTrigger};
use crate::fixtures::LOG_FEED;
use crate::session::Identity;

use super::command_filter::CommandFilter;
use super::disclosure::HoverDisclosure;
use super::notice::Notice;
use super::router::{Fragment, FragmentRouter, MemoryLocation, Route, ViewId};
use super::shortcuts::{Chord, ShortcutAction, Shortcuts};
use super::stream::StreamPlayer;
use super::timers::{Fired, Millis, TimerPurpose, Timers};
use super::transition::TransitionGate;

pub const DEPLOY_SUCCESS_NOTICE: &str = "Success! Cloud pipeline triggered.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardSettings {
    pub stream_interval: Millis,
    pub notice_duration: Millis,
    pub transition: Millis,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        DashboardSettings::from(&PrismConfig::default())
    }
}

impl From<&PrismConfig> for DashboardSettings {
    fn from(cfg: &PrismConfig) -> Self {
        Self {
            stream_interval: cfg.stream_interval_ms,
            notice_duration: cfg.notice_duration_ms,
            transition: cfg.transition_ms,
        }
    }
}

/// Per-view state, created when the view becomes current and dropped when it
/// is left.
#[derive(Debug)]
pub enum Panel {
    Overview,
    Deployments,
    Infrastructure,
    Logs(StreamPlayer),
    Kanban,
    Settings,
    NotFound(String),
}

impl Panel {
    pub fn view(&self) -> Option<ViewId> {
        Some(match self {
            Panel::Overview => ViewId::Dashboard,
            Panel::Deployments => ViewId::Deployments,
            Panel::Infrastructure => ViewId::Infrastructure,
            Panel::Logs(_) => ViewId::Logs,
            Panel::Kanban => ViewId::Kanban,
            Panel::Settings => ViewId::Settings,
            Panel::NotFound(_) => return None,
        })
    }
}

/// Things worth recording outside the engine (session trace, logs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardEvent {
    RouteChanged { fragment: String, known: bool },
    PaletteToggled { open: bool },
    StreamFinished { entries: usize },
    DeploySubmitted { repo: String },
    DeployQueued { repo: String, url: String },
    DeployFailed { repo: String, error: String },
    NoticeHidden,
}

/// The page shell: owns every stateful piece and is the only place that
/// reacts to route changes.
#[derive(Debug)]
pub struct Dashboard {
    settings: DashboardSettings,
    timers: Timers,
    router: FragmentRouter<MemoryLocation>,
    shortcuts: Shortcuts,
    palette: CommandFilter,
    disclosure: HoverDisclosure,
    notice: Notice,
    transition: TransitionGate,
    panel: Panel,
    deploy: DeployTrigger,
    identity: Identity,
    status: Option<String>,
    error: Option<String>,
    events: Vec<DashboardEvent>,
    mounted: bool,
}

impl Dashboard {
    pub fn mount(
        settings: DashboardSettings,
        location: MemoryLocation,
        deploy: DeployTrigger,
        identity: Identity,
    ) -> Self {
        let mut dash = Self {
            settings,
            timers: Timers::new(),
            router: FragmentRouter::new(location),
            shortcuts: Shortcuts::default(),
            palette: CommandFilter::default(),
            disclosure: HoverDisclosure::new(),
            notice: Notice::new(settings.notice_duration),
            transition: TransitionGate::new(settings.transition),
            panel: Panel::Overview,
            deploy,
            identity,
            status: None,
            error: None,
            events: Vec::new(),
            mounted: true,
        };
        dash.palette.mount(&mut dash.shortcuts);
        let initial = dash.router.current_view();
        dash.enter(initial);
        tracing::info!(view = dash.current_view().fragment(), "dashboard mounted");
        dash
    }

    /// Releases every timer and global binding. Afterwards navigation, deploys and
    /// notices are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.leave_panel();
        self.transition.cancel(&mut self.timers);
        self.notice.dismiss(&mut self.timers);
        self.palette.unmount(&mut self.shortcuts);
        self.mounted = false;
        tracing::info!("dashboard unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // -- routing --

    pub fn current_view(&self) -> Route {
        self.router.current_view()
    }

    pub fn router(&self) -> &FragmentRouter<MemoryLocation> {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut FragmentRouter<MemoryLocation> {
        &mut self.router
    }

    /// Returns whether the route changed.
    pub fn navigate(&mut self, target: impl Into<Fragment>) -> bool {
        if !self.mounted {
            return false;
        }
        match self.router.navigate_to(target) {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.router.back() {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    pub fn forward(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.router.forward() {
            Some(route) => {
                self.enter(route);
                true
            }
            None => false,
        }
    }

    fn enter(&mut self, route: Route) {
        self.leave_panel();
        self.panel = match &route {
            Route::View(ViewId::Dashboard) => Panel::Overview,
            Route::View(ViewId::Deployments) => Panel::Deployments,
            Route::View(ViewId::Infrastructure) => Panel::Infrastructure,
            Route::View(ViewId::Logs) => {
                let mut player = StreamPlayer::new(&LOG_FEED, self.settings.stream_interval);
                player.start(&mut self.timers);
                Panel::Logs(player)
            }
            Route::View(ViewId::Kanban) => Panel::Kanban,
            Route::View(ViewId::Settings) => Panel::Settings,
            Route::Unknown(raw) => {
                tracing::warn!(fragment = %raw, "unrecognized view");
                Panel::NotFound(raw.clone())
            }
        };
        self.transition.begin(&mut self.timers);
        tracing::info!(view = route.fragment(), "view changed");
        self.events.push(DashboardEvent::RouteChanged {
            fragment: route.fragment().to_string(),
            known: route.view().is_some(),
        });
    }

    fn leave_panel(&mut self) {
        if let Panel::Logs(player) = &mut self.panel {
            player.stop(&mut self.timers);
        }
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn is_loading(&self) -> bool {
        self.transition.is_loading()
    }

    // -- clock --

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Runs every timer due within the next `by` ms, then collects any finished
    /// deployment.
    pub fn advance(&mut self, by: Millis) {
        let until = self.timers.now().saturating_add(by);
        while let Some(fired) = self.timers.next_due(until) {
            self.on_timer(fired);
        }
        self.timers.settle(until);
        self.poll_deploy();
    }

    fn on_timer(&mut self, fired: Fired<TimerPurpose>) {
        match fired.payload {
            TimerPurpose::StreamTick => {
                if let Panel::Logs(player) = &mut self.panel
                    && player.tick(&mut self.timers, fired.handle)
                    && player.is_finished()
                {
                    self.events.push(DashboardEvent::StreamFinished {
                        entries: player.cursor(),
                    });
                }
            }
            TimerPurpose::NoticeExpiry => {
                if self.notice.expire(fired.handle) {
                    self.events.push(DashboardEvent::NoticeHidden);
                }
            }
            TimerPurpose::TransitionEnd => {
                self.transition.finish(fired.handle);
            }
        }
    }

    // -- keyboard / palette --

    pub fn shortcuts(&self) -> &Shortcuts {
        &self.shortcuts
    }

    /// Global key handling. Returns true if the chord was consumed.
    pub fn handle_chord(&mut self, chord: Chord) -> bool {
        let actions = self.shortcuts.dispatch(chord);
        for action in &actions {
            match action {
                ShortcutAction::TogglePalette => {
                    self.palette.toggle();
                    self.events.push(DashboardEvent::PaletteToggled {
                        open: self.palette.is_open(),
                    });
                }
            }
        }
        !actions.is_empty()
    }

    pub fn palette(&self) -> &CommandFilter {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut CommandFilter {
        &mut self.palette
    }

    pub fn open_palette(&mut self) {
        self.palette.open();
        self.events.push(DashboardEvent::PaletteToggled { open: true });
    }

    pub fn close_palette(&mut self) {
        if self.palette.is_open() {
            self.palette.close();
            self.events.push(DashboardEvent::PaletteToggled { open: false });
        }
    }

    /// Navigates to the highlighted palette entry. Returns false when the
    /// result list is empty.
    pub fn select_palette_entry(&mut self) -> bool {
        let Some(entry) = self.palette.selected_entry() else {
            return false;
        };
        let target = self.palette.select(entry);
        self.navigate(target);
        true
    }

    // -- navigation rail --

    pub fn disclosure(&self) -> &HoverDisclosure {
        &self.disclosure
    }

    pub fn disclosure_mut(&mut self) -> &mut HoverDisclosure {
        &mut self.disclosure
    }

    // -- logs --

    pub fn stream(&self) -> Option<&StreamPlayer> {
        match &self.panel {
            Panel::Logs(p) => Some(p),
            _ => None,
        }
    }

    pub fn stream_mut(&mut self) -> Option<&mut StreamPlayer> {
        match &mut self.panel {
            Panel::Logs(p) => Some(p),
            _ => None,
        }
    }

    pub fn replay_logs(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let Panel::Logs(player) = &mut self.panel else {
            return false;
        };
        player.replay(&mut self.timers);
        true
    }

    /// Writes the lines shown so far. Failures land in the error display.
    pub fn export_logs(&mut self, path: &Path) -> bool {
        let Some(player) = self.stream() else {
            return false;
        };
        let lines = player.export_lines();
        let mut text = lines.join("\n");
        text.push('\n');
        match write_atomic(path, text.as_bytes()) {
            Ok(()) => {
                self.error = None;
                self.status = Some(format!("exported {} lines to {}", lines.len(), path.display()));
                true
            }
            Err(err) => {
                self.error = Some(format!("export failed: {:#}", err));
                false
            }
        }
    }

    // -- deployments --

    pub fn deploy_in_flight(&self) -> Option<&DeployRequest> {
        self.deploy.in_flight()
    }

    pub fn deploy_backend(&self) -> &str {
        self.deploy.backend_label()
    }

    /// Returns whether the request was accepted; a rejection is shown in the
    /// error display.
    pub fn submit_deploy(&mut self, request: DeployRequest) -> bool {
        if !self.mounted {
            return false;
        }
        let repo = request.repo_name.clone();
        match self.deploy.submit(request, self.timers.now()) {
            Ok(()) => {
                self.error = None;
                self.status = Some(format!("deploying {}...", repo));
                self.events.push(DashboardEvent::DeploySubmitted { repo });
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    pub fn poll_deploy(&mut self) {
        if !self.mounted {
            return;
        }
        let Some((request, outcome)) = self.deploy.poll(self.timers.now()) else {
            return;
        };
        match outcome {
            Ok(receipt) => {
                self.notice.show(&mut self.timers, DEPLOY_SUCCESS_NOTICE);
                self.status = Some(receipt.summary());
                self.events.push(DashboardEvent::DeployQueued {
                    repo: request.repo_name,
                    url: receipt.url,
                });
            }
            Err(err) => {
                self.status = None;
                self.error = Some(err.to_string());
                self.events.push(DashboardEvent::DeployFailed {
                    repo: request.repo_name,
                    error: err.to_string(),
                });
            }
        }
    }

    // -- notices / messages --

    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn show_notice(&mut self, message: &str) {
        if !self.mounted {
            return;
        }
        self.notice.show(&mut self.timers, message);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice.dismiss(&mut self.timers);
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn drain_events(&mut self) -> Vec<DashboardEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../tests/engine/dashboard_tests.rs"]
mod tests;
