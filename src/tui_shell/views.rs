pub(super) mod deployments;
pub(super) mod infrastructure;
pub(super) mod kanban;
pub(super) mod logs;
pub(super) mod not_found;
pub(super) mod overview;
pub(super) mod settings;

use crate::engine::{Dashboard, Panel};

use super::View;

pub(in crate::tui_shell) use deployments::DeploymentsView;
pub(in crate::tui_shell) use infrastructure::InfrastructureView;
pub(in crate::tui_shell) use kanban::KanbanView;
pub(in crate::tui_shell) use logs::LogsView;
pub(in crate::tui_shell) use not_found::NotFoundView;
pub(in crate::tui_shell) use overview::OverviewView;
pub(in crate::tui_shell) use settings::SettingsView;

/// Borrows the current panel for one frame.
pub(in crate::tui_shell) fn for_panel<'a>(
    dash: &'a Dashboard,
    deploy_env: crate::deploy::Environment,
) -> Box<dyn View + 'a> {
    match dash.panel() {
        Panel::Overview => Box::new(OverviewView),
        Panel::Deployments => Box::new(DeploymentsView {
            in_flight: dash.deploy_in_flight(),
            backend: dash.deploy_backend(),
            environment: deploy_env,
        }),
        Panel::Infrastructure => Box::new(InfrastructureView),
        Panel::Logs(player) => Box::new(LogsView { player }),
        Panel::Kanban => Box::new(KanbanView),
        Panel::Settings => Box::new(SettingsView {
            identity: dash.identity(),
            settings: dash.settings(),
            backend: dash.deploy_backend(),
        }),
        Panel::NotFound(raw) => Box::new(NotFoundView { fragment: raw }),
    }
}
