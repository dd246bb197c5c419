use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::deploy::{DeployRequest, Environment};
use crate::engine::{Chord, ViewId};
use crate::tui_shell::Prompt;
use crate::tui_shell::app::App;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        || key.modifiers.contains(KeyModifiers::SUPER);

    if ctrl && let KeyCode::Char(c) = key.code {
        if c == 'c' {
            app.quit = true;
            return;
        }
        // Global chords fire in every mode, including while typing.
        if app.dash.handle_chord(Chord::ctrl(c)) {
            app.trace_action(&format!("chord:ctrl+{}", c));
            return;
        }
    }

    if app.dash.palette().is_open() {
        handle_palette_key(app, key, ctrl);
        return;
    }
    if let Some(prompt) = app.prompt {
        handle_prompt_key(app, prompt, key, ctrl);
        return;
    }
    handle_browse_key(app, key);
}

fn handle_palette_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Esc => app.dash.close_palette(),
        KeyCode::Up => app.dash.palette_mut().move_up(),
        KeyCode::Down => app.dash.palette_mut().move_down(),
        KeyCode::Enter => {
            if app.dash.select_palette_entry() {
                app.trace_action("palette_select");
            }
        }
        KeyCode::Backspace => {
            let mut q = app.dash.palette().query().to_string();
            q.pop();
            app.dash.palette_mut().set_query(&q);
        }
        KeyCode::Char('u') if ctrl => app.dash.palette_mut().set_query(""),
        KeyCode::Char(c) if !ctrl => {
            let mut q = app.dash.palette().query().to_string();
            q.push(c);
            app.dash.palette_mut().set_query(&q);
        }
        _ => {}
    }
}

fn handle_prompt_key(app: &mut App, prompt: Prompt, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Esc => {
            app.prompt = None;
            app.input.clear();
        }
        KeyCode::Enter => match prompt {
            Prompt::DeployRepo => {
                let mut req = DeployRequest::for_repo(app.input.buf.trim());
                req.environment = app.deploy_env;
                app.input.push_history(&req.repo_name);
                if app.dash.submit_deploy(req) {
                    app.trace_action("deploy_submit");
                    app.prompt = None;
                    app.input.clear();
                }
            }
        },
        KeyCode::Tab => {
            app.deploy_env = match app.deploy_env {
                Environment::Dev => Environment::Qa,
                Environment::Qa => Environment::Prod,
                Environment::Prod => Environment::Dev,
            };
        }
        KeyCode::Up => app.input.history_up(),
        KeyCode::Down => app.input.history_down(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char(c) if !ctrl => app.input.insert_char(c),
        _ => {}
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit = true;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(view) = ViewId::ALL.get(idx).copied() {
                app.trace_action(&format!("goto:{}", view.fragment()));
                app.dash.navigate(view);
            }
        }
        KeyCode::Char('[') => {
            app.dash.back();
        }
        KeyCode::Char(']') => {
            app.dash.forward();
        }
        KeyCode::Char('d') => {
            let view = app.dash.current_view().view();
            if matches!(view, Some(ViewId::Dashboard | ViewId::Deployments)) {
                app.input.clear();
                app.prompt = Some(Prompt::DeployRepo);
            }
        }
        KeyCode::Char('r') => {
            if app.dash.replay_logs() {
                app.trace_action("logs_replay");
            }
        }
        KeyCode::Char('e') => {
            if app.dash.stream().is_some() {
                let path = app
                    .exports_dir()
                    .join(format!("logs-{}.txt", app.dash.now()));
                app.dash.export_logs(&path);
            }
        }
        KeyCode::Char('x') => app.dash.dismiss_notice(),
        KeyCode::Up => {
            if let Some(player) = app.dash.stream_mut() {
                player.scroll_up();
            }
        }
        KeyCode::Down => {
            if let Some(player) = app.dash.stream_mut() {
                player.scroll_down();
            }
        }
        _ => {}
    }
}
