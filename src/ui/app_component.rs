use crate::config::Config;
use crate::constants::{
    ERROR_TASK_DELETE_FAILED, ERROR_TASK_PURGE_FAILED, ERROR_TASK_RECOVER_FAILED, SUCCESS_TASK_DELETED,
    SUCCESS_TASK_PURGED, SUCCESS_TASK_RECOVERED,
};
use crate::logger::Logger;
use crate::store::TaskStore;
use crate::ui::components::status_bar::{StatusBar, StatusMessage};
use crate::ui::components::{HistoryDialog, TaskListComponent};
use crate::ui::core::{event_handler::EventType, Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Top-level component: owns the task store and routes every action to it
pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    history: Option<HistoryDialog>,
    status_bar: StatusBar,

    // Services
    store: TaskStore,
    logger: Logger,
    config: Config,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: TaskStore, config: Config, logger: Logger) -> Self {
        let mut app = Self {
            task_list: TaskListComponent::new(),
            history: None,
            status_bar: StatusBar::default(),
            store,
            logger,
            config,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn history(&self) -> Option<&HistoryDialog> {
        self.history.as_ref()
    }

    pub fn is_history_visible(&self) -> bool {
        self.history.is_some()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status_bar.message()
    }

    /// Push store data into the components that display it
    fn sync_component_data(&mut self) {
        self.task_list.update_data(self.store.tasks().to_vec());
        if let Some(history) = self.history.as_mut() {
            history.refresh();
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('H') => {
                self.logger.log("Global key: 'H' - opening history dialog".to_string());
                Action::ShowHistory
            }
            _ => Action::None,
        }
    }

    /// Apply an action emitted by a component
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::ShowHistory => {
                let dialog = HistoryDialog::new(self.store.deleted_tasks(), self.store.formatter())
                    .with_width(self.config.ui.history_width);
                self.logger.log(format!(
                    "History: Showing dialog with {} deleted tasks",
                    dialog.row_count()
                ));
                self.history = Some(dialog);
                self.status_bar.clear();
                Action::None
            }
            Action::HideHistory => {
                self.logger.log("History: Hiding dialog".to_string());
                self.history = None;
                Action::None
            }
            Action::DeleteTask(id) => {
                match self.store.delete_task(id) {
                    Ok(deleted) => {
                        self.logger.log(format!("Task: Moved '{}' ({}) to history", deleted.title, id));
                        self.status_bar
                            .set_message(StatusMessage::Info(SUCCESS_TASK_DELETED.to_string()));
                    }
                    Err(e) => self.report_error(ERROR_TASK_DELETE_FAILED, &e),
                }
                Action::None
            }
            Action::UndoDelete(deleted) => {
                match self.store.undo_delete(&deleted) {
                    Ok(task) => {
                        self.logger.log(format!("History: Recovered '{}' ({})", task.title, task.id));
                        self.status_bar
                            .set_message(StatusMessage::Info(SUCCESS_TASK_RECOVERED.to_string()));
                    }
                    Err(e) => self.report_error(ERROR_TASK_RECOVER_FAILED, &e),
                }
                Action::None
            }
            Action::DeleteForever(deleted) => {
                match self.store.delete_forever(&deleted) {
                    Ok(()) => {
                        self.logger
                            .log(format!("History: Deleted '{}' ({}) forever", deleted.title, deleted.id));
                        self.status_bar
                            .set_message(StatusMessage::Info(SUCCESS_TASK_PURGED.to_string()));
                    }
                    Err(e) => self.report_error(ERROR_TASK_PURGE_FAILED, &e),
                }
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::None => Action::None,
        }
    }

    fn report_error(&mut self, prefix: &str, error: &crate::store::StoreError) {
        let message = format!("{}: {}", prefix, error);
        self.logger.log(message.clone());
        self.status_bar.set_message(StatusMessage::Error(message));
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if let Some(history) = self.history.as_mut() {
                    // The history dialog is modal
                    history.handle_key_events(key)
                } else {
                    let task_list_action = self.task_list.handle_key_events(key);
                    if task_list_action.is_none() {
                        self.handle_global_key(key)
                    } else {
                        task_list_action
                    }
                }
            }
            EventType::Mouse(mouse) if self.config.ui.mouse_enabled => match self.history.as_mut() {
                Some(history) => history.handle_mouse_events(mouse),
                None => Action::None,
            },
            EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.handle_app_action(action);

        // Update component data after any changes
        self.sync_component_data();
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Key routing goes through handle_event; this only covers global shortcuts
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (main_area, status_area) = LayoutManager::main_layout(rect);

        self.task_list.render(f, main_area);
        self.status_bar.render(f, status_area);

        // Render dialog on top if visible
        if let Some(history) = self.history.as_mut() {
            history.render(f, rect);
        }
    }
}
