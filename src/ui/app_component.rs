//! Application component: route state, component composition and the
//! action dispatch loop.
//!
//! Every list rendered by a child component is owned here and handed
//! down fresh; ownership flags and the edit capability are computed once
//! at this trust boundary (from the session) and passed through
//! unchanged. Fetch completions are only applied when their generation
//! token still matches the owner's current generation, so a response
//! arriving after the user navigated away is dropped, never applied.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::models::{Folder, Module, Post};
use crate::api::{CreatePostArgs, UpdatePostArgs};
use crate::constants;
use crate::router::{self, Resolution, Route};
use crate::ui::components::{
    post_list_component::PostRow, AboutComponent, DialogComponent, ModuleManagerComponent, PostDetailComponent,
    PostFormComponent, PostListComponent, StatusBar,
};
use crate::ui::components::status_bar::StatusInfo;
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    AppContext, Component, FetchManager,
};
use crate::ui::layout::LayoutManager;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub posts: Vec<Post>,
    pub detail_post: Option<Post>,
    pub folders: Vec<Folder>,
    pub modules: Vec<Module>,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    post_list: PostListComponent,
    post_detail: PostDetailComponent,
    post_form: PostFormComponent,
    module_manager: ModuleManagerComponent,
    about: AboutComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    ctx: AppContext,
    fetch_manager: FetchManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Fetch generations; completions with a stale token are dropped
    feed_generation: Uuid,
    detail_generation: Uuid,
    modules_generation: Uuid,
    form_generation: Uuid,

    // Simple UI state
    form_visible: bool,
    should_quit: bool,
    // View rect from the last render, for mouse dispatch on the feed
    view_area: Rect,
}

impl AppComponent {
    pub fn new(mut ctx: AppContext) -> Self {
        let (fetch_manager, background_action_rx) = FetchManager::new();

        let mut module_manager = ModuleManagerComponent::new();
        module_manager.set_folder_pane_width(ctx.config.ui.folder_pane_width);

        let mut dialog = DialogComponent::new();
        dialog.set_logger(ctx.logger.clone());

        let mut post_list = PostListComponent::new();
        post_list.set_display_options(
            ctx.config.display.show_comment_counts,
            ctx.config.display.show_image_markers,
        );

        ctx.logger.log("AppComponent: Initialized".to_string());

        Self {
            post_list,
            post_detail: PostDetailComponent::new(),
            post_form: PostFormComponent::new(),
            module_manager,
            about: AboutComponent::new(),
            dialog,
            state: AppState {
                loading: true,
                ..Default::default()
            },
            ctx,
            fetch_manager,
            background_action_rx,
            feed_generation: Uuid::new_v4(),
            detail_generation: Uuid::new_v4(),
            modules_generation: Uuid::new_v4(),
            form_generation: Uuid::new_v4(),
            form_visible: false,
            should_quit: false,
            view_area: Rect::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background fetches
    pub fn active_fetch_count(&self) -> usize {
        self.fetch_manager.fetch_count()
    }

    /// The route currently rendered
    pub fn current_route(&self) -> Route {
        self.state.route
    }

    /// Total number of posts in the feed
    pub fn total_posts(&self) -> usize {
        self.state.posts.len()
    }

    /// Whether the post form (create or edit) is on screen
    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    /// Terminal is set up: activate the theme chrome, schedule its
    /// delayed re-assert, resolve the session and open the initial route.
    pub fn on_terminal_ready(&mut self, initial_route: Route) {
        self.ctx.theme.activate(&mut self.ctx.chrome);
        self.fetch_manager.spawn_chrome_reassert(constants::CHROME_REASSERT_DELAY_MS);

        self.ctx.logger.log("AppComponent: Resolving session".to_string());
        self.fetch_manager.spawn_session_resolve(self.ctx.provider.clone());

        self.navigate(initial_route);
    }

    /// Reset the chrome before the terminal is restored.
    pub fn on_terminal_teardown(&mut self) {
        self.ctx.theme.deactivate(&mut self.ctx.chrome);
    }

    /// Navigate to a route, enforcing the auth guard and starting the
    /// fetches the target view needs.
    fn navigate(&mut self, route: Route) {
        let route = if route.requires_auth() && !self.ctx.session.is_authenticated() {
            self.ctx.logger.log(format!(
                "Navigation: {} requires a session, redirecting to {}",
                route.path(),
                Route::Login.path()
            ));
            Route::Login
        } else {
            route
        };

        self.ctx.logger.log(format!("Navigation: {}", route.path()));
        self.state.route = route;
        self.form_visible = false;

        match route {
            Route::Feed => {
                self.feed_generation = Uuid::new_v4();
                self.state.loading = true;
                self.fetch_manager.spawn_feed_load(self.ctx.provider.clone(), self.feed_generation);
            }
            Route::PostDetail(id) => {
                self.detail_generation = Uuid::new_v4();
                self.state.detail_post = None;
                self.post_detail.set_loading();
                self.state.loading = true;
                self.fetch_manager
                    .spawn_post_load(self.ctx.provider.clone(), id, self.detail_generation);
            }
            Route::PostEdit(id) => {
                // The form performs its own load of the existing content
                self.form_generation = Uuid::new_v4();
                self.post_form.open_edit(id);
                self.form_visible = true;
                self.fetch_manager
                    .spawn_post_load(self.ctx.provider.clone(), id, self.form_generation);
            }
            Route::Modules => {
                self.modules_generation = Uuid::new_v4();
                self.state.loading = true;
                let class_id = self.ctx.config.api.class_id;
                self.fetch_manager
                    .spawn_folders_load(self.ctx.provider.clone(), class_id, self.modules_generation);
                self.fetch_manager
                    .spawn_modules_load(self.ctx.provider.clone(), class_id, None, self.modules_generation);
            }
            Route::About | Route::Login => {}
        }
    }

    /// Resolve a raw path (deep link) through the router's redirect rules.
    fn open_path(&mut self, path: &str) {
        match router::resolve(path, self.ctx.session.is_authenticated()) {
            Resolution::Show(route) => self.navigate(route),
            Resolution::Redirect(route) => {
                self.ctx.logger.log(format!("Navigation: {} redirected to {}", path, route.path()));
                self.navigate(route);
            }
        }
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = self.ctx.theme.palette();
        let icons = self.ctx.icons.clone();

        // Ownership is decided here, against the session, once per sync
        let rows: Vec<PostRow> = self
            .state
            .posts
            .iter()
            .map(|post| PostRow {
                post: post.clone(),
                is_own: self.ctx.session.owns_post(post),
            })
            .collect();
        self.post_list.update_data(rows, icons.clone(), palette);

        let detail_own = self
            .state
            .detail_post
            .as_ref()
            .is_some_and(|post| self.ctx.session.owns_post(post));
        self.post_detail
            .update_data(self.state.detail_post.clone(), detail_own, icons.clone(), palette);

        self.module_manager.update_data(
            self.state.folders.clone(),
            self.state.modules.clone(),
            self.ctx.session.can_edit_content(),
            icons.clone(),
            palette,
        );

        self.about.set_style(icons.clone(), palette);
        self.post_form.set_style(icons.clone(), palette);
        self.dialog.set_icons(icons);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.ctx.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.ctx.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('t') => {
                self.ctx.logger.log("Global key: 't' - toggling theme".to_string());
                Action::ToggleTheme
            }
            KeyCode::Char('r') => {
                self.ctx.logger.log("Global key: 'r' - reloading current view".to_string());
                Action::RefreshData
            }
            KeyCode::Char('i') => {
                self.ctx.icons.cycle_icon_theme();
                self.ctx.logger.log(format!("Global key: 'i' - icon theme {:?}", self.ctx.icons.theme()));
                self.sync_component_data();
                Action::None
            }
            // Route switching; on the info page digits jump to sections
            // instead, so they fall through to the component there
            KeyCode::Char('1') if self.state.route != Route::About => Action::Navigate(Route::Feed),
            KeyCode::Char('2') if self.state.route != Route::About => Action::Navigate(Route::Modules),
            KeyCode::Char('3') if self.state.route != Route::About => Action::Navigate(Route::About),
            KeyCode::Esc => {
                if self.state.route == Route::Feed {
                    Action::Quit
                } else {
                    Action::Navigate(Route::Feed)
                }
            }
            _ => Action::None,
        }
    }

    /// Process a terminal event into actions and apply them.
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.route_key_event(key),
            EventType::Mouse(mouse) => self.route_mouse_event(mouse),
            EventType::Resize(_, _) | EventType::FocusGained => {
                // Terminals may have dropped the OSC colors; re-assert
                Action::ReassertChrome
            }
            EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }

    fn route_key_event(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.form_visible {
            // The form consumes raw typing; only Ctrl+C stays global
            if let KeyCode::Char('c') = key.code {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Action::Quit;
                }
            }
            return self.post_form.handle_key_events(key);
        }

        let global = self.handle_global_key(key);
        if !matches!(global, Action::None) {
            return global;
        }

        match self.state.route {
            Route::Feed => self.post_list.handle_key_events(key),
            Route::PostDetail(_) => self.post_detail.handle_key_events(key),
            Route::Modules => self.module_manager.handle_key_events(key),
            Route::About => self.about.handle_key_events(key),
            Route::PostEdit(_) | Route::Login => Action::None,
        }
    }

    fn route_mouse_event(&mut self, mouse: crossterm::event::MouseEvent) -> Action {
        if self.dialog.is_visible() || self.form_visible {
            return Action::None;
        }
        match self.state.route {
            Route::Feed => self.post_list.handle_mouse(mouse, self.view_area),
            Route::Modules => self.module_manager.handle_mouse(mouse),
            Route::About => self.about.handle_mouse(mouse),
            _ => Action::None,
        }
    }

    /// Drain completed background work into the action queue.
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        self.fetch_manager.cleanup_finished_fetches();
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Run an action through the component chain, then the app reducer.
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update_components(action);
        self.handle_app_action(action);
    }

    fn update_components(&mut self, action: Action) -> Action {
        let action = self.post_list.update(action);
        let action = self.module_manager.update(action);
        self.dialog.update(action)
    }

    /// Handle app-level actions that require business logic
    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Navigate(route) => self.navigate(route),
            Action::OpenPath(path) => self.open_path(&path),
            Action::StartPostEdit(post_id) => {
                // Route through the resolver so the auth guard applies
                self.open_path(&Route::PostEdit(post_id).path());
            }
            Action::CancelPostEdit => {
                self.form_visible = false;
                if matches!(self.state.route, Route::PostEdit(_)) {
                    self.navigate(Route::Feed);
                }
            }
            Action::SubmitPostCreate { title, content, image_url } => {
                self.ctx.logger.log(format!("Feed: Publishing post '{}'", title));
                self.form_visible = false;
                self.state.loading = true;
                self.fetch_manager.spawn_post_create(
                    self.ctx.provider.clone(),
                    CreatePostArgs { title, content, image_url },
                );
            }
            Action::SubmitPostUpdate { id, title, content, image_url } => {
                self.ctx.logger.log(format!("Feed: Updating post {}", id));
                self.form_visible = false;
                self.state.loading = true;
                self.fetch_manager.spawn_post_update(
                    self.ctx.provider.clone(),
                    id,
                    UpdatePostArgs {
                        title: Some(title),
                        content: Some(content),
                        image_url,
                    },
                );
            }
            Action::RequestPostDelete(post_id) => {
                let title = self
                    .state
                    .posts
                    .iter()
                    .chain(self.state.detail_post.iter())
                    .find(|post| post.id == post_id)
                    .map(|post| post.title.clone())
                    .unwrap_or_else(|| format!("post {}", post_id));
                self.dispatch(Action::ShowDialog(DialogType::DeleteConfirmation { post_id, title }));
            }
            Action::ConfirmPostDelete(post_id) => {
                self.ctx.logger.log(format!("Feed: Deleting post {}", post_id));
                self.fetch_manager.spawn_post_delete(self.ctx.provider.clone(), post_id);
            }
            Action::PostDeleted(post_id) => {
                self.ctx.logger.log(format!("Feed: {} (id {})", constants::SUCCESS_POST_DELETED, post_id));
                // The list component only forwarded the request; removing
                // the entry from the source list happens here
                self.state.posts.retain(|post| post.id != post_id);
                if self.state.detail_post.as_ref().map(|post| post.id) == Some(post_id) {
                    self.state.detail_post = None;
                    if matches!(self.state.route, Route::PostDetail(_)) {
                        self.navigate(Route::Feed);
                        return;
                    }
                }
                self.sync_component_data();
            }
            Action::PostSaved { id } => {
                self.state.loading = false;
                if matches!(self.state.route, Route::PostEdit(_)) {
                    self.ctx.logger.log(constants::SUCCESS_POST_UPDATED.to_string());
                    self.navigate(router::post_updated_destination(id));
                } else {
                    self.ctx.logger.log(constants::SUCCESS_POST_CREATED.to_string());
                    self.navigate(Route::Feed);
                }
            }
            Action::SelectFolder(folder_id) => {
                self.ctx
                    .logger
                    .log(format!("Modules: Folder selection changed to {:?}", folder_id));
            }
            Action::ToggleTheme => {
                self.ctx.theme.toggle(&mut self.ctx.chrome);
                self.ctx.logger.log(format!("Theme: Switched to {}", self.ctx.theme.get().as_str()));
                self.fetch_manager.spawn_chrome_reassert(constants::CHROME_REASSERT_DELAY_MS);
                self.sync_component_data();
            }
            Action::SetTheme(theme) => {
                self.ctx.theme.set(theme, &mut self.ctx.chrome);
                self.fetch_manager.spawn_chrome_reassert(constants::CHROME_REASSERT_DELAY_MS);
                self.sync_component_data();
            }
            Action::ReassertChrome => {
                self.ctx.theme.sync_chrome(&mut self.ctx.chrome);
            }
            Action::FeedLoaded { generation, posts } => {
                if generation != self.feed_generation {
                    self.ctx.logger.log("Feed: Dropping stale feed response".to_string());
                    return;
                }
                self.state.posts = posts;
                self.state.loading = false;
                self.sync_component_data();
            }
            Action::PostLoaded { generation, post } => {
                if generation == self.detail_generation && matches!(self.state.route, Route::PostDetail(_)) {
                    self.state.detail_post = Some(post);
                    self.state.loading = false;
                    self.sync_component_data();
                } else if generation == self.form_generation && self.form_visible {
                    self.post_form.apply_prefill(&post);
                } else {
                    self.ctx.logger.log("Feed: Dropping stale post response".to_string());
                }
            }
            Action::FoldersLoaded { generation, folders } => {
                if generation != self.modules_generation {
                    self.ctx.logger.log("Modules: Dropping stale folders response".to_string());
                    return;
                }
                self.state.folders = folders;
                self.state.loading = false;
                self.sync_component_data();
            }
            Action::ModulesLoaded { generation, modules } => {
                if generation != self.modules_generation {
                    self.ctx.logger.log("Modules: Dropping stale modules response".to_string());
                    return;
                }
                self.state.modules = modules;
                self.state.loading = false;
                self.sync_component_data();
            }
            Action::SessionResolved { user } => {
                match &user {
                    Some(user) => self.ctx.logger.log(format!("Session: Signed in as {}", user.username)),
                    None => self.ctx.logger.log("Session: Unauthenticated".to_string()),
                }
                self.ctx.session.resolve(user);
                // Ownership flags and the edit capability change with the
                // session, so recompute them for every child
                self.sync_component_data();
            }
            Action::FetchFailed { context, message } => {
                self.state.loading = false;
                self.ctx.logger.log(format!("{}: {}", context, message));
                self.dispatch(Action::ShowDialog(DialogType::Error(format!("{}\n\n{}", context, message))));
            }
            Action::RefreshData => self.navigate(self.state.route),
            Action::ShowDialog(DialogType::PostCreation) => {
                self.post_form.open_create();
                self.form_visible = true;
            }
            // ShowDialog/HideDialog for the remaining dialog types were
            // consumed by the dialog component in the update chain
            _ => {}
        }
    }

    fn render_login(&self, f: &mut Frame, rect: Rect) {
        let palette = self.ctx.theme.palette();
        let text = format!(
            "You need to be signed in to do that.\n\n{}\n\nPress Esc to return to the feed.",
            constants::LOGIN_HINT
        );
        let paragraph = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Sign In")
                    .title_style(Style::default().fg(palette.text))
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, LayoutManager::centered_rect(60, 40, rect));
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key_event(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);
        let view_area = areas[0];
        let status_area = areas[1];
        self.view_area = view_area;

        match self.state.route {
            Route::Feed | Route::PostEdit(_) => self.post_list.render(f, view_area),
            Route::PostDetail(_) => self.post_detail.render(f, view_area),
            Route::Modules => self.module_manager.render(f, view_area),
            Route::About => self.about.render(f, view_area),
            Route::Login => self.render_login(f, view_area),
        }

        if self.form_visible {
            self.post_form.render(f, view_area);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, view_area);
        }

        let theme_icons = self.ctx.icons.icons().theme;
        StatusBar::render(
            f,
            status_area,
            &StatusInfo {
                route: self.state.route,
                username: self.ctx.session.user().map(|user| user.username.as_str()),
                theme: self.ctx.theme.get(),
                theme_icon: match self.ctx.theme.get() {
                    crate::theme::Theme::Light => theme_icons.light,
                    crate::theme::Theme::Dark => theme_icons.dark,
                },
                loading: self.state.loading,
                palette: self.ctx.theme.palette(),
            },
        );
    }
}
