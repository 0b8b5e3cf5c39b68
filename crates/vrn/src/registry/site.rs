use super::search::SearchQuery;
use super::signup::SignupForm;

/// Top-level pages. Exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Signup,
    About,
}

impl Route {
    pub const ALL: [Route; 3] = [Self::Home, Self::Signup, Self::About];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Signup => "/signup",
            Self::About => "/about",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Signup => "Sign Up",
            Self::About => "About",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|route| route.path().trim_end_matches('/') == trimmed)
    }
}

/// Mounted view plus the state it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home(SearchQuery),
    Signup(SignupForm),
    About,
}

impl View {
    fn mount(route: Route) -> Self {
        match route {
            Route::Home => View::Home(SearchQuery::new()),
            Route::Signup => View::Signup(SignupForm::new()),
            Route::About => View::About,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            View::Home(_) => Route::Home,
            View::Signup(_) => Route::Signup,
            View::About => Route::About,
        }
    }
}

/// Application root: owns the single view selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    view: View,
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

/// Resume a view whose state arrived with the request.
impl From<View> for Site {
    fn from(view: View) -> Self {
        Self { view }
    }
}

impl Site {
    pub fn new() -> Self {
        Self::at(Route::Home)
    }

    pub fn at(route: Route) -> Self {
        Self {
            view: View::mount(route),
        }
    }

    pub fn route(&self) -> Route {
        self.view.route()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Unmount the current view and mount `route` with fresh state, even when
    /// `route` is already active.
    pub fn navigate(&mut self, route: Route) {
        self.view = View::mount(route);
    }

    pub fn search_mut(&mut self) -> Option<&mut SearchQuery> {
        match &mut self.view {
            View::Home(query) => Some(query),
            _ => None,
        }
    }

    pub fn signup_mut(&mut self) -> Option<&mut SignupForm> {
        match &mut self.view {
            View::Signup(form) => Some(form),
            _ => None,
        }
    }

    /// Leave a submitted signup for the home view. No-op on other views.
    pub fn return_to_search(&mut self) {
        if let Some(form) = self.signup_mut() {
            let next = form.return_to_search();
            self.navigate(next);
        }
    }
}
