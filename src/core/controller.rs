use std::sync::Arc;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, toggle_read};
use crate::catalog::domain::library::{Library, SharedLibrary};
use crate::catalog::factory::create_catalog_service;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gui::controller::{close_form, click_remove, click_toggle, index, show_form};
use crate::gui::display::HtmlDisplayArea;
use crate::gui::view::LibraryGui;

pub type SharedGui = Arc<Mutex<LibraryGui<HtmlDisplayArea>>>;

// AppState is built once per session and shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) library: SharedLibrary,
    pub(crate) gui: SharedGui,
}

impl AppState {
    pub async fn new(config: Configuration) -> LibraryResult<AppState> {
        let library = Library::default().shared();
        let catalog = create_catalog_service(&config, library.clone()).await;
        let gui = LibraryGui::bind(catalog, HtmlDisplayArea::new("books")).await?;
        Ok(AppState {
            config,
            library,
            gui: Arc::new(Mutex::new(gui)),
        })
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/books", post(close_form))
        .route("/books/new", get(show_form))
        .route("/books/:id/toggle", post(click_toggle))
        .route("/books/:id/remove", post(click_remove))
        .route("/api/books", get(list_books).post(add_book))
        .route("/api/books/:id", get(find_book_by_id).delete(remove_book))
        .route("/api/books/:id/toggle", post(toggle_read))
        .with_state(state)
}

pub(crate) type ServerError = (StatusCode, String);

pub(crate) fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
