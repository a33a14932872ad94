use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, warn};
use crate::core::command::CommandError;
use crate::core::controller::{AppState, ServerError};
use crate::core::library::LibraryError;
use crate::gui::display::DisplayArea;
use crate::gui::event::{ClickEvent, Control, UiEvent};
use crate::gui::form::BookForm;
use crate::gui::page::PageView;

async fn render_page(state: &AppState, dialog_open: bool) -> Response {
    let mut gui = state.gui.lock().await;
    // the json api may have changed the shelf since the last render
    match gui.refresh().await {
        Ok(rendered) => {
            debug!(?rendered, generation = gui.display().generation(), "refreshed display area");
            let page = PageView::new(state.config.shelf_name.as_str(), gui.display().render())
                .with_dialog(dialog_open);
            Html(page.render()).into_response()
        }
        Err(err) => error_page(state, gui.display().render(), err, None),
    }
}

// A rejected dialog comes back open with the submitted fields filled in.
fn error_page(state: &AppState, display_area: String, err: LibraryError, rejected: Option<&BookForm>) -> Response {
    let message = err.to_string();
    let (status, _) = ServerError::from(CommandError::from(err));
    let page = PageView::new(state.config.shelf_name.as_str(), display_area)
        .with_dialog(rejected.is_some())
        .with_form(rejected)
        .with_error(Some(message));
    (status, Html(page.render())).into_response()
}

async fn dispatch(state: AppState, event: UiEvent) -> Response {
    let submitted = match &event {
        UiEvent::FormClosed(form) => Some(form.clone()),
        UiEvent::Click(_) => None,
    };
    let mut gui = state.gui.lock().await;
    match gui.dispatch(event).await {
        Ok(rendered) => {
            debug!(?rendered, generation = gui.display().generation(), "handled ui event");
            Redirect::to("/").into_response()
        }
        Err(err) => {
            warn!(error = %err, "ui event failed");
            let rejected = submitted.as_ref().filter(|_| matches!(err, LibraryError::Validation { .. }));
            error_page(&state, gui.display().render(), err, rejected)
        }
    }
}

pub(crate) async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, false).await
}

pub(crate) async fn show_form(State(state): State<AppState>) -> Response {
    render_page(&state, true).await
}

pub(crate) async fn close_form(
    State(state): State<AppState>,
    Form(form): Form<BookForm>) -> Response {
    dispatch(state, UiEvent::FormClosed(form)).await
}

pub(crate) async fn click_toggle(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Response {
    dispatch(state, UiEvent::Click(ClickEvent::new(book_id.as_str(), Control::ToggleRead))).await
}

pub(crate) async fn click_remove(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Response {
    dispatch(state, UiEvent::Click(ClickEvent::new(book_id.as_str(), Control::Remove))).await
}
