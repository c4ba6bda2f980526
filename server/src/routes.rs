//! Request handlers.
//!
//! Every handler works on the live session placed in the request extensions
//! by `session::load_session`; none of them touch the store directly.

use axum::{
    extract::Path,
    http::StatusCode,
    response::Redirect,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use todo_core::{sort_todos, ListId, Session, Todo, TodoId, TodoList, TodoRecord};
use tracing::info;

use crate::{error::AppError, session::SessionHandle, validation};

/// Request payload for creating or renaming a list and for adding a todo.
/// A missing title is treated like an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TitleInput {
    #[serde(default)]
    pub title: String,
}

/// One row of the lists overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: ListId,
    pub title: String,
    pub done: bool,
    pub todo_count: usize,
    pub remaining: usize,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            done: list.is_done(),
            todo_count: list.len(),
            remaining: list.remaining_count(),
        }
    }
}

/// A single list with its todos in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub id: ListId,
    pub title: String,
    pub done: bool,
    pub todos: Vec<TodoRecord>,
}

impl From<&TodoList> for ListView {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            done: list.is_done(),
            todos: sort_todos(list).into_iter().map(TodoRecord::from).collect(),
        }
    }
}

/// Result of a mutating request: a user-facing message plus the affected
/// list, when it still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListView>,
}

impl Outcome {
    fn new(message: impl Into<String>, list: Option<&TodoList>) -> Json<Self> {
        Json(Self {
            message: message.into(),
            list: list.map(ListView::from),
        })
    }
}

/// Path segments are compared against ids as text; anything that is not a
/// number cannot name an existing entity.
fn parse_id(raw: &str) -> Result<u64, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}

fn list_mut(session: &mut Session, list_id: ListId) -> Result<&mut TodoList, AppError> {
    session.find_list_by_id_mut(list_id).ok_or(AppError::NotFound)
}

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

pub async fn list_lists(Extension(handle): Extension<SessionHandle>) -> Json<Vec<ListSummary>> {
    let session = handle.lock().await;
    Json(session.sorted_lists().into_iter().map(ListSummary::from).collect())
}

pub async fn create_list(
    Extension(handle): Extension<SessionHandle>,
    Json(input): Json<TitleInput>,
) -> Result<(StatusCode, Json<Outcome>), AppError> {
    let mut session = handle.lock().await;
    let title = validation::list_title(&input.title, &session)?;
    let list = TodoList::new(title)?;
    info!(list_id = list.id(), "list created");
    let outcome = Outcome::new("The todo list has been created.", Some(&list));
    session.push(list);
    Ok((StatusCode::CREATED, outcome))
}

pub async fn show_list(
    Extension(handle): Extension<SessionHandle>,
    Path(list_id): Path<String>,
) -> Result<Json<ListView>, AppError> {
    let list_id = parse_id(&list_id)?;
    let session = handle.lock().await;
    let list = session.find_list_by_id(list_id).ok_or(AppError::NotFound)?;
    Ok(Json(ListView::from(list)))
}

pub async fn rename_list(
    Extension(handle): Extension<SessionHandle>,
    Path(list_id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Result<Json<Outcome>, AppError> {
    let list_id = parse_id(&list_id)?;
    let mut session = handle.lock().await;
    if session.find_list_by_id(list_id).is_none() {
        return Err(AppError::NotFound);
    }
    let title = validation::list_title(&input.title, &session)?;
    let list = list_mut(&mut session, list_id)?;
    list.set_title(title)?;
    Ok(Outcome::new("The todo list has been renamed.", Some(&*list)))
}

pub async fn destroy_list(
    Extension(handle): Extension<SessionHandle>,
    Path(list_id): Path<String>,
) -> Result<Json<Outcome>, AppError> {
    let list_id = parse_id(&list_id)?;
    let mut session = handle.lock().await;
    session.remove_list(list_id).ok_or(AppError::NotFound)?;
    info!(list_id, "list deleted");
    Ok(Outcome::new("List has been deleted.", None))
}

pub async fn complete_all(
    Extension(handle): Extension<SessionHandle>,
    Path(list_id): Path<String>,
) -> Result<Json<Outcome>, AppError> {
    let list_id = parse_id(&list_id)?;
    let mut session = handle.lock().await;
    let list = list_mut(&mut session, list_id)?;
    list.mark_all_done();
    Ok(Outcome::new("All todos have been marked as done", Some(&*list)))
}

pub async fn add_todo(
    Extension(handle): Extension<SessionHandle>,
    Path(list_id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Result<(StatusCode, Json<Outcome>), AppError> {
    let list_id = parse_id(&list_id)?;
    let mut session = handle.lock().await;
    let list = list_mut(&mut session, list_id)?;
    let title = validation::todo_title(&input.title)?;
    list.add(Todo::new(title)?);
    Ok((
        StatusCode::CREATED,
        Outcome::new("The todo has been added to the list.", Some(&*list)),
    ))
}

pub async fn toggle_todo(
    Extension(handle): Extension<SessionHandle>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Json<Outcome>, AppError> {
    let (list_id, todo_id): (ListId, TodoId) = (parse_id(&list_id)?, parse_id(&todo_id)?);
    let mut session = handle.lock().await;
    let todo = session
        .find_todo_by_id_mut(list_id, todo_id)
        .ok_or(AppError::NotFound)?;

    let message = if todo.is_done() {
        todo.mark_undone();
        format!("\"{}\" marked NOT done.", todo.title())
    } else {
        todo.mark_done();
        format!("\"{}\" marked done.", todo.title())
    };
    Ok(Outcome::new(message, session.find_list_by_id(list_id)))
}

pub async fn destroy_todo(
    Extension(handle): Extension<SessionHandle>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Result<Json<Outcome>, AppError> {
    let (list_id, todo_id): (ListId, TodoId) = (parse_id(&list_id)?, parse_id(&todo_id)?);
    let mut session = handle.lock().await;
    let list = list_mut(&mut session, list_id)?;
    list.remove_by_id(todo_id).ok_or(AppError::NotFound)?;
    Ok(Outcome::new("The todo has been deleted.", Some(&*list)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_numbers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(parse_id("-1"), Err(AppError::NotFound)));
    }

    #[test]
    fn list_view_shows_todos_in_display_order() {
        let mut list = TodoList::new("Groceries").unwrap();
        list.add(Todo::new("Milk").unwrap());
        let mut bread = Todo::new("Bread").unwrap();
        bread.mark_done();
        list.add(bread);
        list.add(Todo::new("Apples").unwrap());

        let view = ListView::from(&list);
        let titles: Vec<_> = view.todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Apples", "Milk", "Bread"]);
        assert!(!view.done);
    }

    #[test]
    fn summary_counts_remaining() {
        let mut list = TodoList::new("Chores").unwrap();
        list.add(Todo::new("a").unwrap());
        let mut b = Todo::new("b").unwrap();
        b.mark_done();
        list.add(b);

        let summary = ListSummary::from(&list);
        assert_eq!(summary.todo_count, 2);
        assert_eq!(summary.remaining, 1);
        assert!(!summary.done);
    }

    #[test]
    fn outcome_omits_missing_list() {
        let Json(outcome) = Outcome::new("List has been deleted.", None);
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("list").is_none());
    }
}
