//! Display ordering for todos and lists.
//!
//! Both entry points use the same two-bucket order: not-done items first,
//! then done items, each bucket ordered by lower-cased title. The sort is
//! stable, so equal titles keep their input order. Sorting returns borrowed
//! views and never reorders the underlying storage.
//!
//! Lower-cased titles are compared as `str`, i.e. by Unicode code point.
//! This differs from UTF-16 code-unit order only for titles that mix
//! characters in U+E000..=U+FFFF with characters outside the BMP.

use std::cmp::Ordering;

use crate::todo::Todo;
use crate::todo_list::TodoList;

/// Anything that can be placed in a done / not-done bucket and ordered by title.
pub trait Sortable {
    fn title(&self) -> &str;
    fn is_done(&self) -> bool;
}

impl Sortable for Todo {
    fn title(&self) -> &str {
        Todo::title(self)
    }

    fn is_done(&self) -> bool {
        Todo::is_done(self)
    }
}

impl Sortable for TodoList {
    fn title(&self) -> &str {
        TodoList::title(self)
    }

    fn is_done(&self) -> bool {
        TodoList::is_done(self)
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn title(&self) -> &str {
        (**self).title()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }
}

fn compare_by_title<T: Sortable>(a: &T, b: &T) -> Ordering {
    a.title().to_lowercase().cmp(&b.title().to_lowercase())
}

/// Two-bucket sort over any slice of sortable items.
pub fn sort_by_status<T: Sortable>(items: &[T]) -> Vec<&T> {
    let (mut undone, mut done): (Vec<&T>, Vec<&T>) =
        items.iter().partition(|item| !item.is_done());

    undone.sort_by(|a, b| compare_by_title(*a, *b));
    done.sort_by(|a, b| compare_by_title(*a, *b));

    undone.extend(done);
    undone
}

/// Todos of `list` in display order.
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    sort_by_status(list.todos())
}

/// Lists in display order for the overview.
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    sort_by_status(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str, done: bool) -> Todo {
        let mut t = Todo::new(title).unwrap();
        if done {
            t.mark_done();
        }
        t
    }

    fn titles<T: Sortable>(items: &[T]) -> Vec<&str> {
        items.iter().map(Sortable::title).collect()
    }

    #[test]
    fn groceries_scenario() {
        let mut list = TodoList::new("Groceries").unwrap();
        list.add(todo("Milk", false));
        list.add(todo("Bread", true));
        list.add(todo("Apples", false));

        let sorted = sort_todos(&list);
        assert_eq!(titles(&sorted), ["Apples", "Milk", "Bread"]);

        // storage order untouched
        let stored: Vec<_> = list.todos().iter().map(Todo::title).collect();
        assert_eq!(stored, ["Milk", "Bread", "Apples"]);
    }

    #[test]
    fn comparison_ignores_case() {
        let items = vec![todo("banana", false), todo("Apple", false), todo("cherry", false)];
        assert_eq!(titles(&sort_by_status(&items)), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn equal_titles_keep_input_order() {
        let items = vec![todo("same", false), todo("SAME", false), todo("Same", false)];
        let sorted = sort_by_status(&items);
        let ids: Vec<_> = sorted.iter().map(|t| t.id()).collect();
        let input: Vec<_> = items.iter().map(Todo::id).collect();
        assert_eq!(ids, input);
    }

    #[test]
    fn sorting_is_idempotent() {
        let items = vec![
            todo("d", true),
            todo("B", false),
            todo("a", true),
            todo("c", false),
        ];
        let once = sort_by_status(&items);
        let twice = sort_by_status(&once);
        let once_ids: Vec<_> = once.iter().map(|t| t.id()).collect();
        let twice_ids: Vec<_> = twice.iter().map(|t| t.id()).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn lists_sort_with_empty_lists_in_not_done_bucket() {
        let mut finished = TodoList::new("Alpha").unwrap();
        finished.add(todo("x", true));
        let empty = TodoList::new("Zulu").unwrap();
        let mut open = TodoList::new("beta").unwrap();
        open.add(todo("y", false));

        let lists = vec![finished, empty, open];
        let sorted = sort_todo_lists(&lists);
        assert_eq!(titles(&sorted), ["beta", "Zulu", "Alpha"]);
    }

    #[test]
    fn titles_compare_by_code_point() {
        let items = vec![todo("\u{1F600} party", false), todo("\u{FF41}pple", false)];
        assert_eq!(
            titles(&sort_by_status(&items)),
            ["\u{FF41}pple", "\u{1F600} party"]
        );
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        let lists: Vec<TodoList> = Vec::new();
        assert!(sort_todo_lists(&lists).is_empty());
    }
}
