//! The action interface the view layer reports user intent through.
//!
//! Components never mutate tasks themselves. Every change goes through one of
//! the six operations of [`TodoActions`], implemented by whatever owns the
//! task collection (see [`crate::store::TodoStore`] for the in-memory one).

use crate::todo::TaskId;

/// Errors raised while assembling an action bundle.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ActionsError {
    #[error("Missing required callback: {0}")]
    MissingCallback(&'static str),
}

/// Capability interface for the task collection's owner.
pub trait TodoActions {
    fn add_todo(&mut self, text: String);
    fn edit_todo(&mut self, id: TaskId, text: String);
    fn delete_todo(&mut self, id: TaskId);
    fn complete_todo(&mut self, id: TaskId);
    fn complete_all(&mut self);
    fn clear_completed(&mut self);
}

type TextCallback = Box<dyn FnMut(String)>;
type IdCallback = Box<dyn FnMut(TaskId)>;
type IdTextCallback = Box<dyn FnMut(TaskId, String)>;
type UnitCallback = Box<dyn FnMut()>;

/// [`TodoActions`] backed by individual closures.
///
/// Built through [`CallbackActions::builder`]; every callback is required and
/// `build` refuses to produce a bundle with a hole in it.
pub struct CallbackActions {
    add: TextCallback,
    edit: IdTextCallback,
    delete: IdCallback,
    complete: IdCallback,
    complete_all: UnitCallback,
    clear_completed: UnitCallback,
}

impl CallbackActions {
    pub fn builder() -> CallbackActionsBuilder {
        CallbackActionsBuilder::default()
    }
}

impl TodoActions for CallbackActions {
    fn add_todo(&mut self, text: String) {
        (self.add)(text)
    }

    fn edit_todo(&mut self, id: TaskId, text: String) {
        (self.edit)(id, text)
    }

    fn delete_todo(&mut self, id: TaskId) {
        (self.delete)(id)
    }

    fn complete_todo(&mut self, id: TaskId) {
        (self.complete)(id)
    }

    fn complete_all(&mut self) {
        (self.complete_all)()
    }

    fn clear_completed(&mut self) {
        (self.clear_completed)()
    }
}

#[derive(Default)]
pub struct CallbackActionsBuilder {
    add: Option<TextCallback>,
    edit: Option<IdTextCallback>,
    delete: Option<IdCallback>,
    complete: Option<IdCallback>,
    complete_all: Option<UnitCallback>,
    clear_completed: Option<UnitCallback>,
}

impl CallbackActionsBuilder {
    pub fn add(mut self, f: impl FnMut(String) + 'static) -> Self {
        self.add = Some(Box::new(f));
        self
    }

    pub fn edit(mut self, f: impl FnMut(TaskId, String) + 'static) -> Self {
        self.edit = Some(Box::new(f));
        self
    }

    pub fn delete(mut self, f: impl FnMut(TaskId) + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    pub fn complete(mut self, f: impl FnMut(TaskId) + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }

    pub fn complete_all(mut self, f: impl FnMut() + 'static) -> Self {
        self.complete_all = Some(Box::new(f));
        self
    }

    pub fn clear_completed(mut self, f: impl FnMut() + 'static) -> Self {
        self.clear_completed = Some(Box::new(f));
        self
    }

    /// Assemble the bundle, failing on the first absent callback.
    pub fn build(self) -> Result<CallbackActions, ActionsError> {
        Ok(CallbackActions {
            add: self.add.ok_or(ActionsError::MissingCallback("add"))?,
            edit: self.edit.ok_or(ActionsError::MissingCallback("edit"))?,
            delete: self.delete.ok_or(ActionsError::MissingCallback("delete"))?,
            complete: self.complete.ok_or(ActionsError::MissingCallback("complete"))?,
            complete_all: self
                .complete_all
                .ok_or(ActionsError::MissingCallback("complete_all"))?,
            clear_completed: self
                .clear_completed
                .ok_or(ActionsError::MissingCallback("clear_completed"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn full_builder(log: Rc<RefCell<Vec<String>>>) -> CallbackActionsBuilder {
        let (a, e, d, c, ca, cc) = (
            log.clone(),
            log.clone(),
            log.clone(),
            log.clone(),
            log.clone(),
            log,
        );
        CallbackActions::builder()
            .add(move |text| a.borrow_mut().push(format!("add {text}")))
            .edit(move |id, text| e.borrow_mut().push(format!("edit {id} {text}")))
            .delete(move |id| d.borrow_mut().push(format!("delete {id}")))
            .complete(move |id| c.borrow_mut().push(format!("complete {id}")))
            .complete_all(move || ca.borrow_mut().push("complete_all".to_string()))
            .clear_completed(move || cc.borrow_mut().push("clear_completed".to_string()))
    }

    #[test]
    fn test_build_with_all_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut actions = full_builder(log.clone()).build().unwrap();

        actions.add_todo("milk".to_string());
        actions.edit_todo(TaskId(1), "eggs".to_string());
        actions.delete_todo(TaskId(2));
        actions.complete_todo(TaskId(3));
        actions.complete_all();
        actions.clear_completed();

        assert_eq!(
            *log.borrow(),
            vec![
                "add milk",
                "edit 1 eggs",
                "delete 2",
                "complete 3",
                "complete_all",
                "clear_completed"
            ]
        );
    }

    #[test]
    fn test_missing_callback_is_rejected() {
        let result = CallbackActions::builder()
            .add(|_| {})
            .edit(|_, _| {})
            .complete(|_| {})
            .complete_all(|| {})
            .clear_completed(|| {})
            .build();

        assert_eq!(result.err(), Some(ActionsError::MissingCallback("delete")));
    }

    #[test]
    fn test_empty_builder_reports_first_missing() {
        let err = CallbackActions::builder().build().err().unwrap();
        assert_eq!(err.to_string(), "Missing required callback: add");
    }
}
