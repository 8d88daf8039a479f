use crate::actions::TodoActions;
use crate::todo::TaskId;

/// User intent produced by a component in response to an input event.
///
/// Store-bound variants map one to one onto [`TodoActions`]; the rest are
/// handled by the application shell itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Task operations
    AddTodo(String),
    EditTodo { id: TaskId, text: String },
    DeleteTodo(TaskId),
    CompleteTodo(TaskId),
    CompleteAll,
    ClearCompleted,

    // Focus
    FocusNewTodo,
    FocusList,

    // App
    CycleIconTheme,
    Quit,

    /// Several intents raised by one event, applied in order
    Batch(Vec<Action>),
    None,
}

impl Action {
    /// Fold two actions into one, dropping `None`s.
    #[must_use]
    pub fn and(self, next: Action) -> Action {
        match (self, next) {
            (Action::None, next) => next,
            (first, Action::None) => first,
            (Action::Batch(mut actions), next) => {
                actions.push(next);
                Action::Batch(actions)
            }
            (first, next) => Action::Batch(vec![first, next]),
        }
    }

    /// Invoke the matching operation on `actions`.
    ///
    /// Returns the number of operations invoked; non-task actions are skipped.
    pub fn dispatch(self, actions: &mut dyn TodoActions) -> usize {
        match self {
            Action::AddTodo(text) => actions.add_todo(text),
            Action::EditTodo { id, text } => actions.edit_todo(id, text),
            Action::DeleteTodo(id) => actions.delete_todo(id),
            Action::CompleteTodo(id) => actions.complete_todo(id),
            Action::CompleteAll => actions.complete_all(),
            Action::ClearCompleted => actions.clear_completed(),
            Action::Batch(batch) => return batch.into_iter().map(|action| action.dispatch(actions)).sum(),
            _ => return 0,
        }
        1
    }
}
