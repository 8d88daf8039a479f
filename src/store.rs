//! In-memory task collection used by the binary.
//!
//! Nothing here is persisted: the store lives as long as the process.

use crate::actions::TodoActions;
use crate::todo::{Task, TaskId};

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    tasks: Vec<Task>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn next_id(&self) -> TaskId {
        let Some(max) = self.tasks.iter().map(|task| task.id.0).max() else {
            return TaskId(0);
        };
        match max.checked_add(1) {
            Some(id) => TaskId(id),
            // Top of the id space is taken, fall back to the lowest free id
            None => (0..u64::MAX)
                .map(TaskId)
                .find(|id| self.tasks.iter().all(|task| task.id != *id))
                .unwrap_or(TaskId(0)),
        }
    }
}

impl TodoActions for TodoStore {
    fn add_todo(&mut self, text: String) {
        let id = self.next_id();
        log::debug!("store: add {} {:?}", id, text);
        self.tasks.push(Task {
            id,
            text,
            completed: false,
        });
    }

    fn edit_todo(&mut self, id: TaskId, text: String) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.text = text;
        }
    }

    fn delete_todo(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    fn complete_todo(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
        }
    }

    fn complete_all(&mut self) {
        // All done flips everything back to active
        let all_completed = self.tasks.iter().all(|task| task.completed);
        for task in &mut self.tasks {
            task.completed = !all_completed;
        }
    }

    fn clear_completed(&mut self) {
        self.tasks.retain(|task| !task.completed);
    }
}
